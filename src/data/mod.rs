/// Data layer: sampled ranges, the square transform, tables and export.
///
/// Architecture:
/// ```text
///   lower, upper, count
///        │
///        ▼
///   ┌──────────┐
///   │  range    │  linspace → Sequence
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ transform  │  pointwise x² → Curve { x, y }
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  table    │  Curve → Arrow RecordBatch ("x", "y")
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  .csv / .json / .parquet
///   └──────────┘
/// ```

pub mod error;
pub mod export;
pub mod model;
pub mod range;
pub mod table;
pub mod transform;

pub use error::{Error, Result};
