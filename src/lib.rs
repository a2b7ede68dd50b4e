//! Sample `y = x²` over a range, plot it, tabulate it and call an external
//! list helper.
//!
//! Architecture:
//! ```text
//!   Config ──► Session ──► cells: Computation → Visualization → Table → Helper
//!                 │
//!                 ├── data     (range, transform, table, export)
//!                 ├── helper   (ext_list behind ListHelper)
//!                 └── app / ui (eframe window: plot, controls, table grid)
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod helper;
pub mod session;
pub mod ui;
