use arrow::error::ArrowError;

/// Errors raised while sampling a range or assembling a table.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// One of the bounds is NaN or infinite.
    #[error("Range bounds must be finite, got [{lower}, {upper}]")]
    NonFiniteBound { lower: f64, upper: f64 },

    /// `lower` is greater than `upper`.
    #[error("Lower bound {lower} is greater than upper bound {upper}")]
    InvertedBounds { lower: f64, upper: f64 },

    /// A range must hold at least one sample.
    #[error("Sample count must be at least 1")]
    EmptyRange,

    #[error("x has {x} values but y has {y}")]
    LengthMismatch { x: usize, y: usize },

    #[error("Column labels must differ, both are '{0}'")]
    DuplicateLabel(String),

    /// A cell that needs the computed curve ran before the computation.
    #[error("No curve has been computed yet")]
    MissingCurve,

    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),
}

pub type Result<T> = std::result::Result<T, Error>;
