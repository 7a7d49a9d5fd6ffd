use thiserror::Error;

/// Errors returned by clustering algorithms in this crate.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Input slice is empty.
    #[error("empty input")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Points in a dataset have inconsistent dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// The distance metric reads more coordinates than the dataset provides.
    #[error("metric requires {required} coordinates, but points have {available}")]
    MetricDimension {
        /// Leading coordinates the metric reads.
        required: usize,
        /// Dimensionality of the dataset.
        available: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
