use thiserror::Error;

/// Errors returned by clustering in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// A spatial index was built over a different collection than the one
    /// being clustered.
    #[error("spatial index covers {indexed} points, but {points} were supplied")]
    IndexMismatch {
        /// Number of points the index was built over.
        indexed: usize,
        /// Number of points supplied to the clustering call.
        points: usize,
    },

    /// Other error. Caller-supplied distance functions can use this variant
    /// to abort a clustering run; the error is surfaced to the caller as-is.
    #[error("{0}")]
    Other(String),
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
