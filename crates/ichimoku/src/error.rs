//! Error types for the ichimoku crate.
//!
//! Running out of history is never an error here: a calculator that has not
//! finished warming up simply yields no record. The variants below cover
//! malformed configuration and misuse of the lower-level building blocks.

use thiserror::Error;

/// The main error type for ichimoku operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A configured period is invalid.
    ///
    /// Returned at construction time when one of the window periods is zero.
    /// This is a programmer error: the caller must supply a valid
    /// configuration, there is nothing to retry.
    #[error("invalid {parameter} {period}: {reason}")]
    InvalidPeriod {
        /// Name of the offending parameter (e.g. `"base_period"`).
        parameter: &'static str,
        /// The invalid period value that was provided.
        period: usize,
        /// Description of why the period is invalid.
        reason: &'static str,
    },

    /// An extremum was requested from a window that never received a value.
    #[error("empty window: no values have been pushed")]
    EmptyWindow,

    /// Parallel input columns have different lengths.
    #[error("length mismatch: {description}")]
    LengthMismatch {
        /// Description of the mismatch.
        description: String,
    },

    /// A pre-allocated output buffer is shorter than the input.
    #[error("output buffer too small: required {required} elements, got {actual}")]
    BufferTooSmall {
        /// The number of elements required.
        required: usize,
        /// The number of elements available.
        actual: usize,
    },
}

/// Convenience type alias for Results using the ichimoku Error type.
pub type Result<T> = std::result::Result<T, Error>;
