//! Error types for atmr

use thiserror::Error;

/// Result type alias using atmr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in atmr operations
#[derive(Error, Debug)]
pub enum Error {
    /// Division by an extended scalar whose renormalized mantissa is zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Mismatched array lengths in an operation
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected length
        expected: usize,
        /// Actual length
        got: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

impl Error {
    /// Create a dimension mismatch error
    pub fn dimension_mismatch(expected: usize, got: usize) -> Self {
        Self::DimensionMismatch { expected, got }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
