// tristate error handling
// Central location for the errors raised by the Maybe/Either combinators

use std::fmt;
use thiserror::Error;

// Re-export for convenience
pub use thiserror;

mod macros;

/// Error code structure for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorCode(pub u32);

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// Error codes for the combinator layer
pub mod codes {
    use crate::ErrorCode;

    // Combinator error codes start with 1000
    pub const INVALID_ARGUMENT: ErrorCode = ErrorCode(1001);
    pub const INVALID_OPERATION: ErrorCode = ErrorCode(1002);
}

/// Programmer errors raised by the combinator layer.
///
/// Absence is never reported through this type: an empty `Maybe` or a
/// `Neither` is a value, not a failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MonadError {
    /// A required argument was absent
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A comprehension projection produced no value
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

impl MonadError {
    /// Create an invalid argument error naming the offending parameter
    pub fn invalid_argument(name: impl Into<String>) -> Self {
        MonadError::InvalidArgument(format!("`{}` must hold a value", name.into()))
    }

    /// Create an invalid operation error
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        MonadError::InvalidOperation(message.into())
    }

    /// Numeric code of this error
    pub fn code(&self) -> ErrorCode {
        match self {
            MonadError::InvalidArgument(_) => codes::INVALID_ARGUMENT,
            MonadError::InvalidOperation(_) => codes::INVALID_OPERATION,
        }
    }

    /// Returns a unique static string code for this error type.
    pub fn error_code(&self) -> &'static str {
        match self {
            MonadError::InvalidArgument(_) => "TRISTATE_INVALID_ARGUMENT",
            MonadError::InvalidOperation(_) => "TRISTATE_INVALID_OPERATION",
        }
    }
}

/// Convenient Result type for combinator operations
pub type Result<T> = std::result::Result<T, MonadError>;
