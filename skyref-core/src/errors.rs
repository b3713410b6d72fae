//! Error type for angle and coordinate construction.
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`NotFinite`](CoreError::NotFinite) | NaN or infinite RA/Dec handed to a validator |
//! | [`OutOfRange`](CoreError::OutOfRange) | Declination outside [-90°, +90°] |

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A NaN or infinite value reached a validator.
    #[error("{operation}: value is not finite")]
    NotFinite { operation: String },

    /// Value outside the valid domain of the quantity.
    #[error("{operation}: {message}")]
    OutOfRange { operation: String, message: String },
}

/// Convenience alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    pub fn not_finite(operation: &str) -> Self {
        Self::NotFinite {
            operation: operation.to_string(),
        }
    }

    pub fn out_of_range(operation: &str, message: impl Into<String>) -> Self {
        Self::OutOfRange {
            operation: operation.to_string(),
            message: message.into(),
        }
    }
}
