//! Error types for stripe-models.

use crate::form::FormError;
use crate::ids::IdError;

/// Result type for stripe-models operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding responses or encoding requests.
///
/// Business outcomes such as a declined authorization are never errors here;
/// they arrive as status and reason values on the decoded resources.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A response body did not match the expected shape.
    #[error("JSON decoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// A request could not be form-encoded.
    #[error("form encoding error: {0}")]
    Form(#[from] FormError),

    /// Invalid identifier.
    #[error("invalid identifier: {0}")]
    InvalidId(#[from] IdError),

    /// A string is not a valid decimal number.
    #[error("invalid decimal: {value}")]
    InvalidDecimal {
        /// The rejected input.
        value: String,
    },

    /// A string is not a three-letter currency code.
    #[error("invalid currency code: {value}")]
    InvalidCurrency {
        /// The rejected input.
        value: String,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),
}
