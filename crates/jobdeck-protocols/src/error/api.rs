//! Remote scheduler API errors.

use thiserror::Error;

/// Errors from the remote scheduler API collaborator.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, TLS).
    #[error("Network error: {0}")]
    Network(String),

    /// The API answered with a non-success status.
    #[error("API error {code}: {message}")]
    Status { code: u16, message: String },

    /// Response body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Request could not be built.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}
