//! Query state errors.

use thiserror::Error;

use super::FilterError;

/// Errors from query state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Filter operation failed.
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// Page numbers start at 1.
    #[error("Page must be at least 1")]
    InvalidPage,

    /// Limit must be at least 1.
    #[error("Limit must be at least 1")]
    InvalidLimit,

    /// Entity type must not be empty.
    #[error("Entity type must not be empty")]
    EmptyEntityType,
}
