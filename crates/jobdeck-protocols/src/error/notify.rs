//! Notification hub errors.

use thiserror::Error;

/// Errors from the notification hub.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifyError {
    /// The hub has been closed.
    #[error("Notification hub is closed")]
    Closed,
}
