//! Publish/subscribe hub for transient UI notifications.
//!
//! Replaces the module-level listener arrays of the original dashboard with
//! an owned object: created on app start, closed on shutdown. Subscribers
//! that lag simply miss messages (broadcast semantics); notifications are
//! transient and never persisted.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tokio::sync::broadcast;
use tracing::debug;
use uuid::Uuid;

use jobdeck_protocols::NotifyError;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A transient message for the UI layer.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Create a notification with a fresh id and timestamp.
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
            created_at: Utc::now(),
        }
    }
}

/// Broadcast hub with an explicit lifecycle.
pub struct NotificationHub {
    sender: RwLock<Option<broadcast::Sender<Notification>>>,
}

impl NotificationHub {
    /// Create a hub buffering up to `capacity` messages per subscriber.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender: RwLock::new(Some(sender)),
        }
    }

    /// Subscribe to future notifications.
    pub fn subscribe(&self) -> Result<broadcast::Receiver<Notification>, NotifyError> {
        self.sender
            .read()
            .as_ref()
            .map(|sender| sender.subscribe())
            .ok_or(NotifyError::Closed)
    }

    /// Publish a notification. Returns the number of subscribers reached;
    /// zero subscribers is not an error.
    pub fn publish(
        &self,
        level: NotificationLevel,
        message: impl Into<String>,
    ) -> Result<usize, NotifyError> {
        let guard = self.sender.read();
        let sender = guard.as_ref().ok_or(NotifyError::Closed)?;
        let notification = Notification::new(level, message);
        debug!(level = ?notification.level, "Publishing notification: {}", notification.message);
        Ok(sender.send(notification).unwrap_or(0))
    }

    /// Close the hub. Subscribers observe the channel closing after draining
    /// buffered messages; later publishes and subscribes fail.
    pub fn close(&self) {
        self.sender.write().take();
    }

    /// Whether the hub has been closed.
    pub fn is_closed(&self) -> bool {
        self.sender.read().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_reaches_subscriber() {
        let hub = NotificationHub::new(16);
        let mut receiver = hub.subscribe().unwrap();

        let reached = hub
            .publish(NotificationLevel::Success, "3 jobs deleted")
            .unwrap();
        assert_eq!(reached, 1);

        let notification = receiver.recv().await.unwrap();
        assert_eq!(notification.level, NotificationLevel::Success);
        assert_eq!(notification.message, "3 jobs deleted");
    }

    #[tokio::test]
    async fn test_publish_without_subscribers() {
        let hub = NotificationHub::new(16);
        let reached = hub.publish(NotificationLevel::Info, "hello").unwrap();
        assert_eq!(reached, 0);
    }

    #[tokio::test]
    async fn test_multiple_subscribers() {
        let hub = NotificationHub::new(16);
        let mut first = hub.subscribe().unwrap();
        let mut second = hub.subscribe().unwrap();

        hub.publish(NotificationLevel::Warning, "upload rejected")
            .unwrap();

        assert_eq!(first.recv().await.unwrap().message, "upload rejected");
        assert_eq!(second.recv().await.unwrap().message, "upload rejected");
    }

    #[tokio::test]
    async fn test_closed_hub_rejects_publish_and_subscribe() {
        let hub = NotificationHub::new(16);
        hub.close();
        assert!(hub.is_closed());
        assert_eq!(
            hub.publish(NotificationLevel::Info, "late").unwrap_err(),
            NotifyError::Closed
        );
        assert!(hub.subscribe().is_err());
    }

    #[tokio::test]
    async fn test_subscriber_sees_close() {
        let hub = NotificationHub::new(16);
        let mut receiver = hub.subscribe().unwrap();
        hub.close();

        let result = receiver.recv().await;
        assert!(matches!(
            result,
            Err(broadcast::error::RecvError::Closed)
        ));
    }
}
