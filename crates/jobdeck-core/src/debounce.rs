//! Trailing-edge debounce for search input.
//!
//! The window is a responsiveness tunable (config `debounce_ms`, 300 ms by
//! default), not a correctness requirement.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::time;

/// Debounces a stream of signals down to the last one in each window.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    sequence: Arc<AtomicU64>,
}

impl Debouncer {
    /// Create a debouncer with the given settle window.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            sequence: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Register a signal and wait out the settle window.
    ///
    /// Returns `true` if this signal is still the newest when the window
    /// elapses (the caller should act on it), `false` if a later signal
    /// superseded it.
    pub async fn settle(&self) -> bool {
        let ticket = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        time::sleep(self.window).await;
        self.sequence.load(Ordering::SeqCst) == ticket
    }
}
