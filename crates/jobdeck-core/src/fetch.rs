//! Last-write-wins coordination for in-flight fetches.
//!
//! The view store never blocks on a fetch. When a newer fetch has been
//! issued for the same logical view, results arriving for an older one must
//! be discarded rather than rendered out of order. Each fetch takes a
//! monotonically increasing generation; only the latest generation is
//! current.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Hands out fetch generations and answers which one is current.
#[derive(Debug, Clone, Default)]
pub struct FetchCoordinator {
    latest: Arc<AtomicU64>,
}

impl FetchCoordinator {
    /// Create a coordinator with no fetches issued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new fetch, superseding all earlier ones. Returns its
    /// generation.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `generation` is still the latest issued fetch.
    pub fn is_current(&self, generation: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == generation
    }

    /// The latest issued generation (0 when none).
    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }
}
