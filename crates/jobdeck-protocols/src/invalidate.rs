//! Cache invalidation collaborator trait.

use std::collections::BTreeSet;

use async_trait::async_trait;

/// Accepts the set of cache tags to drop after a mutation.
///
/// The engine only computes which tags to invalidate; performing the
/// invalidation belongs to the hosting framework behind this trait.
#[async_trait]
pub trait CacheInvalidator: Send + Sync {
    /// Invalidate every tag in `tags`.
    async fn invalidate(&self, tags: BTreeSet<String>);
}

/// Invalidator that does nothing. Useful when no cache is in play.
#[derive(Debug, Default)]
pub struct NoopInvalidator;

#[async_trait]
impl CacheInvalidator for NoopInvalidator {
    async fn invalidate(&self, _tags: BTreeSet<String>) {}
}
