//! Mutation service: data source + cache invalidation + notifications.
//!
//! Every mutating operation funnels through here so the "which tags to
//! drop" decision lives in one place ([`jobdeck_core::invalidation_targets`])
//! instead of being sprinkled through handlers.

use std::sync::Arc;

use tracing::{debug, info};

use jobdeck_core::invalidation_targets;
use jobdeck_core::notify::{NotificationHub, NotificationLevel};
use jobdeck_protocols::{
    ApiError, CacheInvalidator, JobDataSource, JobUpdate, NewJob, Page, QueryState,
    ScheduledJob,
};

/// Scheduler operations with their invalidation and notification side
/// effects.
pub struct JobService {
    source: Arc<dyn JobDataSource>,
    invalidator: Arc<dyn CacheInvalidator>,
    hub: Option<Arc<NotificationHub>>,
}

impl JobService {
    /// Create a service over a data source and an invalidation sink.
    pub fn new(source: Arc<dyn JobDataSource>, invalidator: Arc<dyn CacheInvalidator>) -> Self {
        Self {
            source,
            invalidator,
            hub: None,
        }
    }

    /// Publish success notifications to a hub.
    pub fn with_hub(mut self, hub: Arc<NotificationHub>) -> Self {
        self.hub = Some(hub);
        self
    }

    /// List jobs for a view. Read-only, no invalidation.
    pub async fn list(&self, query: &QueryState) -> Result<Page<ScheduledJob>, ApiError> {
        self.source.list(query).await
    }

    /// Fetch a single job. Read-only, no invalidation.
    pub async fn get(&self, entity_type: &str, id: &str) -> Result<ScheduledJob, ApiError> {
        self.source.get(entity_type, id).await
    }

    /// Create a job and invalidate its views.
    pub async fn create(
        &self,
        entity_type: &str,
        job: &NewJob,
    ) -> Result<ScheduledJob, ApiError> {
        let created = self.source.create(entity_type, job).await?;
        self.invalidate(entity_type, std::slice::from_ref(&created.id))
            .await;
        self.notify(format!("Created job {}", created.name));
        Ok(created)
    }

    /// Update a job and invalidate its views.
    pub async fn update(
        &self,
        entity_type: &str,
        id: &str,
        update: &JobUpdate,
    ) -> Result<ScheduledJob, ApiError> {
        let updated = self.source.update(entity_type, id, update).await?;
        self.invalidate(entity_type, std::slice::from_ref(&updated.id))
            .await;
        self.notify(format!("Updated job {}", updated.name));
        Ok(updated)
    }

    /// Delete a job and invalidate its views.
    pub async fn delete(&self, entity_type: &str, id: &str) -> Result<(), ApiError> {
        self.source.delete(entity_type, id).await?;
        self.invalidate(entity_type, &[id.to_string()]).await;
        self.notify(format!("Deleted job {id}"));
        Ok(())
    }

    /// Delete several jobs and invalidate their views.
    pub async fn delete_many(&self, entity_type: &str, ids: &[String]) -> Result<(), ApiError> {
        if ids.is_empty() {
            return Ok(());
        }
        self.source.delete_many(entity_type, ids).await?;
        self.invalidate(entity_type, ids).await;
        self.notify(format!("Deleted {} jobs", ids.len()));
        Ok(())
    }

    /// Upload a CSV of jobs; invalidates list views only (ids are assigned
    /// remotely and unknown here).
    pub async fn upload_csv(&self, entity_type: &str, content: Vec<u8>) -> Result<u64, ApiError> {
        let accepted = self.source.upload_csv(entity_type, content).await?;
        self.invalidate::<String>(entity_type, &[]).await;
        self.notify(format!("Imported {accepted} jobs"));
        Ok(accepted)
    }

    /// Export matching jobs as CSV bytes. Read-only, no invalidation.
    pub async fn export_csv(&self, query: &QueryState) -> Result<Vec<u8>, ApiError> {
        self.source.export_csv(query).await
    }

    async fn invalidate<S: AsRef<str>>(&self, entity_type: &str, ids: &[S]) {
        let targets = invalidation_targets(entity_type, ids);
        debug!(?targets, "Invalidating cache tags");
        self.invalidator.invalidate(targets).await;
    }

    fn notify(&self, message: String) {
        info!("{message}");
        if let Some(hub) = &self.hub {
            if let Err(error) = hub.publish(NotificationLevel::Success, message) {
                debug!("Notification not delivered: {error}");
            }
        }
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
