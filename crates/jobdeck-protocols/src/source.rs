//! Remote data collaborator trait.

use async_trait::async_trait;

use crate::error::ApiError;
use crate::job::{JobUpdate, NewJob, Page, ScheduledJob};
use crate::query::QueryState;

/// The remote job-scheduling REST API.
///
/// List and export consume exactly the canonical parameters a [`QueryState`]
/// produces; the engine never builds request parameters anywhere else. CSV
/// parsing and generation happen on the remote side - uploads and exports
/// are opaque byte pass-throughs here.
#[async_trait]
pub trait JobDataSource: Send + Sync {
    /// List jobs for a view.
    async fn list(&self, query: &QueryState) -> Result<Page<ScheduledJob>, ApiError>;

    /// Fetch a single job.
    async fn get(&self, entity_type: &str, id: &str) -> Result<ScheduledJob, ApiError>;

    /// Create a job.
    async fn create(&self, entity_type: &str, job: &NewJob) -> Result<ScheduledJob, ApiError>;

    /// Partially update a job.
    async fn update(
        &self,
        entity_type: &str,
        id: &str,
        update: &JobUpdate,
    ) -> Result<ScheduledJob, ApiError>;

    /// Delete a job.
    async fn delete(&self, entity_type: &str, id: &str) -> Result<(), ApiError>;

    /// Delete several jobs in one call.
    async fn delete_many(&self, entity_type: &str, ids: &[String]) -> Result<(), ApiError>;

    /// Upload a CSV of jobs; returns the number of accepted rows.
    async fn upload_csv(&self, entity_type: &str, content: Vec<u8>) -> Result<u64, ApiError>;

    /// Export the jobs matching a view as CSV bytes.
    async fn export_csv(&self, query: &QueryState) -> Result<Vec<u8>, ApiError>;
}
