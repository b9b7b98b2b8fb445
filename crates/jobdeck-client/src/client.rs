//! Reqwest client for the remote scheduler API.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use jobdeck_protocols::{
    ApiError, JobDataSource, JobUpdate, NewJob, Page, QueryState, ScheduledJob,
};

#[derive(Serialize)]
struct BulkDeleteRequest<'a> {
    ids: &'a [String],
}

#[derive(Deserialize)]
struct UploadResponse {
    accepted: u64,
}

/// HTTP client for the scheduler's REST API.
///
/// List and export requests carry exactly the canonical view parameters:
/// `page`, `limit`, `search` (omitted when empty) and the serialized
/// filters. The entity type selects the resource path.
pub struct SchedulerApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl SchedulerApiClient {
    /// Create a client against a base URL.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self { http, base_url })
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))
    }

    fn view_url(&self, path: &str, query: &QueryState) -> Result<Url, ApiError> {
        let mut url = self.url(path)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("page", &query.page.to_string());
            pairs.append_pair("limit", &query.limit.to_string());
            if !query.search.is_empty() {
                pairs.append_pair("search", &query.search);
            }
            for (key, value) in query.filters.to_params().iter() {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let code = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("detail")
                    .or_else(|| v.get("message"))
                    .and_then(|m| m.as_str())
                    .map(String::from)
            })
            .unwrap_or(body);
        Err(ApiError::Status { code, message })
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response).await
    }
}

#[async_trait]
impl JobDataSource for SchedulerApiClient {
    async fn list(&self, query: &QueryState) -> Result<Page<ScheduledJob>, ApiError> {
        let url = self.view_url(&format!("api/{}", query.entity_type), query)?;
        debug!(%url, "Listing jobs");
        let response = self.send(self.http.get(url)).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get(&self, entity_type: &str, id: &str) -> Result<ScheduledJob, ApiError> {
        let url = self.url(&format!("api/{entity_type}/{id}"))?;
        let response = self.send(self.http.get(url)).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create(&self, entity_type: &str, job: &NewJob) -> Result<ScheduledJob, ApiError> {
        let url = self.url(&format!("api/{entity_type}"))?;
        let response = self.send(self.http.post(url).json(job)).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn update(
        &self,
        entity_type: &str,
        id: &str,
        update: &JobUpdate,
    ) -> Result<ScheduledJob, ApiError> {
        let url = self.url(&format!("api/{entity_type}/{id}"))?;
        let response = self.send(self.http.patch(url).json(update)).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn delete(&self, entity_type: &str, id: &str) -> Result<(), ApiError> {
        let url = self.url(&format!("api/{entity_type}/{id}"))?;
        self.send(self.http.delete(url)).await?;
        Ok(())
    }

    async fn delete_many(&self, entity_type: &str, ids: &[String]) -> Result<(), ApiError> {
        let url = self.url(&format!("api/{entity_type}/bulk-delete"))?;
        let body = BulkDeleteRequest { ids };
        self.send(self.http.post(url).json(&body)).await?;
        Ok(())
    }

    async fn upload_csv(&self, entity_type: &str, content: Vec<u8>) -> Result<u64, ApiError> {
        let url = self.url(&format!("api/{entity_type}/upload"))?;
        let response = self
            .send(
                self.http
                    .post(url)
                    .header("content-type", "text/csv")
                    .body(content),
            )
            .await?;
        let upload: UploadResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(upload.accepted)
    }

    async fn export_csv(&self, query: &QueryState) -> Result<Vec<u8>, ApiError> {
        let url = self.view_url(&format!("api/{}/export", query.entity_type), query)?;
        debug!(%url, "Exporting jobs");
        let response = self.send(self.http.get(url)).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
