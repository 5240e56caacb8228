//! Job status endpoints

use async_trait::async_trait;
use catsync_core::domain::job::{Job, JobHandle};
use catsync_core::dto::job::JobFields;
use tracing::debug;

use crate::CatalogClient;
use crate::error::{FetchError, PollError};
use crate::poll::{self, JobStatusSource, PollOptions};

impl CatalogClient {
    /// Fetch the current status snapshot of a job
    ///
    /// # Arguments
    /// * `job_id` - The job identifier returned at submission
    ///
    /// # Returns
    /// The job snapshot, including the full raw payload
    pub async fn job_status(&self, job_id: &str) -> Result<Job, FetchError> {
        let url = format!("{}/jobs/{}", self.base_url, job_id);
        debug!(%url, "querying job status");

        let response = self.get(&url).send().await?;
        let body = self.success_body(response).await?;

        parse_job(&body)
    }

    /// Poll a job until it reaches a terminal status
    ///
    /// Queries the job status every `options.poll_interval` until the
    /// service reports `success` or `failure`, `options.overall_timeout`
    /// passes, or `options.cancellation` fires. See the free-standing
    /// [`await_completion`](crate::await_completion) for the exact loop
    /// semantics.
    ///
    /// # Example
    /// ```no_run
    /// # use catsync_client::{CatalogClient, PollOptions};
    /// # use catsync_core::domain::job::JobHandle;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = CatalogClient::new("https://catalog.example.com", "acct-1", "token");
    /// let handle = JobHandle::new("job-123");
    /// let job = client.await_completion(&handle, PollOptions::default()).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn await_completion(
        &self,
        handle: &JobHandle,
        options: PollOptions,
    ) -> Result<Job, PollError> {
        poll::await_completion(self, handle, options).await
    }
}

#[async_trait]
impl JobStatusSource for CatalogClient {
    async fn job_status(&self, job_id: &str) -> Result<Job, FetchError> {
        CatalogClient::job_status(self, job_id).await
    }
}

/// Extracts a job snapshot from a status response body
fn parse_job(body: &str) -> Result<Job, FetchError> {
    let (raw, fields) =
        crate::decode_job::<JobFields>(body).map_err(|source| FetchError::Malformed {
            detail: source.to_string(),
            body: body.to_string(),
        })?;

    Ok(Job {
        id: fields.id,
        status: fields.status,
        raw,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use catsync_core::domain::job::JobStatus;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> CatalogClient {
        CatalogClient::new(server.uri(), "acct-1", "test-token")
    }

    #[tokio::test]
    async fn test_job_status_returns_snapshot_with_raw_payload() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/externals/acct-1/jobs/job-123"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "job": { "id": "job-123", "status": "success", "processed_count": 20 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let job = client_for(&server).job_status("job-123").await.unwrap();

        assert_eq!(job.id, "job-123");
        assert_eq!(job.status, JobStatus::Success);
        assert_eq!(job.raw["processed_count"], 20);
    }

    #[tokio::test]
    async fn test_job_status_preserves_unfamiliar_status_values() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "job": { "id": "job-123", "status": "reindexing" }
            })))
            .mount(&server)
            .await;

        let job = client_for(&server).job_status("job-123").await.unwrap();

        assert_eq!(job.status, JobStatus::Other("reindexing".to_string()));
        assert!(!job.status.is_terminal());
    }

    #[tokio::test]
    async fn test_job_status_surfaces_api_errors() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("no such job"))
            .mount(&server)
            .await;

        let error = client_for(&server).job_status("job-404").await.unwrap_err();

        assert_eq!(error.status(), Some(404));
    }

    #[tokio::test]
    async fn test_job_status_rejects_payloads_without_a_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "job": { "id": "job-123" }
            })))
            .mount(&server)
            .await;

        let error = client_for(&server).job_status("job-123").await.unwrap_err();

        assert!(matches!(error, FetchError::Malformed { .. }));
    }

    #[tokio::test]
    async fn test_await_completion_polls_until_the_service_reports_success() {
        let server = MockServer::start().await;

        // First poll sees the job still pending, second sees it done.
        Mock::given(method("GET"))
            .and(path("/api/externals/acct-1/jobs/job-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "job": { "id": "job-123", "status": "pending" }
            })))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/externals/acct-1/jobs/job-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "job": { "id": "job-123", "status": "success" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let options = PollOptions::default().with_poll_interval(Duration::ZERO);
        let job = client
            .await_completion(&JobHandle::new("job-123"), options)
            .await
            .unwrap();

        assert_eq!(job.status, JobStatus::Success);
    }
}
