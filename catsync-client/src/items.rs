//! Batch submission endpoint

use catsync_core::domain::item::Item;
use catsync_core::domain::job::JobHandle;
use catsync_core::dto::item::SyncUpdate;
use catsync_core::dto::job::SubmittedJob;
use tracing::info;

use crate::CatalogClient;
use crate::error::SubmissionError;

impl CatalogClient {
    /// Submit a batch of items to be synchronized into an item group
    ///
    /// The whole batch goes out as a single request, in the order given.
    /// On acceptance the service creates an asynchronous job and returns
    /// its handle; pass that to
    /// [`await_completion`](CatalogClient::await_completion) to observe
    /// the outcome.
    ///
    /// No retry happens at this layer. Callers that want retry-on-reject
    /// own that policy themselves.
    ///
    /// # Arguments
    /// * `group_id` - The item group to synchronize into
    /// * `items` - The records to submit
    ///
    /// # Returns
    /// The handle of the job processing the batch
    pub async fn sync_update(
        &self,
        group_id: &str,
        items: Vec<Item>,
    ) -> Result<JobHandle, SubmissionError> {
        let url = format!("{}/item_groups/{}/sync_update", self.base_url, group_id);
        let request = SyncUpdate { items };

        info!(%url, items = request.items.len(), "submitting sync-update batch");

        let response = self.post(&url).json(&request).send().await?;
        let body = self.success_body(response).await?;

        let (_, job) = crate::decode_job::<SubmittedJob>(&body).map_err(|source| {
            SubmissionError::MalformedResponse {
                detail: source.to_string(),
                body: body.clone(),
            }
        })?;

        if job.id.is_empty() {
            return Err(SubmissionError::MissingJobId { body });
        }

        info!(job_id = %job.id, "sync-update batch accepted");
        Ok(JobHandle::new(job.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> CatalogClient {
        CatalogClient::new(server.uri(), "acct-1", "test-token")
    }

    #[tokio::test]
    async fn test_sync_update_sends_batch_in_order_and_returns_handle() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/externals/acct-1/item_groups/grp-9/sync_update"))
            .and(header("authorization", "Bearer test-token"))
            .and(body_json(json!({
                "items": [
                    { "external_id": "EXT-1", "title": "first" },
                    { "external_id": "EXT-2", "title": "second" },
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "job": { "id": "job-123", "status": "pending" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let handle = client_for(&server)
            .sync_update(
                "grp-9",
                vec![Item::new("EXT-1", "first"), Item::new("EXT-2", "second")],
            )
            .await
            .unwrap();

        assert_eq!(handle.id, "job-123");
    }

    #[tokio::test]
    async fn test_sync_update_surfaces_rejections_with_status_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(422).set_body_string("group does not exist"))
            .mount(&server)
            .await;

        let error = client_for(&server)
            .sync_update("grp-9", vec![Item::new("EXT-1", "first")])
            .await
            .unwrap_err();

        match error {
            SubmissionError::Api { status, body } => {
                assert_eq!(status, 422);
                assert_eq!(body, "group does not exist");
            }
            other => panic!("expected an api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_sync_update_rejects_responses_without_a_job() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "accepted": true })))
            .mount(&server)
            .await;

        let error = client_for(&server)
            .sync_update("grp-9", vec![Item::new("EXT-1", "first")])
            .await
            .unwrap_err();

        assert!(matches!(error, SubmissionError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_sync_update_rejects_empty_job_ids() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "job": { "id": "" }
            })))
            .mount(&server)
            .await;

        let error = client_for(&server)
            .sync_update("grp-9", vec![Item::new("EXT-1", "first")])
            .await
            .unwrap_err();

        assert!(matches!(error, SubmissionError::MissingJobId { .. }));
    }
}
