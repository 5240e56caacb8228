//! Catsync HTTP Client
//!
//! A type-safe HTTP client for the catalog service's batch-sync API.
//!
//! The service processes batch submissions asynchronously: a sync-update
//! request is accepted immediately and returns a job, and the outcome is
//! only known once that job reaches a terminal status. This crate covers
//! both halves of that lifecycle: submitting a batch, and polling the
//! resulting job until it succeeds, fails, times out, or is cancelled.
//!
//! # Example
//!
//! ```no_run
//! use catsync_client::{CatalogClient, PollOptions};
//! use catsync_core::domain::item::Item;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CatalogClient::new(
//!         "https://catalog.example.com",
//!         "account-uuid",
//!         "auth-token",
//!     );
//!
//!     let items = vec![Item::new("EXT-1", "First item")];
//!     let handle = client.sync_update("group-uuid", items).await?;
//!     let job = client.await_completion(&handle, PollOptions::default()).await?;
//!
//!     println!("job {} finished with status {}", job.id, job.status);
//!     Ok(())
//! }
//! ```

pub mod error;
mod items;
mod jobs;
mod poll;

// Re-export commonly used types
pub use error::{FetchError, PollError, SubmissionError};
pub use poll::{
    DEFAULT_OVERALL_TIMEOUT, DEFAULT_POLL_INTERVAL, JobStatusSource, PollOptions, await_completion,
};

use crate::error::HttpFailure;
use catsync_core::dto::job::JobEnvelope;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the catalog batch-sync API
///
/// The client is scoped to one account: the account identifier is folded
/// into the base URL at construction time and every request carries the
/// bearer token and JSON content type. Cloning is cheap and clones share
/// the underlying connection pool.
#[derive(Clone)]
pub struct CatalogClient {
    /// Account-scoped base URL, e.g. "https://host/api/externals/{account}"
    base_url: String,
    /// Bearer token attached to every request
    auth_token: String,
    /// HTTP client instance
    client: Client,
}

impl CatalogClient {
    /// Create a new catalog client
    ///
    /// # Arguments
    /// * `endpoint` - Scheme and host of the catalog service (e.g. "https://catalog.example.com")
    /// * `account_id` - Account identifier the client is scoped to
    /// * `auth_token` - Bearer token used to authenticate every request
    ///
    /// # Example
    /// ```
    /// use catsync_client::CatalogClient;
    ///
    /// let client = CatalogClient::new("https://catalog.example.com", "acct-1", "token");
    /// ```
    pub fn new(
        endpoint: impl Into<String>,
        account_id: &str,
        auth_token: impl Into<String>,
    ) -> Self {
        Self::with_client(endpoint, account_id, auth_token, Client::new())
    }

    /// Create a new catalog client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use catsync_client::CatalogClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = CatalogClient::with_client(
    ///     "https://catalog.example.com",
    ///     "acct-1",
    ///     "token",
    ///     http_client,
    /// );
    /// ```
    pub fn with_client(
        endpoint: impl Into<String>,
        account_id: &str,
        auth_token: impl Into<String>,
        client: Client,
    ) -> Self {
        let endpoint = endpoint.into();
        Self {
            base_url: format!(
                "{}/api/externals/{}",
                endpoint.trim_end_matches('/'),
                account_id
            ),
            auth_token: auth_token.into(),
            client,
        }
    }

    /// Get the account-scoped base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Request Builders
    // =============================================================================

    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client.get(url).bearer_auth(&self.auth_token)
    }

    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.client.post(url).bearer_auth(&self.auth_token)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Read the body of a response, requiring a success status
    ///
    /// Non-2xx responses are returned with their status code and raw body
    /// so callers can surface them for diagnostics.
    pub(crate) async fn success_body(
        &self,
        response: reqwest::Response,
    ) -> Result<String, HttpFailure> {
        let status = response.status();
        let body = response.text().await.map_err(HttpFailure::Transport)?;

        if !status.is_success() {
            return Err(HttpFailure::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

/// Decode the job object out of a response envelope
///
/// Returns the raw job payload alongside the typed fields `T` read from
/// it. Callers map the error into their own taxonomy, attaching the body.
pub(crate) fn decode_job<T: DeserializeOwned>(
    body: &str,
) -> Result<(serde_json::Value, T), serde_json::Error> {
    let envelope: JobEnvelope = serde_json::from_str(body)?;
    let fields: T = serde_json::from_value(envelope.job.clone())?;
    Ok((envelope.job, fields))
}

impl std::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("base_url", &self.base_url)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_account_scoped_base_url() {
        let client = CatalogClient::new("https://catalog.example.com", "acct-1", "token");
        assert_eq!(
            client.base_url(),
            "https://catalog.example.com/api/externals/acct-1"
        );
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = CatalogClient::new("https://catalog.example.com/", "acct-1", "token");
        assert_eq!(
            client.base_url(),
            "https://catalog.example.com/api/externals/acct-1"
        );
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client =
            CatalogClient::with_client("https://catalog.example.com", "acct-1", "token", http_client);
        assert_eq!(
            client.base_url(),
            "https://catalog.example.com/api/externals/acct-1"
        );
    }

    #[test]
    fn test_debug_output_redacts_the_token() {
        let client = CatalogClient::new("https://catalog.example.com", "acct-1", "secret-token");
        let output = format!("{:?}", client);
        assert!(!output.contains("secret-token"));
    }
}
