//! CLI configuration
//!
//! Connection settings shared by every command. Built per invocation from
//! flags or environment variables; nothing lives in process-global state.

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Catalog service endpoint (e.g. "https://catalog.example.com")
    pub endpoint: String,

    /// Account identifier requests are scoped to
    pub account_id: String,

    /// Bearer token for the catalog API
    pub auth_token: String,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            anyhow::bail!("endpoint must start with http:// or https://");
        }

        if self.account_id.is_empty() {
            anyhow::bail!("account id cannot be empty");
        }

        if self.auth_token.is_empty() {
            anyhow::bail!("auth token cannot be empty");
        }

        Ok(())
    }
}
