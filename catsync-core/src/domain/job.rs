//! Job domain types

use serde::{Deserialize, Serialize};

/// Immutable client-side reference to a server-side job
///
/// Obtained from a successful batch submission and used to query status.
/// The id is an opaque string assigned by the service; it is never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobHandle {
    pub id: String,
}

impl JobHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Point-in-time snapshot of a server-side job
///
/// `raw` holds the complete job payload as returned by the service so that
/// failures can be diagnosed without re-querying.
#[derive(Debug, Clone, Serialize)]
pub struct Job {
    pub id: String,
    pub status: JobStatus,
    pub raw: serde_json::Value,
}

/// Job processing status as reported by the service
///
/// The service may introduce new non-terminal values at any time, so every
/// value other than `success` and `failure` is preserved verbatim in
/// `Other` and treated as non-terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Success,
    Failure,
    #[serde(untagged)]
    Other(String),
}

impl JobStatus {
    /// Whether no further status transition will occur
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Success | JobStatus::Failure)
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Success => write!(f, "success"),
            JobStatus::Failure => write!(f, "failure"),
            JobStatus::Other(value) => write!(f, "{}", value),
        }
    }
}
