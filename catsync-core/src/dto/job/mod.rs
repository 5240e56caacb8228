//! Job DTOs for the service's response envelopes

use serde::Deserialize;

use crate::domain::job::JobStatus;

/// Envelope wrapping the job object in every job-bearing response
///
/// The job is kept as a raw value so the full payload survives into
/// diagnostics; typed fields are extracted from it separately.
#[derive(Debug, Clone, Deserialize)]
pub struct JobEnvelope {
    pub job: serde_json::Value,
}

/// Fields the submission path reads from an accepted job
#[derive(Debug, Clone, Deserialize)]
pub struct SubmittedJob {
    #[serde(default)]
    pub id: String,
}

/// Fields the polling path reads from a status payload
#[derive(Debug, Clone, Deserialize)]
pub struct JobFields {
    pub id: String,
    pub status: JobStatus,
}
