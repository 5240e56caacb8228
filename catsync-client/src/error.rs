//! Error types for the catalog client
//!
//! Each phase of the job lifecycle has its own error type: submission,
//! a single status fetch, and the poll loop as a whole. Every variant
//! carries the status code, raw body, or job payload needed to diagnose
//! a failure without re-running the operation.

use std::time::Duration;

use catsync_core::domain::job::Job;
use thiserror::Error;

/// Errors from submitting a batch for synchronization
///
/// Submission is a single request; no retries happen at this layer.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The request never produced a response
    #[error("failed to send sync-update request: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service rejected the submission
    #[error("sync-update rejected (status {status}): {body}")]
    Api { status: u16, body: String },

    /// The service accepted the request but the body held no usable job
    #[error("sync-update response held no usable job ({detail}): {body}")]
    MalformedResponse { detail: String, body: String },

    /// The service accepted the request but assigned no job id
    #[error("sync-update response carried an empty job id: {body}")]
    MissingJobId { body: String },
}

/// Errors from a single job status query
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response
    #[error("failed to query job status: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered the status query with an error
    #[error("job status query failed (status {status}): {body}")]
    Api { status: u16, body: String },

    /// The status payload could not be interpreted
    #[error("job status payload was malformed ({detail}): {body}")]
    Malformed { detail: String, body: String },
}

impl FetchError {
    /// HTTP status code of the failed query, if the service answered
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Api { status, .. } => Some(*status),
            FetchError::Transport(source) => source.status().map(|s| s.as_u16()),
            FetchError::Malformed { .. } => None,
        }
    }
}

/// Errors from polling a job to completion
#[derive(Debug, Error)]
pub enum PollError {
    /// A status query failed; the server-side job may still be running
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The job reached the terminal `failure` status
    #[error("job {} reported terminal failure", .job.id)]
    JobFailed { job: Job },

    /// The job stayed non-terminal past the overall deadline
    #[error("job did not complete within {timeout:?} (waited {waited:?})")]
    TimedOut { timeout: Duration, waited: Duration },

    /// The caller cancelled the poll loop before a terminal status
    #[error("polling was cancelled before the job completed")]
    Cancelled,
}

impl PollError {
    /// The failed job's full payload, when the server reported failure
    pub fn failed_job(&self) -> Option<&Job> {
        match self {
            PollError::JobFailed { job } => Some(job),
            _ => None,
        }
    }
}

/// Outcome of reading an HTTP response, before endpoint-specific mapping
///
/// Shared between the submission and status-fetch paths, which surface it
/// through their own error types.
#[derive(Debug)]
pub(crate) enum HttpFailure {
    Transport(reqwest::Error),
    Status { status: u16, body: String },
}

impl From<HttpFailure> for SubmissionError {
    fn from(failure: HttpFailure) -> Self {
        match failure {
            HttpFailure::Transport(source) => SubmissionError::Transport(source),
            HttpFailure::Status { status, body } => SubmissionError::Api { status, body },
        }
    }
}

impl From<HttpFailure> for FetchError {
    fn from(failure: HttpFailure) -> Self {
        match failure {
            HttpFailure::Transport(source) => FetchError::Transport(source),
            HttpFailure::Status { status, body } => FetchError::Api { status, body },
        }
    }
}
