//! Job poll loop
//!
//! Polls a job's status until it reaches a terminal state, the overall
//! deadline passes, or the caller cancels. The loop is generic over
//! [`JobStatusSource`] so it can be driven by the HTTP client or by any
//! other status backend.

use std::time::Duration;

use async_trait::async_trait;
use catsync_core::domain::job::{Job, JobHandle, JobStatus};
use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::error::{FetchError, PollError};

/// Default wait between two status queries
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Default overall deadline for a job to reach a terminal status
///
/// Backend batch processing can be slow, so the default is generous while
/// still bounding the total wait.
pub const DEFAULT_OVERALL_TIMEOUT: Duration = Duration::from_secs(60 * 60);

/// Anything that can report the current status of a job
///
/// Implemented by [`CatalogClient`](crate::CatalogClient); tests substitute
/// scripted sources.
#[async_trait]
pub trait JobStatusSource: Send + Sync {
    /// Fetch the current snapshot of the job
    async fn job_status(&self, job_id: &str) -> Result<Job, FetchError>;
}

/// Configuration for one poll loop
///
/// Passed per call rather than held in process-global state, so
/// independent callers can poll distinct jobs with distinct settings.
#[derive(Debug, Clone)]
pub struct PollOptions {
    /// Wait between two non-terminal status queries
    pub poll_interval: Duration,
    /// Deadline for the job to reach a terminal status
    pub overall_timeout: Duration,
    /// Token that ends the loop early when triggered
    pub cancellation: CancellationToken,
}

impl PollOptions {
    /// Sets the wait between status queries
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Sets the overall deadline
    pub fn with_overall_timeout(mut self, overall_timeout: Duration) -> Self {
        self.overall_timeout = overall_timeout;
        self
    }

    /// Sets the cancellation token observed during every wait
    pub fn with_cancellation(mut self, cancellation: CancellationToken) -> Self {
        self.cancellation = cancellation;
        self
    }
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            overall_timeout: DEFAULT_OVERALL_TIMEOUT,
            cancellation: CancellationToken::new(),
        }
    }
}

/// Polls a job until it reaches a terminal status
///
/// Each iteration fetches the status, evaluates terminality, then checks
/// the deadline before waiting out the poll interval. Terminal evaluation
/// runs before the deadline check, so a job that completed just under the
/// wire is reported as completed rather than timed out. A fetch error ends
/// the loop immediately; the server-side job may still be running in that
/// case, and the caller decides whether to resume polling.
///
/// The wait is a task suspension, not a blocking sleep, and races against
/// `options.cancellation`, so cancellation takes effect within one poll
/// interval.
pub async fn await_completion<S>(
    source: &S,
    handle: &JobHandle,
    options: PollOptions,
) -> Result<Job, PollError>
where
    S: JobStatusSource + ?Sized,
{
    let started = Instant::now();

    loop {
        let job = source.job_status(&handle.id).await?;
        debug!(job_id = %handle.id, status = %job.status, "observed job status");

        match job.status {
            JobStatus::Success => {
                info!(job_id = %handle.id, "job completed successfully");
                return Ok(job);
            }
            JobStatus::Failure => {
                info!(job_id = %handle.id, "job reported terminal failure");
                return Err(PollError::JobFailed { job });
            }
            JobStatus::Other(_) => {}
        }

        let waited = started.elapsed();
        if waited > options.overall_timeout {
            return Err(PollError::TimedOut {
                timeout: options.overall_timeout,
                waited,
            });
        }

        tokio::select! {
            _ = options.cancellation.cancelled() => {
                info!(job_id = %handle.id, "polling cancelled by caller");
                return Err(PollError::Cancelled);
            }
            _ = time::sleep(options.poll_interval) => {}
        }
    }
}
