//! Job command handlers
//!
//! Handles job inspection commands: one-shot status fetches and polling
//! an existing job to completion.

use std::time::Duration;

use anyhow::{Context, Result};
use catsync_client::{CatalogClient, PollOptions};
use catsync_core::domain::job::{Job, JobHandle, JobStatus};
use clap::Subcommand;
use colored::*;

use crate::config::Config;

/// Job subcommands
#[derive(Subcommand)]
pub enum JobCommands {
    /// Get the current status of a job
    Get {
        /// Job id
        id: String,
    },
    /// Poll a job until it reaches a terminal status
    Watch {
        /// Job id
        id: String,

        /// Seconds between two status polls
        #[arg(long, default_value_t = 5)]
        poll_interval: u64,

        /// Seconds to wait for the job before giving up
        #[arg(long, default_value_t = 3600)]
        timeout: u64,
    },
}

/// Handle job commands
pub async fn handle_job_command(command: JobCommands, config: &Config) -> Result<()> {
    let client = CatalogClient::new(&config.endpoint, &config.account_id, &config.auth_token);

    match command {
        JobCommands::Get { id } => get_job(&client, &id).await,
        JobCommands::Watch {
            id,
            poll_interval,
            timeout,
        } => watch_job(&client, &id, poll_interval, timeout).await,
    }
}

/// Fetch and display a single status snapshot
async fn get_job(client: &CatalogClient, id: &str) -> Result<()> {
    let job = client
        .job_status(id)
        .await
        .context("Failed to fetch job status")?;

    print_job(&job);
    Ok(())
}

/// Poll an existing job until it finishes
async fn watch_job(client: &CatalogClient, id: &str, poll_interval: u64, timeout: u64) -> Result<()> {
    let options = PollOptions::default()
        .with_poll_interval(Duration::from_secs(poll_interval))
        .with_overall_timeout(Duration::from_secs(timeout));

    let job = client
        .await_completion(&JobHandle::new(id), options)
        .await
        .context("Job did not complete successfully")?;

    print_job(&job);
    Ok(())
}

/// Print a job snapshot with a colored status line
fn print_job(job: &Job) {
    let status = match &job.status {
        JobStatus::Success => job.status.to_string().green(),
        JobStatus::Failure => job.status.to_string().red(),
        JobStatus::Other(_) => job.status.to_string().yellow(),
    };

    println!("{} {}", "Job:".bold(), job.id);
    println!("{} {}", "Status:".bold(), status);
    match serde_json::to_string_pretty(&job.raw) {
        Ok(payload) => println!("{}", payload),
        Err(_) => println!("{:?}", job.raw),
    }
}
