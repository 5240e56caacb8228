//! Sync command handler
//!
//! Submits a batch of demo items and waits for the resulting job to reach
//! a terminal status. Ctrl-C cancels the wait without touching the
//! server-side job.

use std::time::Duration;

use anyhow::{Context, Result};
use catsync_client::{CatalogClient, PollError, PollOptions};
use clap::Args;
use colored::*;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::Config;
use crate::sample;

/// Arguments for the sync command
#[derive(Args)]
pub struct SyncArgs {
    /// Item group to synchronize into
    #[arg(long, env = "CATSYNC_ITEM_GROUP_UUID")]
    pub group_id: String,

    /// Number of demo items to generate
    #[arg(long, default_value_t = 20)]
    pub count: usize,

    /// Seconds between two status polls
    #[arg(long, default_value_t = 5)]
    pub poll_interval: u64,

    /// Seconds to wait for the job before giving up
    #[arg(long, default_value_t = 3600)]
    pub timeout: u64,
}

/// Handle the sync command
pub async fn handle_sync_command(args: SyncArgs, config: &Config) -> Result<()> {
    let client = CatalogClient::new(&config.endpoint, &config.account_id, &config.auth_token);
    let items = sample::demo_items(args.count);

    println!(
        "{}",
        format!(
            "Submitting {} item(s) to group {}",
            items.len(),
            args.group_id
        )
        .bold()
    );

    let handle = client
        .sync_update(&args.group_id, items)
        .await
        .context("Failed to submit sync-update batch")?;

    println!(
        "Job {} accepted, waiting for completion...",
        handle.id.cyan()
    );

    let cancellation = CancellationToken::new();
    let trigger = cancellation.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Ctrl-C received, stopping the poll loop");
            trigger.cancel();
        }
    });

    let options = PollOptions::default()
        .with_poll_interval(Duration::from_secs(args.poll_interval))
        .with_overall_timeout(Duration::from_secs(args.timeout))
        .with_cancellation(cancellation);

    match client.await_completion(&handle, options).await {
        Ok(job) => {
            println!("{}", "Job completed successfully.".green().bold());
            println!("{}", serde_json::to_string_pretty(&job.raw)?);
            Ok(())
        }
        Err(PollError::JobFailed { job }) => {
            eprintln!("{}", "Job reported failure.".red().bold());
            eprintln!("{}", serde_json::to_string_pretty(&job.raw)?);
            anyhow::bail!("job {} failed", job.id)
        }
        Err(PollError::TimedOut { timeout, waited }) => {
            anyhow::bail!(
                "job {} still unfinished after {:?} (deadline {:?}); its outcome is unknown",
                handle.id,
                waited,
                timeout
            )
        }
        Err(PollError::Cancelled) => {
            println!(
                "{}",
                "Polling cancelled; the job keeps running server-side.".yellow()
            );
            anyhow::bail!("polling cancelled")
        }
        Err(error) => Err(error).context("Failed to poll job status"),
    }
}
