//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod job;
mod sync;

pub use job::JobCommands;
pub use sync::SyncArgs;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Submit a demo batch and wait for the sync job to finish
    Sync(SyncArgs),
    /// Job inspection
    Job {
        #[command(subcommand)]
        command: JobCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Sync(args) => sync::handle_sync_command(args, config).await,
        Commands::Job { command } => job::handle_job_command(command, config).await,
    }
}
