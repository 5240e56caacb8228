//! Catsync CLI
//!
//! Command-line interface for the catalog batch-sync service.
//!
//! Submits item batches to an account's item groups and tracks the
//! asynchronous jobs the service creates for them.

mod commands;
mod config;
mod sample;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "catsync")]
#[command(about = "Catalog batch-sync CLI", long_about = None)]
struct Cli {
    /// Catalog service endpoint
    #[arg(long, env = "CATSYNC_ENDPOINT")]
    endpoint: String,

    /// Account identifier requests are scoped to
    #[arg(long, env = "CATSYNC_ACCOUNT_UUID")]
    account_id: String,

    /// Bearer token for the catalog API
    #[arg(long, env = "CATSYNC_AUTH_TOKEN", hide_env_values = true)]
    auth_token: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catsync_cli=info,catsync_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config {
        endpoint: cli.endpoint,
        account_id: cli.account_id,
        auth_token: cli.auth_token,
    };
    config.validate()?;

    handle_command(cli.command, &config).await
}
