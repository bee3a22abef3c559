//! Digit Recall - terminal memory game
//!
//! Shows a random number for a few seconds, then asks for it back.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use digit_recall::{Cli, RecallConfig, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = RecallConfig::load(&cli.config)?.with_cli(&cli);

    initialize_tracing(&config)?;
    info!(config_path = %cli.config.display(), "Starting Digit Recall");

    run_tui(config).await
}

/// Sends tracing output to the log file so it doesn't corrupt the TUI.
fn initialize_tracing(config: &RecallConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
