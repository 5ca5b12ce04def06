//! Tic-tac-toe - terminal entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tictactoe::{DEFAULT_CONFIG_PATH, Settings};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = load_settings(&cli)?;
    initialize_tracing(&settings)?;

    info!(?settings, "Starting tictactoe");
    tictactoe::run_tui(&settings)?;

    Ok(())
}

/// Reads the config file and applies command-line overrides.
fn load_settings(cli: &Cli) -> Result<Settings> {
    let settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::load_or_default(DEFAULT_CONFIG_PATH)?,
    };

    Ok(settings.with_cli_overrides(cli.log_file.clone(), cli.no_hints))
}

/// Logs go to a file so they never draw over the board.
#[instrument(skip_all)]
fn initialize_tracing(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!(
            "Failed to create log file {}",
            settings.log_file().display()
        )
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
