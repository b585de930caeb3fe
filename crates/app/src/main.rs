//! NearbySpace - find and list rentable spaces nearby
//!
//! Command-line front end over the listing store and discovery engine.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod config;
mod error;
mod state;

use cli::Cli;
use config::Config;
use error::Result;
use state::AppState;

fn main() -> ExitCode {
    // Logs go to stderr so command output stays clean
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to create tokio runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => state::config_path()?,
    };
    let config = Config::load(&config_path)?;

    let state = AppState::new(config)?;
    tracing::info!(data_dir = %state.data_dir().display(), "Starting NearbySpace");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&state, cli.command, &mut out).await
}
