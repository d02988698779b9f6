mod advice;
mod cli;
mod commands;
mod comparison;
mod config;
mod errors;
mod extraction;
mod input;
mod llm_client;
mod models;
mod output;
mod scoring;
mod screening;

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;
use crate::config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load configuration first (.env, then process environment)
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error [CONFIG_ERROR]: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    // Initialize structured logging on stderr so stdout stays clean for --json.
    // A valid RUST_LOG wins; --verbose only changes the fallback filter.
    let level = if cli.verbose { "debug" } else { config.rust_log.as_str() };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("Starting cv-screener v{}", env!("CARGO_PKG_VERSION"));

    match commands::run(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error [{}]: {e}", e.code());
            ExitCode::from(e.exit_code())
        }
    }
}
