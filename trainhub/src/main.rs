//! Command-line sign-in for the training management system

/// The subcommands and what they do
mod command;

/// Configuration and argument parsing
mod config;

/// Session persistence
mod store;

use clap::Parser;
use std::{io, process::ExitCode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    let config = config::Config::parse();

    // stdout is for results, so logs go to stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let http = reqwest::Client::new();

    match config.command.run(&config, &http).await {
        Ok(code) => code,
        Err(problem) => {
            tracing::error!(?problem, "problem running command");
            eprintln!("{problem}");
            ExitCode::FAILURE
        }
    }
}
