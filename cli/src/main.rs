//! castlink
//!
//! Command-line adapter over castlink-core. Codec work runs on the blocking
//! pool; logs go to stderr so stdout carries only links and recordings.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod commands;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.log_level.as_deref());

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = cli.api_config();

    match cli.command {
        Commands::Share { file, token_only, stats_json, no_validate } => {
            config.validate_cast = !no_validate;
            commands::share(file, config, token_only, stats_json).await
        }
        Commands::Play { link, output } => commands::play(link, config, output).await,
    }
}
