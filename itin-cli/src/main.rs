mod cli;
mod commands;
mod render;

use anyhow::Result;
use cli::Cli;
use commands::ItinCli;
use itin_core::{Config, Itin};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("itin: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr, filtered by `ITIN_LOG` (e.g. `ITIN_LOG=debug`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("ITIN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::new();
    let mut config = Config::load()?;
    if let Some(file) = cli.file {
        tracing::debug!("using itinerary file {}", file.display());
        config.data_file = file;
    }
    let mut itin_cli = ItinCli::new(cli.color, Itin::with_config(config));
    itin_cli.run(cli.command)
}
