mod app;
mod cli;
mod config;
mod error;
mod inspector;
mod models;
mod report;

use std::io;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;
use crate::config::InspectorConfig;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("db_inspect=warn")),
        )
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    let config = InspectorConfig::from_cli(Cli::parse());
    tracing::info!(path = %config.path.display(), "Starting db-inspect");

    let result = app::run(&config, io::stdout().lock());
    if let Err(err) = result {
        tracing::debug!(error = ?err, "inspection failed");
        let code = app::report_failure(&err, &mut io::stdout().lock())?;
        std::process::exit(code);
    }

    Ok(())
}
