use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::DEFAULT_SAMPLE_LIMIT;

#[derive(Parser, Debug)]
#[command(name = "db-inspect", version, about, long_about = None)]
pub struct Cli {
    /// Path to the SQLite database file
    #[arg(env = "DB_INSPECT_PATH")]
    pub path: PathBuf,

    /// Maximum number of sample rows printed per table
    #[arg(short = 'n', long, env = "DB_INSPECT_LIMIT", default_value_t = DEFAULT_SAMPLE_LIMIT)]
    pub limit: u32,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
