use std::path::{Path, PathBuf};

use crate::cli::{Cli, OutputFormat};

pub const DEFAULT_SAMPLE_LIMIT: u32 = 5;

#[derive(Debug, Clone)]
pub struct InspectorConfig {
    pub path: PathBuf,
    pub sample_limit: u32,
    pub format: OutputFormat,
}

impl InspectorConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sample_limit: DEFAULT_SAMPLE_LIMIT,
            format: OutputFormat::Text,
        }
    }

    pub fn from_cli(cli: Cli) -> Self {
        Self {
            sample_limit: cli.limit,
            format: cli.format,
            ..Self::new(expand_home(&cli.path))
        }
    }
}

/// Replace a leading `~` with the current user's home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match home::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
