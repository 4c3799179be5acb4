use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InspectError {
    #[error("File not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("{0}")]
    Database(#[from] rusqlite::Error),

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

impl InspectError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            InspectError::MissingFile(_) => 1,
            InspectError::Database(_) | InspectError::Output(_) | InspectError::Json(_) => 2,
        }
    }
}
