//! Error types for deskorganizer.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// Errors that can occur while organizing a directory.
///
/// Every variant is terminal for the run: the first error stops processing
/// and files that were already moved stay where they are.
#[derive(Error, Debug)]
pub enum OrganizeError {
    /// The target path does not exist, cannot be resolved, or is not a directory.
    #[error("Invalid target {}: {reason}", path.display())]
    InvalidTarget { path: PathBuf, reason: String },

    /// Creating the category directory or moving the file into it failed.
    #[error("Failed to move {} to {}: {source}", from.display(), to.display())]
    MoveFailure {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The target directory could not be listed.
    #[error("Failed to read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The run log could not be written.
    #[error("Failed to write log file {}: {source}", path.display())]
    LogWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The run log could not be read back.
    #[error("Failed to read log file {}: {source}", path.display())]
    LogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The run log could not be encoded or decoded as JSON.
    #[error("Invalid log JSON: {0}")]
    LogFormat(#[from] serde_json::Error),
}

impl OrganizeError {
    pub(crate) fn invalid_target(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidTarget {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
