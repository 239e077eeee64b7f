//! The JSON audit log written at the end of every run.
//!
//! One log per target directory, stored as `deskorganizer_log.json` and
//! overwritten by each run.

use crate::error::{OrganizeError, OrganizeResult};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the run log inside the target directory.
pub const LOG_FILE_NAME: &str = "deskorganizer_log.json";

/// What happened to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveAction {
    /// The file was actually moved.
    Moved,
    /// Preview only; nothing on disk changed.
    Dry,
}

/// A single planned or performed move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    #[serde(with = "lossy_path")]
    pub from: PathBuf,
    #[serde(with = "lossy_path")]
    pub to: PathBuf,
    pub action: MoveAction,
}

/// The record of one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunLog {
    /// UTC start time, ISO 8601 with a trailing `Z`.
    pub timestamp: String,
    /// The resolved target directory.
    #[serde(with = "lossy_path")]
    pub source: PathBuf,
    /// Moves in processing order.
    pub moves: Vec<MoveRecord>,
}

impl RunLog {
    /// Starts a new log for `source`, stamped with the current UTC time.
    pub fn new(source: PathBuf) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            source,
            moves: Vec::new(),
        }
    }

    /// Appends a record.
    pub fn record(&mut self, from: PathBuf, to: PathBuf, action: MoveAction) {
        self.moves.push(MoveRecord { from, to, action });
    }

    /// Returns the log file path for a target directory.
    pub fn file_path(dir: &Path) -> PathBuf {
        dir.join(LOG_FILE_NAME)
    }

    /// Writes this log as pretty JSON into `dir`, replacing any previous log.
    pub fn save(&self, dir: &Path) -> OrganizeResult<PathBuf> {
        let log_path = Self::file_path(dir);
        let json = serde_json::to_string_pretty(self)?;

        fs::write(&log_path, json).map_err(|e| OrganizeError::LogWrite {
            path: log_path.clone(),
            source: e,
        })?;

        Ok(log_path)
    }

    /// Loads the log stored in `dir`, if there is one.
    pub fn load(dir: &Path) -> OrganizeResult<Option<Self>> {
        let log_path = Self::file_path(dir);
        if !log_path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&log_path).map_err(|e| OrganizeError::LogRead {
            path: log_path.clone(),
            source: e,
        })?;

        Ok(Some(serde_json::from_str(&json)?))
    }
}

// Non-UTF-8 names are written lossily instead of failing the whole log.
mod lossy_path {
    use super::*;

    pub fn serialize<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&path.to_string_lossy())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PathBuf, D::Error> {
        PathBuf::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use tempfile::TempDir;

    #[test]
    fn test_timestamp_is_utc_with_trailing_z() {
        let log = RunLog::new(PathBuf::from("/tmp"));
        assert!(log.timestamp.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&log.timestamp).is_ok());
    }

    #[test]
    fn test_json_shape() {
        let mut log = RunLog::new(PathBuf::from("/data"));
        log.record(
            PathBuf::from("/data/a.txt"),
            PathBuf::from("/data/Documents/a.txt"),
            MoveAction::Dry,
        );

        let value = serde_json::to_value(&log).unwrap();
        assert_eq!(value["source"], "/data");
        assert_eq!(value["moves"][0]["from"], "/data/a.txt");
        assert_eq!(value["moves"][0]["to"], "/data/Documents/a.txt");
        assert_eq!(value["moves"][0]["action"], "dry");

        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn test_save_overwrites_and_loads() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let dir = temp_dir.path();

        let mut first = RunLog::new(dir.to_path_buf());
        first.record(dir.join("x.png"), dir.join("Images/x.png"), MoveAction::Moved);
        first.save(dir).expect("Failed to save log");

        let second = RunLog::new(dir.to_path_buf());
        let path = second.save(dir).expect("Failed to save log");
        assert_eq!(path, dir.join(LOG_FILE_NAME));

        let loaded = RunLog::load(dir).unwrap().expect("log should exist");
        assert_eq!(loaded, second);
        assert!(loaded.moves.is_empty());
    }

    #[test]
    fn test_load_missing_log() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        assert!(RunLog::load(temp_dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_rejects_garbage() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp_dir.path().join(LOG_FILE_NAME), "{ not json").unwrap();
        assert!(matches!(
            RunLog::load(temp_dir.path()),
            Err(OrganizeError::LogFormat(_))
        ));
    }
}
