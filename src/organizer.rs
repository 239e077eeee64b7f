//! The organize run: scan, classify, move (or preview), then write the log.
//!
//! Only the immediate entries of the target are considered. Directories are
//! skipped without being logged, so category folders from an earlier run are
//! left alone. The first error ends the run; files moved before it stay
//! moved and no log is written.

use crate::error::{OrganizeError, OrganizeResult};
use crate::file_category::{Category, Classifier};
use crate::file_organizer::FileOrganizer;
use crate::output::OutputFormatter;
use crate::run_log::{MoveAction, RunLog};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Whether a run touches the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Compute and log the plan without moving anything.
    Preview,
    /// Move files for real.
    Execute,
}

impl RunMode {
    fn action(self) -> MoveAction {
        match self {
            RunMode::Preview => MoveAction::Dry,
            RunMode::Execute => MoveAction::Moved,
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct OrganizeReport {
    /// Where the run log was written.
    pub log_path: PathBuf,
    /// The log as written.
    pub log: RunLog,
    /// Files handled per category, in table order.
    pub category_counts: BTreeMap<Category, usize>,
}

/// Sorts the top-level files of a directory into category subfolders.
#[derive(Debug, Clone, Default)]
pub struct Organizer {
    classifier: Classifier,
}

impl Organizer {
    /// Creates an organizer that classifies with `classifier`.
    pub fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }

    /// Processes every file directly inside `target`.
    ///
    /// In [`RunMode::Preview`] nothing on disk changes except the log file,
    /// and each record holds the plain `<target>/<Category>/<name>` path;
    /// name clashes are not simulated. In [`RunMode::Execute`] each record
    /// holds the path the file actually landed at.
    ///
    /// Entries are processed sorted by file name.
    ///
    /// # Errors
    ///
    /// * [`OrganizeError::InvalidTarget`] if `target` is missing or not a
    ///   directory. Nothing is touched.
    /// * [`OrganizeError::MoveFailure`] for the first file that cannot be
    ///   moved. Earlier files stay moved and no log is written.
    /// * [`OrganizeError::LogWrite`] if the log cannot be written.
    pub fn organize(&self, target: &Path, mode: RunMode) -> OrganizeResult<OrganizeReport> {
        let root = resolve_target(target)?;
        info!(dir = %root.display(), ?mode, "organizing");

        let mut log = RunLog::new(root.clone());
        let mut category_counts = BTreeMap::new();

        for file_path in list_files(&root)? {
            let Some(file_name) = file_path.file_name() else {
                continue;
            };
            let display_name = file_name.to_string_lossy();
            let extension = file_path
                .extension()
                .map(|ext| ext.to_string_lossy())
                .unwrap_or_default();
            let category = self.classifier.classify(&extension);
            let dest_dir = root.join(category.dir_name());
            debug!(file = %display_name, %category, "classified");

            let destination = match mode {
                RunMode::Preview => {
                    OutputFormatter::planned(&display_name, category);
                    dest_dir.join(file_name)
                }
                RunMode::Execute => {
                    let destination = FileOrganizer::safe_move(&file_path, &dest_dir)?;
                    let final_name = destination
                        .file_name()
                        .map(|name| name.to_string_lossy())
                        .unwrap_or_default();
                    OutputFormatter::moved(&display_name, category, &final_name);
                    destination
                }
            };

            log.record(file_path.clone(), destination, mode.action());
            *category_counts.entry(category).or_insert(0) += 1;
        }

        let log_path = log.save(&root)?;
        OutputFormatter::log_written(&log_path);
        info!(moves = log.moves.len(), log = %log_path.display(), "run complete");

        Ok(OrganizeReport {
            log_path,
            log,
            category_counts,
        })
    }
}

/// Organizes `target` with the fixed category table.
///
/// # Examples
///
/// ```no_run
/// use deskorganizer::organizer::{organize, RunMode};
/// use std::path::Path;
///
/// let report = organize(Path::new("/home/me/Downloads"), RunMode::Preview)?;
/// println!("{} files planned", report.log.moves.len());
/// # Ok::<(), deskorganizer::OrganizeError>(())
/// ```
pub fn organize(target: &Path, mode: RunMode) -> OrganizeResult<OrganizeReport> {
    Organizer::default().organize(target, mode)
}

fn resolve_target(target: &Path) -> OrganizeResult<PathBuf> {
    let resolved = fs::canonicalize(target)
        .map_err(|e| OrganizeError::invalid_target(target, e.to_string()))?;
    if !resolved.is_dir() {
        return Err(OrganizeError::invalid_target(resolved, "not a directory"));
    }
    Ok(resolved)
}

/// Lists the non-directory entries of `dir`, sorted by file name.
fn list_files(dir: &Path) -> OrganizeResult<Vec<PathBuf>> {
    let read_error = |e: std::io::Error| OrganizeError::ReadDir {
        path: dir.to_path_buf(),
        source: e,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        // Follows symlinks, so a link to a directory is skipped too.
        if path.is_dir() {
            debug!(dir = %path.display(), "skipping directory");
            continue;
        }
        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
