//! Moving files into category directories.
//!
//! Creates the destination directory on demand and never overwrites an
//! existing entry: on a name clash the file is renamed `name (1).ext`,
//! `name (2).ext`, and so on until a free name is found.

use crate::error::{OrganizeError, OrganizeResult};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Moves files into destination directories without clobbering.
pub struct FileOrganizer;

impl FileOrganizer {
    /// Moves `file_path` into `dest_dir` and returns the path it ended up at.
    ///
    /// `dest_dir` and any missing parents are created first; an existing
    /// directory is fine. If `dest_dir` already holds an entry with the same
    /// name, the first free numbered name is used instead.
    ///
    /// # Errors
    ///
    /// Returns [`OrganizeError::MoveFailure`] if the directory cannot be
    /// created or the file cannot be moved. Nothing is retried.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use deskorganizer::file_organizer::FileOrganizer;
    /// use std::path::Path;
    ///
    /// let moved = FileOrganizer::safe_move(
    ///     Path::new("/home/me/Downloads/report.pdf"),
    ///     Path::new("/home/me/Downloads/Documents"),
    /// );
    /// match moved {
    ///     Ok(dest) => println!("Moved to {}", dest.display()),
    ///     Err(e) => eprintln!("{}", e),
    /// }
    /// ```
    pub fn safe_move(file_path: &Path, dest_dir: &Path) -> OrganizeResult<PathBuf> {
        fs::create_dir_all(dest_dir).map_err(|e| OrganizeError::MoveFailure {
            from: file_path.to_path_buf(),
            to: dest_dir.to_path_buf(),
            source: e,
        })?;

        let file_name = file_path
            .file_name()
            .ok_or_else(|| OrganizeError::MoveFailure {
                from: file_path.to_path_buf(),
                to: dest_dir.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "file has no name component"),
            })?;

        let destination = Self::available_destination(dest_dir, file_name);

        move_file(file_path, &destination).map_err(|e| OrganizeError::MoveFailure {
            from: file_path.to_path_buf(),
            to: destination.clone(),
            source: e,
        })?;

        debug!(from = %file_path.display(), to = %destination.display(), "moved file");
        Ok(destination)
    }

    /// Returns the first path in `dest_dir` for `file_name` that is not taken.
    ///
    /// Tries the name as-is, then `stem (1).ext`, `stem (2).ext`, ...
    pub fn available_destination(dest_dir: &Path, file_name: &OsStr) -> PathBuf {
        let plain = dest_dir.join(file_name);
        if !is_taken(&plain) {
            return plain;
        }

        let mut counter: u64 = 1;
        loop {
            let candidate = dest_dir.join(numbered_name(file_name, counter));
            if !is_taken(&candidate) {
                return candidate;
            }
            counter += 1;
        }
    }
}

/// Builds `stem (n).ext`, or `name (n)` when the name has no extension.
pub fn numbered_name(file_name: &OsStr, counter: u64) -> OsString {
    let path = Path::new(file_name);
    match (path.file_stem(), path.extension()) {
        (Some(stem), Some(ext)) if !ext.is_empty() => {
            let mut name = stem.to_os_string();
            name.push(format!(" ({counter})."));
            name.push(ext);
            name
        }
        _ => {
            let mut name = file_name.to_os_string();
            name.push(format!(" ({counter})"));
            name
        }
    }
}

// A dangling symlink still occupies the name.
fn is_taken(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            warn!(error = %e, from = %from.display(), "rename across devices, falling back to copy+remove");
            copy_then_remove(from, to)
        }
        Err(e) => Err(e),
    }
}

/// Recreates `from` at `to`, then removes `from`.
///
/// Symlinks are recreated as links rather than copied through. A failed
/// copy removes whatever part of `to` it wrote; `to` was free beforehand.
fn copy_then_remove(from: &Path, to: &Path) -> io::Result<()> {
    let metadata = fs::symlink_metadata(from)?;
    if metadata.file_type().is_symlink() {
        copy_symlink(from, to)?;
    } else if let Err(e) = fs::copy(from, to) {
        if fs::symlink_metadata(to).is_ok() {
            let _ = fs::remove_file(to);
        }
        return Err(e);
    }
    fs::remove_file(from)
}

#[cfg(unix)]
fn copy_symlink(from: &Path, to: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(fs::read_link(from)?, to)
}

#[cfg(windows)]
fn copy_symlink(from: &Path, to: &Path) -> io::Result<()> {
    let link_target = fs::read_link(from)?;
    if fs::metadata(from).map(|m| m.is_dir()).unwrap_or(false) {
        std::os::windows::fs::symlink_dir(link_target, to)
    } else {
        std::os::windows::fs::symlink_file(link_target, to)
    }
}

#[cfg(not(any(unix, windows)))]
fn copy_symlink(from: &Path, to: &Path) -> io::Result<()> {
    fs::copy(from, to).map(|_| ())
}
