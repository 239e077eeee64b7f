//! deskorganizer - sort the files of a folder into category subfolders
//!
//! This library classifies files by extension, moves them into matching
//! subfolders without overwriting anything, and records every run in a JSON
//! log inside the organized folder. A preview mode computes the same plan
//! without moving files.

pub mod cli;
pub mod error;
pub mod file_category;
pub mod file_organizer;
pub mod organizer;
pub mod output;
pub mod run_log;

pub use error::{OrganizeError, OrganizeResult};
pub use file_category::{Category, Classifier};
pub use file_organizer::FileOrganizer;
pub use organizer::{OrganizeReport, Organizer, RunMode, organize};
pub use run_log::{LOG_FILE_NAME, MoveAction, MoveRecord, RunLog};

pub use cli::{Args, run_cli};
