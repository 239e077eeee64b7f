//! Command-line interface for deskorganizer.
//!
//! Parses `--path`, `--dry` and `--run`, picks the run mode and hands off
//! to the organizer.

use crate::error::OrganizeResult;
use crate::organizer::{OrganizeReport, RunMode, organize};
use crate::output::OutputFormatter;
use clap::Parser;
use std::path::PathBuf;

/// Organize a folder by file types.
#[derive(Parser, Debug, Clone)]
#[command(name = "deskorganizer", version)]
#[command(about = "Organize a folder by file types.", long_about = None)]
pub struct Args {
    /// Target folder path
    #[arg(long)]
    pub path: PathBuf,

    /// Dry run (no files moved)
    #[arg(long)]
    pub dry: bool,

    /// Actually move files
    #[arg(long)]
    pub run: bool,
}

impl Args {
    /// Returns the requested mode; `--run` wins over `--dry`.
    pub fn mode(&self) -> Option<RunMode> {
        match (self.dry, self.run) {
            (_, true) => Some(RunMode::Execute),
            (true, false) => Some(RunMode::Preview),
            (false, false) => None,
        }
    }
}

/// Runs the CLI with already-parsed arguments.
///
/// Without `--dry` or `--run` this prints a usage hint, touches nothing and
/// returns `Ok(None)`.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use deskorganizer::cli::{Args, run_cli};
///
/// let args = Args::parse_from(["deskorganizer", "--path", "/home/me/Downloads", "--dry"]);
/// if let Err(e) = run_cli(&args) {
///     eprintln!("Error: {}", e);
/// }
/// ```
pub fn run_cli(args: &Args) -> OrganizeResult<Option<OrganizeReport>> {
    let Some(mode) = args.mode() else {
        OutputFormatter::usage_hint();
        return Ok(None);
    };

    let report = organize(&args.path, mode)?;
    OutputFormatter::summary_table(&report.category_counts, mode == RunMode::Preview);
    Ok(Some(report))
}
