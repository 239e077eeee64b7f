//! User-facing progress output.
//!
//! Every line the organizer prints goes through [`OutputFormatter`], so the
//! wording and colors live in one place. Diagnostics go through `tracing`
//! instead.

use crate::file_category::Category;
use colored::*;
use std::collections::BTreeMap;
use std::path::Path;

/// Prints progress lines and the end-of-run summary.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints the preview line for one file.
    ///
    /// ```no_run
    /// use deskorganizer::file_category::Category;
    /// use deskorganizer::output::OutputFormatter;
    ///
    /// OutputFormatter::planned("photo.jpg", Category::Images);
    /// // [DRY] photo.jpg -> Images/
    /// ```
    pub fn planned(file_name: &str, category: Category) {
        println!("{} {} -> {}/", "[DRY]".yellow(), file_name, category);
    }

    /// Prints the line for a file that was moved, with its final name.
    pub fn moved(file_name: &str, category: Category, final_name: &str) {
        println!(
            "{} {} -> {}/{}",
            "MOVED:".green(),
            file_name,
            category,
            final_name
        );
    }

    /// Prints where the run log was written.
    pub fn log_written(log_path: &Path) {
        println!("Log written to {}", log_path.display().to_string().cyan());
    }

    /// Prints the usage hint shown when neither mode flag is given.
    pub fn usage_hint() {
        println!(
            "{}",
            "You must pass --dry or --run. Use --dry to preview, --run to move files.".yellow()
        );
    }

    /// Prints an error message in red with an X mark.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints a table of file counts per category, in table order.
    pub fn summary_table(category_counts: &BTreeMap<Category, usize>, dry_run: bool) {
        if category_counts.is_empty() {
            println!("{}", "No files to organize.".cyan());
            return;
        }

        let width = category_counts
            .keys()
            .map(|c| c.dir_name().len())
            .max()
            .unwrap_or(0)
            .max(8);

        println!("\n{}", if dry_run { "PREVIEW" } else { "SUMMARY" }.bold());
        println!("{:<width$} | {}", "Category".bold(), "Files".bold());
        println!("{}", "-".repeat(width + 10));

        let mut total = 0;
        for (category, count) in category_counts {
            total += count;
            println!(
                "{:<width$} | {} {}",
                category.dir_name(),
                count.to_string().green(),
                plural(*count)
            );
        }

        println!("{}", "-".repeat(width + 10));
        println!(
            "{:<width$} | {} {}",
            "Total".bold(),
            total.to_string().green().bold(),
            plural(total)
        );
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "file" } else { "files" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(0), "files");
        assert_eq!(plural(1), "file");
        assert_eq!(plural(7), "files");
    }
}
