//! File categorization by extension.
//!
//! This module maps a file extension to the category subfolder it belongs in.
//! The table is fixed at build time and is looked up case-insensitively.
//!
//! # Examples
//!
//! ```
//! use deskorganizer::file_category::{Category, Classifier};
//!
//! let classifier = Classifier::default();
//! assert_eq!(classifier.classify("JPG"), Category::Images);
//! assert_eq!(classifier.classify(".pdf"), Category::Documents);
//! assert_eq!(classifier.classify(""), Category::Others);
//! ```

use std::collections::HashMap;
use std::fmt;

/// A category subfolder.
///
/// Variants are declared in table order; `Others` is the fallback and
/// owns no extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Images,
    Documents,
    Videos,
    Audio,
    Archives,
    Code,
    Installers,
    /// Anything unmatched, including files without an extension.
    Others,
}

impl Category {
    /// Every category in table order, fallback last.
    pub const ALL: [Category; 8] = [
        Category::Images,
        Category::Documents,
        Category::Videos,
        Category::Audio,
        Category::Archives,
        Category::Code,
        Category::Installers,
        Category::Others,
    ];

    /// Returns the subfolder name for this category.
    ///
    /// # Examples
    ///
    /// ```
    /// use deskorganizer::file_category::Category;
    ///
    /// assert_eq!(Category::Images.dir_name(), "Images");
    /// assert_eq!(Category::Others.dir_name(), "Others");
    /// ```
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Images => "Images",
            Category::Documents => "Documents",
            Category::Videos => "Videos",
            Category::Audio => "Audio",
            Category::Archives => "Archives",
            Category::Code => "Code",
            Category::Installers => "Installers",
            Category::Others => "Others",
        }
    }

    /// Returns the lowercase extensions (no dot) that belong to this category.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Category::Images => &["jpg", "jpeg", "png", "gif", "bmp", "webp", "svg", "heic"],
            Category::Documents => &[
                "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "txt", "odt", "ods",
            ],
            Category::Videos => &["mp4", "mkv", "mov", "avi", "flv", "webm"],
            Category::Audio => &["mp3", "wav", "aac", "flac", "m4a"],
            Category::Archives => &["zip", "rar", "tar", "gz", "7z", "bz2"],
            Category::Code => &[
                "py", "js", "java", "c", "cpp", "cs", "html", "css", "json", "yaml", "yml", "kt",
                "rs",
            ],
            Category::Installers => &["exe", "msi", "deb", "rpm", "pkg"],
            Category::Others => &[],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Maps file extensions to categories.
///
/// Built once from the fixed table and never mutated afterwards. When an
/// extension appears under more than one category, the category listed
/// first in table order wins.
#[derive(Debug, Clone)]
pub struct Classifier {
    extension_map: HashMap<String, Category>,
}

impl Classifier {
    /// Creates a `Classifier` over the fixed category table.
    pub fn new() -> Self {
        let mut extension_map = HashMap::new();
        for category in Category::ALL {
            for ext in category.extensions() {
                extension_map.entry(ext.to_string()).or_insert(category);
            }
        }
        Self { extension_map }
    }

    /// Returns the category for an extension.
    ///
    /// The extension may carry leading dots and any letter case. Empty and
    /// unknown extensions fall back to [`Category::Others`].
    pub fn classify(&self, ext: &str) -> Category {
        let normalized = normalize_extension(ext);
        self.extension_map
            .get(&normalized)
            .copied()
            .unwrap_or(Category::Others)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim_start_matches('.').to_lowercase()
}
