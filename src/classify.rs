use std::fmt;
use std::path::{Path, PathBuf};
use regex::Regex;
use anyhow::Result;
use crate::{ARCHIVE_EXTENSIONS, SYSTEM_FILE_NAMES};

const SEPARATOR_PATTERN: &str = r"[/\\:]";
const TRAILING_WHITESPACE_PATTERN: &str = r"\s+$";
const NON_ASCII_PATTERN: &str = r"[^\x00-\x7F]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Directory,
}

/// Snapshot of one filesystem object seen during a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
}

impl Entry {
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        let path = path.into();
        let name = path.file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();
        Self { path, name, kind }
    }

    /// Entry with an explicit base name, for names the host filesystem
    /// cannot store (a `/` inside a component, for instance).
    #[cfg(test)]
    pub(crate) fn with_name(
        path: impl Into<PathBuf>,
        name: impl Into<String>,
        kind: EntryKind,
    ) -> Self {
        Self { path: path.into(), name: name.into(), kind }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Finding categories, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    ArchivePackage,
    InvalidName,
    HiddenOrSystemFile,
    HiddenSystemDirectory,
    NonAsciiName,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::ArchivePackage,
        Category::InvalidName,
        Category::HiddenOrSystemFile,
        Category::HiddenSystemDirectory,
        Category::NonAsciiName,
    ];

    /// Heading used in console and CSV output
    pub fn label(&self) -> &'static str {
        match self {
            Category::ArchivePackage => "FILE PACKAGES",
            Category::InvalidName => "FILE NAMES",
            Category::HiddenOrSystemFile => "SYSTEM FILES",
            Category::HiddenSystemDirectory => "SYSTEM DIRECTORIES",
            Category::NonAsciiName => "NON-ASCII CHARACTERS",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Category::ArchivePackage => "archive_package",
            Category::InvalidName => "invalid_name",
            Category::HiddenOrSystemFile => "hidden_or_system_file",
            Category::HiddenSystemDirectory => "hidden_system_directory",
            Category::NonAsciiName => "non_ascii_name",
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Precompiled name rules. Classification depends only on an entry's kind
/// and base name.
pub struct Classifier {
    archive_package: Regex,
    separator: Regex,
    trailing_whitespace: Regex,
    non_ascii: Regex,
}

impl Classifier {
    pub fn new() -> Result<Self> {
        let extensions = ARCHIVE_EXTENSIONS
            .iter()
            .map(|ext| regex::escape(ext.trim_start_matches('.')))
            .collect::<Vec<_>>()
            .join("|");

        Ok(Self {
            archive_package: Regex::new(&format!(r"(?i)\.(?:{})\n?$", extensions))?,
            separator: Regex::new(SEPARATOR_PATTERN)?,
            trailing_whitespace: Regex::new(TRAILING_WHITESPACE_PATTERN)?,
            non_ascii: Regex::new(NON_ASCII_PATTERN)?,
        })
    }

    /// Every category the entry falls into. `InvalidName` is listed once per
    /// matching rule, so a name with both a separator and trailing
    /// whitespace yields it twice.
    pub fn classify(&self, entry: &Entry) -> Vec<Category> {
        let name = entry.name.as_str();
        let mut hits = Vec::new();

        match entry.kind {
            EntryKind::File => {
                if self.is_archive_package(name) {
                    hits.push(Category::ArchivePackage);
                }
                if self.has_separator(name) {
                    hits.push(Category::InvalidName);
                }
                if self.has_trailing_whitespace(name) {
                    hits.push(Category::InvalidName);
                }
                if self.is_non_ascii(name) {
                    hits.push(Category::NonAsciiName);
                }
                if is_hidden_or_system_file(name) {
                    hits.push(Category::HiddenOrSystemFile);
                }
            }
            EntryKind::Directory => {
                if self.is_non_ascii(name) {
                    hits.push(Category::NonAsciiName);
                }
                if is_hidden_directory(name) {
                    hits.push(Category::HiddenSystemDirectory);
                }
            }
        }

        hits
    }

    /// Case-insensitive suffix match against the archive list, using Unicode
    /// case folding. A single trailing newline after the extension still
    /// counts as the end of the name.
    pub fn is_archive_package(&self, name: &str) -> bool {
        self.archive_package.is_match(name)
    }

    pub fn has_separator(&self, name: &str) -> bool {
        self.separator.is_match(name)
    }

    pub fn has_trailing_whitespace(&self, name: &str) -> bool {
        self.trailing_whitespace.is_match(name)
    }

    pub fn is_non_ascii(&self, name: &str) -> bool {
        self.non_ascii.is_match(name)
    }
}

pub fn is_hidden_or_system_file(name: &str) -> bool {
    name.starts_with('.') || SYSTEM_FILE_NAMES.contains(&name)
}

pub fn is_hidden_directory(name: &str) -> bool {
    name.starts_with('.')
}
