//! Filesystem Name Inspector - flags names that break cross-platform transfers

pub mod classify;
pub mod cli;
pub mod error;
pub mod report;
pub mod scanner;

// Re-exports for easy access
pub use classify::{Category, Classifier, Entry, EntryKind};
pub use cli::Cli;
pub use error::InspectError;
pub use report::{export_csv, print_results, write_csv};
pub use scanner::{Bucket, ScanCounters, ScanOptions, ScanResult, Scanner};

pub mod colors {
    use colored::Color;

    pub const HEADER: Color = Color::BrightMagenta;
    pub const SUMMARY: Color = Color::BrightCyan;
    pub const NOTICE: Color = Color::BrightYellow;
    pub const ERROR: Color = Color::BrightRed;
    pub const SKIPPED: Color = Color::BrightBlue;
}

/// Current version of the inspector
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Archive and package extensions, matched case-insensitively against the
/// end of a file name. The leading dot is literal.
pub const ARCHIVE_EXTENSIONS: &[&str] = &[
    ".zip", ".tar", ".rar", ".7z", ".s7z", ".apk", ".zipx", ".wim", ".gz",
    ".iso", ".dmg", ".app", ".warc", ".warcz", ".war", ".jar", ".ewf", ".e01",
    ".dd", ".raw", ".01", ".001", ".1", ".gzip", ".img", ".aff", ".nrg", ".bin",
    ".sit", ".sitx", ".tgz", ".tlz", ".txz", ".zz", ".ecc", ".dar", ".ima",
    ".deb", ".pkg", ".mpkg", ".rpm", ".msi", ".crx",
];

/// Platform artifact files flagged regardless of a leading dot (exact,
/// case-sensitive match).
pub const SYSTEM_FILE_NAMES: &[&str] = &["Thumbs.db"];
