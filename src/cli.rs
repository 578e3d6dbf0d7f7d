use clap::Parser;
use std::path::{Path, PathBuf};
use colored::*;
use crate::{colors, VERSION};
use crate::error::InspectError;
use crate::scanner::ScanOptions;

const BIN_NAME: &str = "fs-name-inspector";

#[derive(Parser, Debug)]
#[command(
    name = "fs-name-inspector",
    version,
    about = "Filesystem Name Inspector: Scans directories to identify problematic files and naming issues that could cause compatibility problems.",
    override_usage = "fs-name-inspector /path/to/directory [OPTIONS]",
    after_help = "Examples:\n  \
                  fs-name-inspector /path/to/directory\n  \
                  fs-name-inspector /path/to/directory --csv results.csv\n\n\
                  Checks performed:\n  \
                  • Archive and package extensions (.zip, .tar, .iso, ...)\n  \
                  • File names containing / \\ : or ending in whitespace\n  \
                  • Hidden files, Thumbs.db and hidden directories\n  \
                  • Non-ASCII characters in file and directory names"
)]
pub struct Cli {
    /// Path to the directory you want to scan
    pub directory: Option<PathBuf>,

    /// Export results to a CSV file at the specified path
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// List each path at most once per category
    #[arg(long)]
    pub dedupe: bool,

    /// Descend into symlinked directories
    #[arg(long)]
    pub follow_links: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Directory to scan, or an invocation error when none was given
    pub fn directory(&self) -> Result<&Path, InspectError> {
        self.directory
            .as_deref()
            .ok_or_else(|| InspectError::Invocation("no directory given".to_string()))
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            follow_links: self.follow_links,
            dedupe: self.dedupe,
        }
    }

    /// Short banner shown when the tool is run without a directory
    pub fn print_usage_banner() {
        let lines = [
            format!("Filesystem Name Inspector v{}", VERSION),
            format!("Usage: {} /path/to/directory [OPTIONS]", BIN_NAME),
            format!("For more information, run: {} --help", BIN_NAME),
        ];
        for line in lines {
            println!("{}", line.color(colors::SUMMARY));
        }
    }
}
