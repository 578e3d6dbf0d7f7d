use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration as StdDuration;
use chrono::{Duration, Utc};
use walkdir::{DirEntry, WalkDir};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};
use crate::classify::{Category, Classifier, Entry, EntryKind};
use crate::error::InspectError;

/// How often the spinner message is refreshed, in entries
const PROGRESS_EVERY: usize = 256;

#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Descend into symlinked directories (walkdir guards against loops)
    pub follow_links: bool,
    /// Collapse repeated paths inside a bucket
    pub dedupe: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanCounters {
    pub files: usize,
    pub directories: usize,
}

/// Entries sharing one finding category, in discovery order
#[derive(Debug, Clone)]
pub struct Bucket {
    pub category: Category,
    pub entries: Vec<Entry>,
}

impl Bucket {
    fn new(category: Category) -> Self {
        Self { category, entries: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(Entry::path)
    }

    fn dedupe(&mut self) {
        let mut seen = HashSet::new();
        self.entries.retain(|e| seen.insert(e.path.clone()));
    }
}

/// Everything one scan produced
#[derive(Debug)]
pub struct ScanResult {
    pub root: PathBuf,
    pub counters: ScanCounters,
    pub buckets: Vec<Bucket>,
    pub skipped: Vec<InspectError>,
    pub scan_duration: Duration,
}

impl ScanResult {
    fn empty(root: PathBuf) -> Self {
        Self {
            root,
            counters: ScanCounters::default(),
            buckets: Category::ALL.iter().map(|c| Bucket::new(*c)).collect(),
            skipped: Vec::new(),
            scan_duration: Duration::zero(),
        }
    }

    pub fn bucket(&self, category: Category) -> &Bucket {
        &self.buckets[category.index()]
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Bucket {
        &mut self.buckets[category.index()]
    }

    /// Total rows across all buckets
    pub fn total_findings(&self) -> usize {
        self.buckets.iter().map(Bucket::len).sum()
    }

    /// Paths of subtrees that could not be read
    pub fn skipped_paths(&self) -> Vec<&Path> {
        self.skipped
            .iter()
            .filter_map(|e| match e {
                InspectError::PartialTraversal { path, .. } => Some(path.as_path()),
                _ => None,
            })
            .collect()
    }
}

pub struct Scanner {
    options: ScanOptions,
    classifier: Classifier,
}

impl Scanner {
    pub fn new(options: ScanOptions) -> anyhow::Result<Self> {
        Ok(Self {
            options,
            classifier: Classifier::new()?,
        })
    }

    /// Walk `root` and classify every entry below it
    pub fn scan(&self, root: &Path) -> Result<ScanResult, InspectError> {
        let start_time = Utc::now();
        let root = Self::check_root(root)?;

        info!(root = %root.display(), "starting scan");

        let mut result = ScanResult::empty(root.clone());

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.enable_steady_tick(StdDuration::from_millis(120));
        pb.set_message("Scanning directory structure...");

        let walker = WalkDir::new(&root)
            .min_depth(1)
            .follow_links(self.options.follow_links)
            .sort_by_file_name();

        let mut seen = 0usize;
        for item in walker {
            let dir_entry = match item {
                Ok(e) => e,
                Err(err) => {
                    let path = err.path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| root.clone());
                    warn!(path = %path.display(), "skipping unreadable path: {err}");
                    result.skipped.push(InspectError::PartialTraversal { path, source: err });
                    continue;
                }
            };

            seen += 1;
            if seen % PROGRESS_EVERY == 0 {
                pb.set_message(format!("Scanning directory structure... {seen} entries"));
            }

            let Some(kind) = resolve_kind(&dir_entry) else {
                debug!(path = %dir_entry.path().display(), "not a file or directory, skipping");
                continue;
            };

            match kind {
                EntryKind::File => result.counters.files += 1,
                EntryKind::Directory => result.counters.directories += 1,
            }

            let entry = Entry::new(dir_entry.into_path(), kind);
            for category in self.classifier.classify(&entry) {
                result.bucket_mut(category).entries.push(entry.clone());
            }
        }

        pb.finish_and_clear();

        if self.options.dedupe {
            for bucket in &mut result.buckets {
                bucket.dedupe();
            }
        }

        result.scan_duration = Utc::now() - start_time;

        info!(
            files = result.counters.files,
            directories = result.counters.directories,
            findings = result.total_findings(),
            skipped = result.skipped.len(),
            "scan complete"
        );

        Ok(result)
    }

    /// Root must exist, be a directory and be listable. Returns it made
    /// absolute so every reported path is absolute.
    fn check_root(root: &Path) -> Result<PathBuf, InspectError> {
        if !root.exists() {
            return Err(InspectError::directory_access(root, "Path does not exist"));
        }
        if !root.is_dir() {
            return Err(InspectError::directory_access(root, "Path is not a directory"));
        }
        fs::read_dir(root).map_err(|e| InspectError::directory_access(root, e))?;

        std::path::absolute(root).map_err(|e| InspectError::directory_access(root, e))
    }
}

/// Kind of an entry, looking through symlinks without descending them.
/// Dangling links and special files yield `None`.
fn resolve_kind(entry: &DirEntry) -> Option<EntryKind> {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return Some(EntryKind::Directory);
    }
    if file_type.is_file() {
        return Some(EntryKind::File);
    }
    if file_type.is_symlink() {
        let target = fs::metadata(entry.path()).ok()?;
        if target.is_dir() {
            return Some(EntryKind::Directory);
        }
        if target.is_file() {
            return Some(EntryKind::File);
        }
    }
    None
}
