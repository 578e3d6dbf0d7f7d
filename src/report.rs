use std::fs::File;
use std::io;
use std::path::Path;
use colored::*;
use tracing::debug;
use crate::colors;
use crate::error::InspectError;
use crate::scanner::{Bucket, ScanResult};

pub const NONE_FOUND: &str = "Congrats! None found.";

/// Print the scan summary and every bucket to stdout
pub fn print_results(result: &ScanResult) {
    println!();
    println!("{}", "SCAN SUMMARY:".color(colors::SUMMARY));
    println!("Total directories scanned: {}", result.counters.directories);
    println!("Total files scanned: {}", result.counters.files);
    println!("{}", format!("Scan time: {} ms", result.scan_duration.num_milliseconds()).dimmed());

    let skipped = result.skipped_paths();
    if !skipped.is_empty() {
        println!(
            "{}",
            format!("Unreadable paths skipped: {}", skipped.len()).color(colors::SKIPPED)
        );
        for path in skipped {
            println!("  {}", path.display().to_string().dimmed());
        }
    }

    for bucket in &result.buckets {
        print_bucket(bucket);
    }
}

fn print_bucket(bucket: &Bucket) {
    println!();
    println!(
        "{}",
        format!(
            "{}, total number of matching items: {}",
            bucket.category.label(),
            bucket.len()
        )
        .color(colors::HEADER)
    );

    if bucket.is_empty() {
        println!("{}", NONE_FOUND.color(colors::NOTICE));
        return;
    }

    for path in bucket.paths() {
        println!("{}", path.display());
    }
}

/// Write the CSV report to `path`
pub fn export_csv(result: &ScanResult, path: &Path) -> Result<(), InspectError> {
    let to_export = |source: csv::Error| InspectError::Export {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(|e| to_export(e.into()))?;
    write_csv(result, file).map_err(to_export)?;

    debug!(path = %path.display(), "csv export written");
    Ok(())
}

/// Render the CSV report into any writer.
///
/// Layout: a summary block, then per bucket a header row with the match
/// count followed by one row per path (or a single "none found" row). A
/// blank row separates blocks.
pub fn write_csv<W: io::Write>(result: &ScanResult, writer: W) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["SCAN SUMMARY", ""])?;
    wtr.write_record([
        "Total directories scanned".to_string(),
        result.counters.directories.to_string(),
    ])?;
    wtr.write_record([
        "Total files scanned".to_string(),
        result.counters.files.to_string(),
    ])?;

    for bucket in &result.buckets {
        wtr.write_record(["", ""])?;
        wtr.write_record([
            format!("{}: total number of matching items:", bucket.category.label()),
            bucket.len().to_string(),
        ])?;

        if bucket.is_empty() {
            wtr.write_record([NONE_FOUND, ""])?;
            continue;
        }

        for path in bucket.paths() {
            wtr.write_record([path.display().to_string().as_str(), ""])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
