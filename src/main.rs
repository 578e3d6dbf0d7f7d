use std::process::ExitCode;
use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use tracing::Level;
use fs_name_inspector::{colors, export_csv, print_results, Cli, ScanResult, Scanner};

fn main() -> Result<ExitCode> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Disable colors if requested
    if cli.no_color {
        colored::control::set_override(false);
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let directory = match cli.directory() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::debug!("{e}");
            Cli::print_usage_banner();
            return Ok(ExitCode::FAILURE);
        }
    };

    let scanner = Scanner::new(cli.scan_options()).context("Failed to build name rules")?;

    println!("Scanning directory structure... This may take a while for large directories.");
    let result = match scanner.scan(directory) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{}", e.to_string().color(colors::ERROR));
            return Ok(ExitCode::FAILURE);
        }
    };

    if let Some(csv_path) = cli.csv.as_deref() {
        export(&result, csv_path);
    }

    print_results(&result);

    Ok(ExitCode::SUCCESS)
}

/// Export failures are reported and do not change the exit status
fn export(result: &ScanResult, path: &std::path::Path) {
    match export_csv(result, path) {
        Ok(()) => println!(
            "\n{}",
            format!("Results exported to {}", path.display()).color(colors::NOTICE)
        ),
        Err(e) => {
            tracing::debug!("{e}");
            println!(
                "\n{}",
                format!("Error exporting to CSV: {e}").color(colors::ERROR)
            );
        }
    }
}
