//! Text report files and the stdout summary.
//!
//! Report files keep the listing format users of the original cleanup
//! scripts know: a `File:`/`Duplicate:` stanza per pair in
//! `duplicates.txt`, and one path per line in `removed.txt`. Every
//! duplicate pair and every removed path appears; the only addition is a
//! timestamp header.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use bytesize::ByteSize;
use yansi::Paint;

use crate::actions::RemovalOutcome;
use crate::duplicates::{DuplicatePair, FingerprintStats};

/// File name of the duplicate listing report.
pub const DUPLICATES_REPORT: &str = "duplicates.txt";

/// File name of the removal report.
pub const REMOVED_REPORT: &str = "removed.txt";

fn timestamp_header(file: &mut File) -> io::Result<()> {
    writeln!(
        file,
        "# dupesweep report, {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(file)
}

/// Write the duplicate listing to `<report_dir>/duplicates.txt`.
///
/// # Errors
///
/// Returns any I/O error from creating or writing the report file.
pub fn write_duplicates_report(report_dir: &Path, pairs: &[DuplicatePair]) -> io::Result<PathBuf> {
    let path = report_dir.join(DUPLICATES_REPORT);
    let mut file = File::create(&path)?;

    timestamp_header(&mut file)?;
    writeln!(file, "Found {} duplicate files: \n", pairs.len())?;
    for pair in pairs {
        writeln!(
            file,
            "File: {}\nDuplicate: {}\n",
            pair.reference.display(),
            pair.target.display()
        )?;
    }

    Ok(path)
}

/// Write the removal listing to `<report_dir>/removed.txt`.
///
/// Only paths that were actually removed appear.
///
/// # Errors
///
/// Returns any I/O error from creating or writing the report file.
pub fn write_removed_report(report_dir: &Path, outcome: &RemovalOutcome) -> io::Result<PathBuf> {
    let path = report_dir.join(REMOVED_REPORT);
    let mut file = File::create(&path)?;

    timestamp_header(&mut file)?;
    writeln!(file, "Duplicate files removed: \n")?;
    for removed in &outcome.removed_files {
        writeln!(file, "{}", removed.display())?;
    }
    for removed in &outcome.removed_dirs {
        writeln!(file, "{}", removed.display())?;
    }

    Ok(path)
}

/// Print the human-readable run summary to stdout.
pub fn print_summary(
    reference: &Path,
    target: &Path,
    pairs: &[DuplicatePair],
    outcome: &RemovalOutcome,
    reference_stats: &FingerprintStats,
    target_stats: &FingerprintStats,
) {
    println!(
        "Reference: {} ({} entries, {} fingerprinted)",
        reference.display(),
        reference_stats.entries,
        reference_stats.fingerprinted
    );
    println!(
        "Target:    {} ({} entries, {} fingerprinted)",
        target.display(),
        target_stats.entries,
        target_stats.fingerprinted
    );

    if pairs.is_empty() {
        println!("{}", "No duplicate files found.".green());
        return;
    }

    println!(
        "{} duplicate file(s) found",
        pairs.len().to_string().yellow().bold()
    );

    if !outcome.executed {
        println!("No files were removed.");
        return;
    }

    println!(
        "Removed {} file(s) and {} director(ies), freed {}",
        outcome.removed_files.len().to_string().green().bold(),
        outcome.removed_dirs.len(),
        ByteSize(outcome.bytes_freed)
    );
    if !outcome.all_succeeded() {
        println!(
            "{} path(s) could not be removed (see log)",
            outcome.failures.len().to_string().red().bold()
        );
    }
}
