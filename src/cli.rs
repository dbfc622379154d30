//! Command-line interface definitions for DupeSweep.
//!
//! Single-shot invocation: two positional roots plus flags, no
//! subcommands, no configuration file.
//!
//! # Example
//!
//! ```bash
//! # Report duplicates, prompt before removing
//! dupesweep /Volumes/Originals /Volumes/Clone
//!
//! # Prefix-only hashing, remove without prompting
//! dupesweep --fast --yes /Volumes/Originals /Volumes/Clone
//!
//! # Report only, never remove
//! dupesweep --dry-run /Volumes/Originals /Volumes/Clone
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Reference-aware duplicate file sweeper.
///
/// DupeSweep fingerprints the files of a reference tree and a target
/// tree (BLAKE3), reports target files whose content already exists in
/// the reference tree, and optionally deletes them together with any
/// directories the deletion leaves empty. Files in the reference tree
/// are never touched.
#[derive(Debug, Parser)]
#[command(name = "dupesweep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the originals; never modified
    #[arg(value_name = "REFERENCE")]
    pub reference: PathBuf,

    /// Directory scanned for files to remove when duplicated in REFERENCE
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Hash only the first 8 KiB of each file
    ///
    /// Much faster on large files, but two files sharing an identical
    /// 8 KiB prefix are treated as duplicates even if they differ later.
    #[arg(long)]
    pub fast: bool,

    /// Number of hashing threads (default: 4)
    ///
    /// Lower values reduce disk thrashing on HDDs.
    #[arg(long, value_name = "N", default_value = "4")]
    pub threads: usize,

    /// Remove duplicates without prompting for confirmation
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Report duplicates but never remove anything (no prompt either)
    #[arg(long, conflicts_with = "yes")]
    pub dry_run: bool,

    /// Directory where report files are written (default: current directory)
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub report_dir: PathBuf,

    /// Do not write report files
    #[arg(long)]
    pub no_report: bool,

    /// Output format for the run summary
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,
}

/// Output format for the run summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary on stdout
    Text,
    /// Single JSON document on stdout for scripting
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
