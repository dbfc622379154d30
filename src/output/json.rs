//! JSON output formatter for the run report.
//!
//! Provides a single machine-readable document for `--output json`.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "reference_root": "/originals",
//!   "target_root": "/clone",
//!   "mode": "full",
//!   "pairs": [
//!     { "reference": "/originals/a.txt", "target": "/clone/a.txt" }
//!   ],
//!   "summary": {
//!     "reference_entries": 120,
//!     "target_entries": 80,
//!     "duplicate_pairs": 1,
//!     "removal_executed": true,
//!     "removed_files": 1,
//!     "removed_dirs": 0,
//!     "bytes_freed": 1024,
//!     "removal_failures": 0,
//!     "exit_code": 0,
//!     "exit_code_name": "DS000"
//!   }
//! }
//! ```

use std::path::Path;

use serde::Serialize;

use crate::actions::RemovalOutcome;
use crate::duplicates::{DuplicatePair, FingerprintStats};
use crate::error::ExitCode;
use crate::scanner::HashMode;

/// Summary statistics in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSummary {
    /// Entries enumerated in the reference tree
    pub reference_entries: usize,
    /// Entries enumerated in the target tree
    pub target_entries: usize,
    /// Number of duplicate pairs found
    pub duplicate_pairs: usize,
    /// Whether removal was executed (false when declined or dry run)
    pub removal_executed: bool,
    /// Files actually removed
    pub removed_files: usize,
    /// Directories actually removed
    pub removed_dirs: usize,
    /// Bytes freed by removal
    pub bytes_freed: u64,
    /// Paths that could not be removed
    pub removal_failures: usize,
    /// The exit code number
    pub exit_code: i32,
    /// The machine-readable exit code name (e.g., "DS000")
    pub exit_code_name: String,
}

/// Complete run report in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    /// Reference root path
    pub reference_root: String,
    /// Target root path
    pub target_root: String,
    /// Hashing mode used ("fast" or "full")
    pub mode: String,
    /// Every duplicate pair, in target enumeration order
    pub pairs: Vec<DuplicatePair>,
    /// Run summary
    pub summary: JsonSummary,
}

impl JsonReport {
    /// Assemble a report from the pipeline's outputs.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        reference: &Path,
        target: &Path,
        mode: HashMode,
        pairs: &[DuplicatePair],
        outcome: &RemovalOutcome,
        reference_stats: &FingerprintStats,
        target_stats: &FingerprintStats,
        exit_code: ExitCode,
    ) -> Self {
        Self {
            reference_root: reference.display().to_string(),
            target_root: target.display().to_string(),
            mode: match mode {
                HashMode::Fast => "fast".to_string(),
                HashMode::Full => "full".to_string(),
            },
            pairs: pairs.to_vec(),
            summary: JsonSummary {
                reference_entries: reference_stats.entries,
                target_entries: target_stats.entries,
                duplicate_pairs: pairs.len(),
                removal_executed: outcome.executed,
                removed_files: outcome.removed_files.len(),
                removed_dirs: outcome.removed_dirs.len(),
                bytes_freed: outcome.bytes_freed,
                removal_failures: outcome.failures.len(),
                exit_code: exit_code.as_i32(),
                exit_code_name: exit_code.code_prefix().to_string(),
            },
        }
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
