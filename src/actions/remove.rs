//! Removal executor.
//!
//! # Overview
//!
//! Executes a [`RemovalPlan`] in two strictly sequential passes:
//!
//! 1. delete every planned candidate that currently is a plain file,
//!    following symlinks for the check — a matched symlink is unlinked
//!    itself, its target is never touched;
//! 2. delete every planned directory that is now empty, children first.
//!
//! Deletion is single-threaded to keep the depth ordering simple and to
//! avoid emptiness races. Each failed deletion is logged and recorded,
//! and the batch continues; only successfully removed paths enter the
//! outcome's removed lists.
//!
//! Deletion is permanent (`fs::remove_file` / `fs::remove_dir`).

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use super::plan::{RemovalDecision, RemovalPlan};

/// Result of one removal execution.
#[derive(Debug, Clone, Default)]
pub struct RemovalOutcome {
    /// Files actually deleted, in deletion order
    pub removed_files: Vec<PathBuf>,
    /// Directories actually deleted, in deletion order
    pub removed_dirs: Vec<PathBuf>,
    /// Paths that could not be deleted, with the failure message
    pub failures: Vec<(PathBuf, String)>,
    /// Bytes freed by the file pass
    pub bytes_freed: u64,
    /// Whether the plan was executed (false when declined)
    pub executed: bool,
}

impl RemovalOutcome {
    /// Total number of removed paths.
    #[must_use]
    pub fn removed_count(&self) -> usize {
        self.removed_files.len() + self.removed_dirs.len()
    }

    /// Whether every attempted deletion succeeded.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Execute a removal plan, gated by the supplied decision.
///
/// [`RemovalDecision::Declined`] performs no filesystem access at all
/// and returns an outcome with `executed = false`. Confirmed execution
/// is best-effort: failures are recorded and the batch continues.
#[must_use]
pub fn execute_removal(plan: &RemovalPlan, decision: RemovalDecision) -> RemovalOutcome {
    let mut outcome = RemovalOutcome::default();

    if decision == RemovalDecision::Declined {
        log::info!("Removal declined, filesystem untouched");
        return outcome;
    }
    outcome.executed = true;

    // Pass 1: duplicate files
    for path in &plan.duplicate_files {
        let meta = match fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(e) => {
                log::debug!("Candidate gone before removal: {}: {}", path.display(), e);
                continue;
            }
        };
        // A symlink matched through its target content; the is-file
        // check follows the link, but removal unlinks the path itself.
        let removable = meta.is_file()
            || (meta.file_type().is_symlink()
                && fs::metadata(path).is_ok_and(|target| target.is_file()));
        if !removable {
            log::debug!("Skipping non-file candidate: {}", path.display());
            continue;
        }
        let size = meta.len();
        match fs::remove_file(path) {
            Ok(()) => {
                log::debug!("Removed file: {}", path.display());
                outcome.removed_files.push(path.clone());
                outcome.bytes_freed += size;
            }
            Err(e) => {
                log::warn!("Failed to remove {}: {}", path.display(), e);
                outcome.failures.push((path.clone(), e.to_string()));
            }
        }
    }

    // Pass 2: directories left empty, children first (plan order)
    for path in &plan.cleanup_dirs {
        if !is_empty_dir(path) {
            continue;
        }
        match fs::remove_dir(path) {
            Ok(()) => {
                log::debug!("Removed empty directory: {}", path.display());
                outcome.removed_dirs.push(path.clone());
            }
            Err(e) => {
                log::warn!("Failed to remove directory {}: {}", path.display(), e);
                outcome.failures.push((path.clone(), e.to_string()));
            }
        }
    }

    log::info!(
        "Removal complete: {} file(s), {} director(ies), {} failure(s)",
        outcome.removed_files.len(),
        outcome.removed_dirs.len(),
        outcome.failures.len()
    );

    outcome
}

/// Whether `path` currently is a readable, empty directory.
fn is_empty_dir(path: &Path) -> bool {
    match fs::read_dir(path) {
        Ok(mut entries) => entries.next().is_none(),
        Err(_) => false,
    }
}
