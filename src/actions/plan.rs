//! Pure removal planning.
//!
//! A [`RemovalPlan`] carries two ordered lists:
//!
//! - `duplicate_files`: the matched target paths, unchanged, in the
//!   order the matcher discovered them;
//! - `cleanup_dirs`: every directory enumerated in the target tree,
//!   sorted by descending path component count so children always
//!   precede their parents in the emptiness pass.
//!
//! Planning performs no filesystem queries; whether a directory actually
//! ended up empty is decided at execution time, after the file pass.

use std::cmp::Reverse;
use std::path::PathBuf;

use crate::scanner::FsEntry;

/// Externally supplied answer to the removal confirmation gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalDecision {
    /// Execute the plan.
    Confirmed,
    /// Leave the filesystem untouched; reported as a no-op, not an error.
    Declined,
}

/// An ordered deletion plan for the target tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalPlan {
    /// Duplicate files to delete, in match-discovery order
    pub duplicate_files: Vec<PathBuf>,
    /// Target directories to evaluate for emptiness, children first
    pub cleanup_dirs: Vec<PathBuf>,
}

impl RemovalPlan {
    /// Whether the plan would touch nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.duplicate_files.is_empty() && self.cleanup_dirs.is_empty()
    }
}

/// Build a removal plan from matched candidates and the target enumeration.
///
/// Directories are sorted by component count rather than path-string
/// length: unusual naming cannot misorder the pass, a deeper path always
/// sorts before its ancestors.
#[must_use]
pub fn plan_removal(candidates: &[PathBuf], target_entries: &[FsEntry]) -> RemovalPlan {
    let mut cleanup_dirs: Vec<PathBuf> = target_entries
        .iter()
        .filter(|entry| entry.is_dir())
        .map(|entry| entry.path.clone())
        .collect();
    cleanup_dirs.sort_by_key(|path| Reverse(path.components().count()));

    RemovalPlan {
        duplicate_files: candidates.to_vec(),
        cleanup_dirs,
    }
}
