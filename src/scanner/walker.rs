//! Directory walker built on walkdir.
//!
//! # Overview
//!
//! This module provides the [`Walker`] struct for traversing one root
//! directory and emitting every remaining file and subdirectory as an
//! [`FsEntry`]. Subtrees matched by [`filter::prunes_descent`] are never
//! visited, which bounds traversal cost on volumes carrying backup
//! catalogs or snapshot mounts.
//!
//! Directories are emitted alongside files because the removal stage
//! later evaluates them for emptiness once duplicate files are gone.
//!
//! # Example
//!
//! ```no_run
//! use dupesweep::scanner::Walker;
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("/data/photos"));
//! let entries: Vec<_> = walker.walk().collect();
//! println!("Found {} entries", entries.len());
//! ```

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{filter, EntryKind, FsEntry, ScanError};

/// Directory walker for sequential entry discovery.
///
/// Children are sorted by file name so enumeration order is stable
/// across runs on the same tree.
#[derive(Debug)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
}

impl Walker {
    /// Create a new walker for the given root.
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Walk the tree, yielding every remaining file and subdirectory.
    ///
    /// The root itself is not emitted. Symlinks are not followed; a
    /// symlink is tagged [`EntryKind::File`] regardless of what it points
    /// at. Entries that become inaccessible mid-walk are skipped with a
    /// warning and the walk continues; the walker itself never fails.
    pub fn walk(&self) -> impl Iterator<Item = FsEntry> + '_ {
        WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !filter::prunes_descent(entry.path()))
            .filter_map(move |result| {
                let entry = match result {
                    Ok(entry) => entry,
                    Err(e) => {
                        log::warn!("Skipping inaccessible entry: {}", e);
                        return None;
                    }
                };

                // Skip the root directory itself
                if entry.path() == self.root {
                    return None;
                }

                let kind = if entry.file_type().is_dir() {
                    EntryKind::Directory
                } else {
                    EntryKind::File
                };

                Some(FsEntry {
                    path: entry.into_path(),
                    kind,
                })
            })
    }
}

/// Validate that a scan root exists and is a directory.
///
/// This is the fatal precondition check run before any hashing begins.
///
/// # Errors
///
/// Returns [`ScanError::NotFound`] if the path does not exist, or
/// [`ScanError::NotADirectory`] if it exists but is not a directory.
pub fn validate_root(path: &Path) -> Result<(), ScanError> {
    let metadata = std::fs::metadata(path).map_err(|_| ScanError::NotFound(path.to_path_buf()))?;
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}
