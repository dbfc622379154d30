//! Scanner module for directory enumeration and file fingerprinting.
//!
//! This module provides functionality for:
//! - Directory traversal with subtree pruning (walkdir)
//! - Exclusion rules for backup catalogs, snapshot mounts, and hidden names
//! - Content fingerprinting with BLAKE3 (fast prefix or full streaming)
//!
//! # Architecture
//!
//! The scanner is divided into submodules:
//! - [`filter`]: Pure exclusion predicates shared by the walker and hasher
//! - [`walker`]: Directory traversal and entry discovery
//! - [`hasher`]: BLAKE3 file fingerprinting (fast/full modes)
//!
//! # Example
//!
//! ```no_run
//! use dupesweep::scanner::{Hasher, HashMode, Walker};
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("/data/photos"));
//! let hasher = Hasher::new();
//!
//! for entry in walker.walk() {
//!     if let Some(fp) = hasher.fingerprint(&entry.path, HashMode::Full) {
//!         println!("{}: {}", entry.path.display(), dupesweep::scanner::fingerprint_to_hex(&fp));
//!     }
//! }
//! ```

pub mod filter;
pub mod hasher;
pub mod walker;

use std::path::PathBuf;

// Re-export main types
pub use hasher::{fingerprint_to_hex, Fingerprint, HashMode, Hasher, FAST_PREFIX_LEN};
pub use walker::{validate_root, Walker};

/// Kind of a filesystem entry, determined at enumeration time.
///
/// Symlinks and other non-directory entries are tagged [`EntryKind::File`];
/// opening such a path later may fail, which is a non-fatal no-fingerprint
/// outcome at the hashing stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file (or anything that is not a directory).
    File,
    /// A directory.
    Directory,
}

/// A filesystem entry discovered during enumeration.
///
/// Entries have no persistent identity beyond their path for the
/// duration of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsEntry {
    /// Path to the entry
    pub path: PathBuf,
    /// Whether the entry was a file or a directory when enumerated
    pub kind: EntryKind,
}

impl FsEntry {
    /// Create a file entry.
    #[must_use]
    pub fn file(path: PathBuf) -> Self {
        Self {
            path,
            kind: EntryKind::File,
        }
    }

    /// Create a directory entry.
    #[must_use]
    pub fn directory(path: PathBuf) -> Self {
        Self {
            path,
            kind: EntryKind::Directory,
        }
    }

    /// Whether this entry was enumerated as a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Errors that can occur while validating a scan root.
///
/// These are the only fatal errors of the pipeline: per-file problems
/// during enumeration or hashing are downgraded to skips.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// The specified root path was not found.
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// The specified root path is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fs_entry_constructors() {
        let file = FsEntry::file(PathBuf::from("/data/a.txt"));
        assert_eq!(file.kind, EntryKind::File);
        assert!(!file.is_dir());

        let dir = FsEntry::directory(PathBuf::from("/data/sub"));
        assert_eq!(dir.kind, EntryKind::Directory);
        assert!(dir.is_dir());
    }

    #[test]
    fn test_scan_error_display() {
        let err = ScanError::NotFound(PathBuf::from("/missing"));
        assert_eq!(err.to_string(), "Path not found: /missing");

        let err = ScanError::NotADirectory(PathBuf::from("/file.txt"));
        assert_eq!(err.to_string(), "Not a directory: /file.txt");
    }
}
