//! BLAKE3 file fingerprinting with fast and full modes.
//!
//! # Overview
//!
//! This module provides the [`Hasher`] struct for computing content
//! fingerprints of single files:
//!
//! - **Fast mode** hashes at most the first [`FAST_PREFIX_LEN`] bytes.
//!   Two files sharing an identical prefix that long compare equal even
//!   if their tails differ. This is a deliberate speed/correctness trade
//!   selectable by the caller, not a bug to be fixed.
//! - **Full mode** streams the entire file through the digest in bounded
//!   chunks, so memory use is independent of file size.
//!
//! Entries that cannot or should not be fingerprinted (filtered names,
//! directories, unreadable files) yield `None` rather than an error; the
//! scan always continues.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use super::filter;

/// Number of prefix bytes hashed in fast mode.
pub const FAST_PREFIX_LEN: usize = 8192;

/// Chunk size for streaming full-file hashing. Affects only the I/O
/// pattern, never the resulting digest.
const CHUNK_SIZE: usize = 8192;

/// A content fingerprint: a 256-bit BLAKE3 digest.
///
/// Two fingerprints are equal iff their digest bytes are equal. Not a
/// security boundary, purpose-built for duplicate detection.
pub type Fingerprint = [u8; 32];

/// Selects how much of a file's content contributes to its fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashMode {
    /// Hash only the first [`FAST_PREFIX_LEN`] bytes.
    Fast,
    /// Hash the entire file content.
    Full,
}

/// File fingerprinter.
///
/// Stateless; a single instance can be shared freely across threads.
#[derive(Debug, Default)]
pub struct Hasher;

impl Hasher {
    /// Create a new hasher.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Compute the fingerprint of a file.
    ///
    /// Returns `None` without error if the path is excluded by the
    /// filter rules (including hidden base names), if it is a directory,
    /// or if any open/read failure occurs. I/O failures are logged with
    /// the offending path; they never propagate to the caller.
    #[must_use]
    pub fn fingerprint(&self, path: &Path, mode: HashMode) -> Option<Fingerprint> {
        if filter::is_excluded(path) {
            log::trace!("Not fingerprinting excluded path: {}", path.display());
            return None;
        }
        if path.is_dir() {
            log::trace!("Not fingerprinting directory: {}", path.display());
            return None;
        }

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                log::warn!("Failed to open {}: {}", path.display(), e);
                return None;
            }
        };

        let result = match mode {
            HashMode::Fast => hash_prefix(file),
            HashMode::Full => hash_stream(file),
        };

        match result {
            Ok(fp) => Some(fp),
            Err(e) => {
                log::warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }
}

/// Hash at most the first [`FAST_PREFIX_LEN`] bytes of the file.
fn hash_prefix(mut file: File) -> io::Result<Fingerprint> {
    let mut buf = vec![0u8; FAST_PREFIX_LEN];
    let mut filled = 0;
    while filled < FAST_PREFIX_LEN {
        let n = file.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }

    let mut hasher = blake3::Hasher::new();
    hasher.update(&buf[..filled]);
    Ok(*hasher.finalize().as_bytes())
}

/// Stream the entire file through the digest in bounded chunks.
fn hash_stream(mut file: File) -> io::Result<Fingerprint> {
    let mut hasher = blake3::Hasher::new();
    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(*hasher.finalize().as_bytes())
}

/// Render a fingerprint as a lowercase hexadecimal string.
#[must_use]
pub fn fingerprint_to_hex(fp: &Fingerprint) -> String {
    blake3::Hash::from(*fp).to_hex().to_string()
}
