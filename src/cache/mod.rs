//! Run-scoped fingerprint memoization.
//!
//! The [`FingerprintCache`] maps paths to fingerprints for the duration
//! of one engine instance. It is backed by a sharded concurrent map with
//! insert-if-absent semantics per key: when two workers race on the same
//! path, the first writer wins and the duplicate computation is wasted
//! but harmless, since fingerprinting is pure for unchanged content.
//!
//! Only successful fingerprints are stored. A `None` outcome (filtered
//! path, directory, unreadable file) is recomputed if queried again,
//! which keeps transient I/O failures from being remembered as permanent.
//!
//! There is no cross-run persistence; the cache dies with its engine.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;

use crate::scanner::{Fingerprint, HashMode, Hasher};

/// Process-scoped path-to-fingerprint memo.
#[derive(Debug, Default)]
pub struct FingerprintCache {
    entries: DashMap<PathBuf, Fingerprint>,
    hits: AtomicUsize,
    computations: AtomicUsize,
}

impl FingerprintCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached fingerprint for `path`, computing it on a miss.
    ///
    /// A run uses one hash mode throughout, so keying by path alone is
    /// sound.
    #[must_use]
    pub fn get_or_compute(
        &self,
        path: &Path,
        mode: HashMode,
        hasher: &Hasher,
    ) -> Option<Fingerprint> {
        if let Some(fp) = self.entries.get(path) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Some(*fp);
        }

        self.computations.fetch_add(1, Ordering::Relaxed);
        let fp = hasher.fingerprint(path, mode)?;

        // First writer wins; a racing computation of the same path sees
        // the stored value rather than its own.
        let stored = *self.entries.entry(path.to_path_buf()).or_insert(fp);
        Some(stored)
    }

    /// Number of lookups served from the cache.
    #[must_use]
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    /// Number of underlying hash computations performed.
    #[must_use]
    pub fn computations(&self) -> usize {
        self.computations.load(Ordering::Relaxed)
    }

    /// Number of fingerprints currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no fingerprints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_second_lookup_is_a_hit() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        File::create(&path).unwrap().write_all(b"content").unwrap();

        let cache = FingerprintCache::new();
        let hasher = Hasher::new();

        let first = cache.get_or_compute(&path, HashMode::Full, &hasher);
        let second = cache.get_or_compute(&path, HashMode::Full, &hasher);

        assert_eq!(first, second);
        assert!(first.is_some());
        assert_eq!(cache.computations(), 1);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_absent_results_are_not_cached() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.txt");

        let cache = FingerprintCache::new();
        let hasher = Hasher::new();

        assert!(cache
            .get_or_compute(&missing, HashMode::Full, &hasher)
            .is_none());
        assert!(cache
            .get_or_compute(&missing, HashMode::Full, &hasher)
            .is_none());

        // Both lookups recomputed; nothing was stored
        assert_eq!(cache.computations(), 2);
        assert_eq!(cache.hits(), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_distinct_paths_cached_independently() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        File::create(&a).unwrap().write_all(b"one").unwrap();
        File::create(&b).unwrap().write_all(b"two").unwrap();

        let cache = FingerprintCache::new();
        let hasher = Hasher::new();

        let fp_a = cache.get_or_compute(&a, HashMode::Full, &hasher);
        let fp_b = cache.get_or_compute(&b, HashMode::Full, &hasher);

        assert_ne!(fp_a, fp_b);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.computations(), 2);
    }
}
