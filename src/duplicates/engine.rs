//! Concurrent fingerprint engine.
//!
//! # Overview
//!
//! The [`FingerprintEngine`] owns one explicitly sized rayon thread pool
//! and one run-scoped [`FingerprintCache`], and dispatches hashing across
//! the enumerated entries of a tree. Results are associated by path, so
//! the returned mapping is deterministic for deterministic file contents
//! regardless of worker completion order.
//!
//! The same engine instance serves both trees within one run, so a file
//! reachable from both roots is hashed once.
//!
//! The engine provides no timeout or cancellation; a caller needing one
//! should wrap it.
//!
//! # Example
//!
//! ```no_run
//! use dupesweep::duplicates::{EngineConfig, FingerprintEngine};
//! use dupesweep::scanner::{HashMode, Walker};
//! use std::path::Path;
//!
//! let entries: Vec<_> = Walker::new(Path::new("/data/photos")).walk().collect();
//!
//! let engine = FingerprintEngine::new(
//!     EngineConfig::default().with_threads(8).with_mode(HashMode::Fast),
//! ).unwrap();
//! let (fingerprints, stats) = engine.fingerprint_all("reference", &entries);
//! println!("{} of {} entries fingerprinted", stats.fingerprinted, stats.entries);
//! ```

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rayon::prelude::*;

use crate::cache::FingerprintCache;
use crate::progress::ProgressCallback;
use crate::scanner::{Fingerprint, FsEntry, HashMode, Hasher};

/// Configuration for the fingerprint engine.
#[derive(Clone)]
pub struct EngineConfig {
    /// Number of hashing threads. Default is 4 to prevent disk thrashing.
    pub threads: usize,
    /// Hashing mode applied to every entry of the run.
    pub mode: HashMode,
    /// Optional progress callback.
    pub progress: Option<Arc<dyn ProgressCallback>>,
}

impl std::fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineConfig")
            .field("threads", &self.threads)
            .field("mode", &self.mode)
            .field("progress", &self.progress.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            threads: 4,
            mode: HashMode::Full,
            progress: None,
        }
    }
}

impl EngineConfig {
    /// Set the number of hashing threads (minimum 1).
    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    /// Set the hashing mode.
    #[must_use]
    pub fn with_mode(mut self, mode: HashMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the progress callback.
    #[must_use]
    pub fn with_progress(mut self, progress: Arc<dyn ProgressCallback>) -> Self {
        self.progress = Some(progress);
        self
    }
}

/// Errors that can occur while building the engine.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// The rayon thread pool could not be constructed.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Statistics from one fingerprinting phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FingerprintStats {
    /// Entries submitted to the phase
    pub entries: usize,
    /// Entries that received a fingerprint
    pub fingerprinted: usize,
    /// Entries without a fingerprint (filtered, directories, unreadable)
    pub absent: usize,
    /// Lookups served from the cache during this phase
    pub cache_hits: usize,
    /// Hash computations performed during this phase
    pub cache_computations: usize,
}

/// Concurrent fingerprint engine with a reusable worker pool.
pub struct FingerprintEngine {
    pool: rayon::ThreadPool,
    cache: FingerprintCache,
    hasher: Hasher,
    config: EngineConfig,
}

impl FingerprintEngine {
    /// Create an engine with its own thread pool and cache.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ThreadPool`] if the pool cannot be built.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads.max(1))
            .build()?;
        log::debug!(
            "Fingerprint engine ready: {} threads, {:?} mode",
            config.threads.max(1),
            config.mode
        );
        Ok(Self {
            pool,
            cache: FingerprintCache::new(),
            hasher: Hasher::new(),
            config,
        })
    }

    /// Fingerprint every entry, returning a path-to-fingerprint map.
    ///
    /// Every input path is processed exactly once per call. Entries that
    /// yield no fingerprint are omitted from the map; absence is not an
    /// error. `phase` names the phase for progress reporting and logs.
    #[must_use]
    pub fn fingerprint_all(
        &self,
        phase: &str,
        entries: &[FsEntry],
    ) -> (HashMap<PathBuf, Fingerprint>, FingerprintStats) {
        let mut stats = FingerprintStats {
            entries: entries.len(),
            ..Default::default()
        };

        if entries.is_empty() {
            log::debug!("Phase {}: no entries to fingerprint", phase);
            return (HashMap::new(), stats);
        }

        if let Some(ref callback) = self.config.progress {
            callback.on_phase_start(phase, entries.len());
        }
        log::info!(
            "Phase {}: fingerprinting {} entries on {} threads",
            phase,
            entries.len(),
            self.config.threads.max(1)
        );

        let hits_before = self.cache.hits();
        let computations_before = self.cache.computations();
        let processed = AtomicUsize::new(0);

        let results: Vec<(PathBuf, Option<Fingerprint>)> = self.pool.install(|| {
            entries
                .par_iter()
                .map(|entry| {
                    let fp = self
                        .cache
                        .get_or_compute(&entry.path, self.config.mode, &self.hasher);
                    if let Some(ref callback) = self.config.progress {
                        let done = processed.fetch_add(1, Ordering::Relaxed) + 1;
                        callback.on_progress(done, entry.path.to_string_lossy().as_ref());
                    }
                    (entry.path.clone(), fp)
                })
                .collect()
        });

        if let Some(ref callback) = self.config.progress {
            callback.on_phase_end(phase);
        }

        let mut fingerprints = HashMap::with_capacity(results.len());
        for (path, fp) in results {
            match fp {
                Some(fp) => {
                    stats.fingerprinted += 1;
                    fingerprints.insert(path, fp);
                }
                None => stats.absent += 1,
            }
        }

        stats.cache_hits = self.cache.hits() - hits_before;
        stats.cache_computations = self.cache.computations() - computations_before;

        log::info!(
            "Phase {}: {} fingerprinted, {} absent ({} cache hits)",
            phase,
            stats.fingerprinted,
            stats.absent,
            stats.cache_hits
        );

        (fingerprints, stats)
    }

    /// The engine's run-scoped cache.
    #[must_use]
    pub fn cache(&self) -> &FingerprintCache {
        &self.cache
    }
}
