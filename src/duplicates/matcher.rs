//! Fingerprint-based duplicate matching.
//!
//! # Overview
//!
//! Matching is a two-step map construction:
//!
//! 1. [`build_reference_index`] maps each fingerprint seen in the
//!    reference tree to the FIRST reference path that produced it, in
//!    enumeration order. The walker sorts children by name, so this
//!    choice is stable across runs on the same tree even when the
//!    reference tree contains content-identical files.
//! 2. [`match_targets`] walks the target entries in enumeration order
//!    and reports every entry whose fingerprint appears in the index.
//!
//! Entries without a fingerprint never participate: they are absent from
//! both maps, so an unreadable reference file can never "match" an
//! unreadable target file.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::scanner::{Fingerprint, FsEntry};

/// A matched (reference, target) path pair sharing a fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicatePair {
    /// The retained reference-tree path for this fingerprint
    pub reference: PathBuf,
    /// The target-tree path sharing the fingerprint
    pub target: PathBuf,
}

/// Result of matching a target tree against the reference index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Matched pairs, in target enumeration order
    pub pairs: Vec<DuplicatePair>,
    /// Target paths eligible for removal, same order as `pairs`
    pub removal_candidates: Vec<PathBuf>,
}

impl MatchOutcome {
    /// Whether no duplicates were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Build the fingerprint-to-reference-path index.
///
/// Iterates reference entries in enumeration order; on a fingerprint
/// collision the first-seen path wins and later paths are logged at
/// debug level and ignored.
#[must_use]
pub fn build_reference_index(
    reference_entries: &[FsEntry],
    reference_fingerprints: &HashMap<PathBuf, Fingerprint>,
) -> HashMap<Fingerprint, PathBuf> {
    let mut index: HashMap<Fingerprint, PathBuf> =
        HashMap::with_capacity(reference_fingerprints.len());

    for entry in reference_entries {
        let Some(fp) = reference_fingerprints.get(&entry.path) else {
            continue;
        };
        match index.entry(*fp) {
            Entry::Vacant(vacant) => {
                vacant.insert(entry.path.clone());
            }
            Entry::Occupied(occupied) => {
                log::debug!(
                    "Reference tree carries identical content: {} (keeping {})",
                    entry.path.display(),
                    occupied.get().display()
                );
            }
        }
    }

    index
}

/// Match target entries against the reference index.
///
/// For each target entry whose fingerprint is present in the index, a
/// [`DuplicatePair`] is emitted and the target path becomes a removal
/// candidate. Output order equals target enumeration order.
#[must_use]
pub fn match_targets(
    index: &HashMap<Fingerprint, PathBuf>,
    target_entries: &[FsEntry],
    target_fingerprints: &HashMap<PathBuf, Fingerprint>,
) -> MatchOutcome {
    let mut outcome = MatchOutcome::default();

    for entry in target_entries {
        let Some(fp) = target_fingerprints.get(&entry.path) else {
            continue;
        };
        if let Some(reference) = index.get(fp) {
            log::debug!(
                "Duplicate: {} matches {}",
                entry.path.display(),
                reference.display()
            );
            outcome.pairs.push(DuplicatePair {
                reference: reference.clone(),
                target: entry.path.clone(),
            });
            outcome.removal_candidates.push(entry.path.clone());
        }
    }

    outcome
}
