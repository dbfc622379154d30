//! Duplicate detection pipeline.
//!
//! This module provides:
//! - Concurrent fingerprinting of enumerated entries ([`engine`])
//! - Fingerprint-based matching of target entries against a reference
//!   index ([`matcher`])

pub mod engine;
pub mod matcher;

pub use engine::{EngineConfig, EngineError, FingerprintEngine, FingerprintStats};
pub use matcher::{build_reference_index, match_targets, DuplicatePair, MatchOutcome};
