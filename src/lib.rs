//! DupeSweep - Reference-Aware Duplicate Sweeper
//!
//! A cross-platform Rust CLI that fingerprints a reference tree and a
//! target tree (BLAKE3), reports target files whose content already
//! exists in the reference tree, and optionally deletes them together
//! with any directories the deletion leaves empty.

pub mod actions;
pub mod app;
pub mod cache;
pub mod cli;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod progress;
pub mod scanner;

pub use app::run_app;
