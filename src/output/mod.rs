//! Output formatting for scan results.
//!
//! This module provides:
//! - [`text`]: report files (`duplicates.txt`, `removed.txt`) and the
//!   human-readable stdout summary
//! - [`json`]: a machine-readable run report for `--output json`

pub mod json;
pub mod text;
