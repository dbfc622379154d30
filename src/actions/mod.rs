//! Removal planning and execution.
//!
//! Planning ([`plan`]) is pure: candidates and target entries in, a
//! [`RemovalPlan`] out, no filesystem access. Execution ([`remove`]) is
//! a separate step gated by an externally supplied [`RemovalDecision`],
//! so the pipeline is testable without simulating interactive input.

pub mod plan;
pub mod remove;

pub use plan::{plan_removal, RemovalDecision, RemovalPlan};
pub use remove::{execute_removal, RemovalOutcome};
