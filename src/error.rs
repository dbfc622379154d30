//! Exit codes for the DupeSweep application.

use serde::Serialize;

/// Exit codes reported to the shell.
///
/// - 0: Completed normally, duplicates were found (whether or not
///   removal was confirmed)
/// - 1: General error (unexpected failure, bad roots)
/// - 2: Completed normally, no duplicates found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExitCode {
    /// Duplicates were found and handled.
    Success = 0,
    /// An unexpected error occurred.
    GeneralError = 1,
    /// The scan completed but found no duplicates.
    NoDuplicates = 2,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "DS000",
            Self::GeneralError => "DS001",
            Self::NoDuplicates => "DS002",
        }
    }
}
