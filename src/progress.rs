//! Progress reporting utilities using indicatif.
//!
//! This module provides the [`Progress`] struct which implements
//! [`ProgressCallback`] to display a progress bar per fingerprinting
//! phase ("reference" and "target").

use std::sync::Mutex;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

/// Progress callback for fingerprinting phases.
///
/// Implement this trait to receive progress updates from the
/// [`FingerprintEngine`](crate::duplicates::FingerprintEngine).
pub trait ProgressCallback: Send + Sync {
    /// Called when a phase starts.
    ///
    /// # Arguments
    ///
    /// * `phase` - Name of the phase (e.g., "reference", "target")
    /// * `total` - Total number of entries to process
    fn on_phase_start(&self, phase: &str, total: usize);

    /// Called for each processed entry.
    ///
    /// # Arguments
    ///
    /// * `current` - Number of entries processed so far
    /// * `path` - Path just processed
    fn on_progress(&self, current: usize, path: &str);

    /// Called when a phase completes.
    fn on_phase_end(&self, phase: &str);
}

/// Progress reporter using indicatif.
///
/// One bar is active at a time; phases run back to back.
pub struct Progress {
    multi: MultiProgress,
    active: Mutex<Option<ProgressBar>>,
    quiet: bool,
}

impl Progress {
    /// Create a new progress reporter.
    ///
    /// # Arguments
    ///
    /// * `quiet` - If true, no progress bars will be displayed.
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self {
            multi: MultiProgress::new(),
            active: Mutex::new(None),
            quiet,
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template(
            "[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█>-")
    }
}

impl ProgressCallback for Progress {
    fn on_phase_start(&self, phase: &str, total: usize) {
        if self.quiet {
            return;
        }

        let pb = self.multi.add(ProgressBar::new(total as u64));
        pb.set_style(Self::bar_style());
        pb.set_message(format!("Hashing {phase} tree"));
        *self.active.lock().unwrap() = Some(pb);
    }

    fn on_progress(&self, current: usize, path: &str) {
        if self.quiet {
            return;
        }

        if let Some(ref pb) = *self.active.lock().unwrap() {
            pb.set_position(current as u64);
            pb.set_message(truncate_path(path, 30));
        }
    }

    fn on_phase_end(&self, phase: &str) {
        if self.quiet {
            return;
        }

        if let Some(pb) = self.active.lock().unwrap().take() {
            pb.finish_with_message(format!("{phase} tree hashed"));
        }
    }
}

/// Truncate a path for display in the progress bar.
fn truncate_path(path: &str, max_len: usize) -> String {
    if path.len() <= max_len {
        return path.to_string();
    }

    let file_name = std::path::Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    if file_name.len() >= max_len {
        return format!("...{}", &file_name[file_name.len() - max_len + 3..]);
    }

    format!(".../{}", file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_path() {
        assert_eq!(truncate_path("short.txt", 30), "short.txt");
    }

    #[test]
    fn test_truncate_long_path_keeps_file_name() {
        let path = "/a/very/long/directory/chain/that/keeps/going/file.txt";
        assert_eq!(truncate_path(path, 30), ".../file.txt");
    }

    #[test]
    fn test_quiet_progress_is_inert() {
        let progress = Progress::new(true);
        progress.on_phase_start("reference", 10);
        progress.on_progress(1, "/some/path");
        progress.on_phase_end("reference");
        assert!(progress.active.lock().unwrap().is_none());
    }
}
