//! Exclusion predicates for filesystem entries.
//!
//! Two predicates with different jobs:
//! - [`is_excluded`] decides whether an entry gets a fingerprint at all.
//! - [`prunes_descent`] decides whether the walker descends into a subtree.
//!
//! Hidden names are excluded from hashing but NOT pruned during descent:
//! hidden directories are still walked for discovery, so their visible
//! contents can be evaluated. Backup catalogs, snapshot mounts, and event
//! journals are pruned outright, which bounds traversal cost on volumes
//! carrying large backup histories.

use std::path::Path;

/// Directory name of macOS Time Machine backup catalogs.
pub const BACKUP_CATALOG_DIR: &str = "Backups.backupdb";

/// Mount namespace under which local Time Machine snapshots appear.
pub const SNAPSHOT_MOUNT_PREFIX: &str = "/Volumes/.timemachine";

/// Directory name of the filesystem event journal.
pub const EVENT_JOURNAL_DIR: &str = ".fseventsd";

/// Name prefix of AppleDouble metadata files.
pub const APPLE_METADATA_PREFIX: &str = "._";

/// Check whether any path component equals `name`.
fn has_component(path: &Path, name: &str) -> bool {
    path.components().any(|c| c.as_os_str() == name)
}

/// Base name of the path, lossily converted for prefix checks.
fn base_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

/// Decide whether an entry is excluded from fingerprinting.
///
/// Rules, in order, any match means excluded:
/// 1. any path component equals the backup catalog name;
/// 2. the path lies under the snapshot mount namespace;
/// 3. any path component equals the event journal name (covering the
///    journal itself and every entry inside it);
/// 4. the base name begins with `.` (hidden).
///
/// Pure predicate, no I/O.
#[must_use]
pub fn is_excluded(path: &Path) -> bool {
    if has_component(path, BACKUP_CATALOG_DIR) {
        return true;
    }
    if path.starts_with(SNAPSHOT_MOUNT_PREFIX) {
        return true;
    }
    if has_component(path, EVENT_JOURNAL_DIR) {
        return true;
    }
    base_name(path).is_some_and(|name| name.starts_with('.'))
}

/// Decide whether the walker should skip a whole subtree before descending.
///
/// A subset of [`is_excluded`]: backup catalogs, the snapshot mount
/// namespace, event journals, and AppleDouble `._` names. General hidden
/// names are deliberately not in this set, so hidden directories are
/// still walked for discovery.
#[must_use]
pub fn prunes_descent(path: &Path) -> bool {
    if has_component(path, BACKUP_CATALOG_DIR) {
        return true;
    }
    if path.starts_with(SNAPSHOT_MOUNT_PREFIX) {
        return true;
    }
    if has_component(path, EVENT_JOURNAL_DIR) {
        return true;
    }
    base_name(path).is_some_and(|name| name.starts_with(APPLE_METADATA_PREFIX))
}
