//! Exclusion-rule tests: pruned subtrees never surface, hidden names
//! are discovered but never fingerprinted.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use dupesweep::duplicates::{build_reference_index, match_targets, EngineConfig, FingerprintEngine};
use dupesweep::scanner::{FsEntry, Walker};
use tempfile::TempDir;

fn write_file(path: &Path, content: &[u8]) {
    File::create(path).unwrap().write_all(content).unwrap();
}

#[test]
fn test_backup_catalog_never_enumerated() {
    let dir = TempDir::new().unwrap();

    write_file(&dir.path().join("normal.txt"), b"normal");

    let catalog = dir.path().join("Backups.backupdb").join("Mac").join("2024");
    fs::create_dir_all(&catalog).unwrap();
    write_file(&catalog.join("would-match.txt"), b"normal");

    let entries: Vec<FsEntry> = Walker::new(dir.path()).walk().collect();

    assert!(entries.iter().all(|e| !e
        .path
        .components()
        .any(|c| c.as_os_str() == "Backups.backupdb")));
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_event_journal_never_enumerated() {
    let dir = TempDir::new().unwrap();

    write_file(&dir.path().join("normal.txt"), b"normal");

    let journal = dir.path().join(".fseventsd");
    fs::create_dir(&journal).unwrap();
    write_file(&journal.join("0000abcd"), b"journal data");

    let entries: Vec<FsEntry> = Walker::new(dir.path()).walk().collect();

    assert!(entries
        .iter()
        .all(|e| !e.path.components().any(|c| c.as_os_str() == ".fseventsd")));
}

#[test]
fn test_backup_catalog_content_never_matches() {
    let reference = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();

    write_file(&reference.path().join("original.txt"), b"protected content");

    // The only matching content in the target sits inside a backup catalog
    let catalog = target.path().join("Backups.backupdb");
    fs::create_dir(&catalog).unwrap();
    write_file(&catalog.join("copy.txt"), b"protected content");

    let reference_entries: Vec<FsEntry> = Walker::new(reference.path()).walk().collect();
    let target_entries: Vec<FsEntry> = Walker::new(target.path()).walk().collect();

    let engine = FingerprintEngine::new(EngineConfig::default()).unwrap();
    let (reference_fps, _) = engine.fingerprint_all("reference", &reference_entries);
    let (target_fps, _) = engine.fingerprint_all("target", &target_entries);

    let index = build_reference_index(&reference_entries, &reference_fps);
    let outcome = match_targets(&index, &target_entries, &target_fps);

    assert!(outcome.is_empty());
    assert!(catalog.join("copy.txt").exists());
}

#[test]
fn test_hidden_files_enumerated_but_not_fingerprinted() {
    let dir = TempDir::new().unwrap();

    write_file(&dir.path().join(".DS_Store"), b"metadata");
    write_file(&dir.path().join("visible.txt"), b"content");

    let entries: Vec<FsEntry> = Walker::new(dir.path()).walk().collect();

    // Discovery sees the hidden file
    assert!(entries
        .iter()
        .any(|e| e.path.file_name().is_some_and(|n| n == ".DS_Store")));

    // Fingerprinting refuses it
    let engine = FingerprintEngine::new(EngineConfig::default()).unwrap();
    let (fingerprints, stats) = engine.fingerprint_all("test", &entries);

    assert_eq!(stats.fingerprinted, 1);
    assert!(fingerprints.keys().all(|p| p.ends_with("visible.txt")));
}

#[test]
fn test_visible_content_inside_hidden_directory_is_discovered() {
    let dir = TempDir::new().unwrap();

    let hidden_dir = dir.path().join(".config");
    fs::create_dir(&hidden_dir).unwrap();
    write_file(&hidden_dir.join("settings.toml"), b"key = 1");

    let entries: Vec<FsEntry> = Walker::new(dir.path()).walk().collect();

    // Descent happened even though the directory name is hidden
    assert!(entries
        .iter()
        .any(|e| e.path.file_name().is_some_and(|n| n == "settings.toml")));
}
