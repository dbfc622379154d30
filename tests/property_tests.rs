//! Property-based tests for the hashing modes.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use dupesweep::scanner::{HashMode, Hasher, FAST_PREFIX_LEN};
use proptest::prelude::*;
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, content: &[u8]) -> std::path::PathBuf {
    let path = dir.join(name);
    File::create(&path).unwrap().write_all(content).unwrap();
    path
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Fast mode compares equal whenever the first 8 KiB agree, no
    /// matter what the tails hold.
    #[test]
    fn fast_mode_ignores_tails(
        seed in any::<u8>(),
        tail_a in proptest::collection::vec(any::<u8>(), 1..512),
        tail_b in proptest::collection::vec(any::<u8>(), 1..512),
    ) {
        let dir = TempDir::new().unwrap();
        let prefix = vec![seed; FAST_PREFIX_LEN];

        let mut content_a = prefix.clone();
        content_a.extend_from_slice(&tail_a);
        let mut content_b = prefix;
        content_b.extend_from_slice(&tail_b);

        let a = write_file(dir.path(), "a.bin", &content_a);
        let b = write_file(dir.path(), "b.bin", &content_b);

        let hasher = Hasher::new();
        prop_assert_eq!(
            hasher.fingerprint(&a, HashMode::Fast),
            hasher.fingerprint(&b, HashMode::Fast)
        );
    }

    /// Full mode distinguishes files whose tails differ.
    #[test]
    fn full_mode_sees_tails(
        seed in any::<u8>(),
        tail_a in proptest::collection::vec(any::<u8>(), 1..512),
        tail_b in proptest::collection::vec(any::<u8>(), 1..512),
    ) {
        prop_assume!(tail_a != tail_b);

        let dir = TempDir::new().unwrap();
        let prefix = vec![seed; FAST_PREFIX_LEN];

        let mut content_a = prefix.clone();
        content_a.extend_from_slice(&tail_a);
        let mut content_b = prefix;
        content_b.extend_from_slice(&tail_b);

        let a = write_file(dir.path(), "a.bin", &content_a);
        let b = write_file(dir.path(), "b.bin", &content_b);

        let hasher = Hasher::new();
        prop_assert_ne!(
            hasher.fingerprint(&a, HashMode::Full),
            hasher.fingerprint(&b, HashMode::Full)
        );
    }

    /// Both modes are deterministic for unchanged content.
    #[test]
    fn fingerprints_are_idempotent(content in proptest::collection::vec(any::<u8>(), 0..4096)) {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "f.bin", &content);

        let hasher = Hasher::new();
        for mode in [HashMode::Fast, HashMode::Full] {
            let first = hasher.fingerprint(&path, mode);
            let second = hasher.fingerprint(&path, mode);
            prop_assert!(first.is_some());
            prop_assert_eq!(first, second);
        }
    }

    /// Files shorter than the prefix hash identically in both modes.
    #[test]
    fn short_files_agree_across_modes(content in proptest::collection::vec(any::<u8>(), 0..FAST_PREFIX_LEN)) {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "short.bin", &content);

        let hasher = Hasher::new();
        prop_assert_eq!(
            hasher.fingerprint(&path, HashMode::Fast),
            hasher.fingerprint(&path, HashMode::Full)
        );
    }
}
