use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dupesweep::duplicates::{EngineConfig, FingerprintEngine};
use dupesweep::scanner::{FsEntry, HashMode, Hasher, Walker};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// Helper to create a directory tree with duplicated content
fn setup_test_dir(depth: usize, files_per_dir: usize) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    create_dir_recursive(temp_dir.path().to_path_buf(), depth, files_per_dir);
    temp_dir
}

fn create_dir_recursive(path: PathBuf, depth: usize, files_per_dir: usize) {
    if depth == 0 {
        return;
    }

    if !path.exists() {
        fs::create_dir_all(&path).expect("Failed to create dir");
    }

    for i in 0..files_per_dir {
        let file_path = path.join(format!("file_{}.txt", i));
        fs::write(file_path, format!("content variant {}", i % 3)).expect("Failed to write file");
    }

    if depth > 1 {
        for i in 0..2 {
            // 2 subdirectories per level
            let sub_dir = path.join(format!("dir_{}", i));
            create_dir_recursive(sub_dir, depth - 1, files_per_dir);
        }
    }
}

// 1. Walker benchmark
fn bench_walker(c: &mut Criterion) {
    let temp_dir = setup_test_dir(4, 10); // roughly 150 entries

    c.bench_function("walker_150_entries", |b| {
        b.iter(|| {
            let walker = Walker::new(temp_dir.path());
            let entries: Vec<_> = walker.walk().collect();
            black_box(entries);
        })
    });
}

// 2. Fast vs full hashing across file sizes
fn bench_hasher(c: &mut Criterion) {
    let mut group = c.benchmark_group("hasher");
    let hasher = Hasher::new();

    for size_kb in [1, 64, 1024, 10240] {
        // 1KB, 64KB, 1MB, 10MB
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("bench_file.bin");
        let data = vec![0xABu8; size_kb * 1024];
        fs::write(&file_path, &data).unwrap();

        group.bench_function(format!("fast_{}kb", size_kb), |b| {
            b.iter(|| black_box(hasher.fingerprint(&file_path, HashMode::Fast)))
        });
        group.bench_function(format!("full_{}kb", size_kb), |b| {
            b.iter(|| black_box(hasher.fingerprint(&file_path, HashMode::Full)))
        });
    }

    group.finish();
}

// 3. Engine throughput at different thread counts
fn bench_engine(c: &mut Criterion) {
    let temp_dir = setup_test_dir(3, 20);
    let entries: Vec<FsEntry> = Walker::new(temp_dir.path()).walk().collect();

    let mut group = c.benchmark_group("engine");
    for threads in [1, 4] {
        group.bench_function(format!("fingerprint_all_{}threads", threads), |b| {
            b.iter(|| {
                // Fresh engine per iteration so the cache never warms
                let engine =
                    FingerprintEngine::new(EngineConfig::default().with_threads(threads)).unwrap();
                black_box(engine.fingerprint_all("bench", &entries));
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_walker, bench_hasher, bench_engine);
criterion_main!(benches);
