//! Benchmarks for index operations.
//!
//! Run with: cargo bench --bench index_benchmarks

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use notebag::domain::filter_and_sort;
use notebag::index::NoteIndex;
use std::hint::black_box;
use tempfile::TempDir;

// =============================================================================
// Test Data Generation
// =============================================================================

/// Words combined into note names
const WORDS: &[&str] = &[
    "Shopping", "list", "Meeting", "notes", "Recipe", "ideas", "Trip", "plan", "Budget",
    "journal", "Reading", "project", "Garden", "todo", "Birthday", "gifts",
];

const SIZES: &[usize] = &[100, 1000, 10000];

/// Builds a deterministic note name for index `i`.
fn note_name(i: usize) -> String {
    let first = WORDS[i % WORDS.len()];
    let second = WORDS[(i / WORDS.len()) % WORDS.len()];
    format!("{} {} {}", first, second, i)
}

fn build_index(count: usize) -> NoteIndex {
    (0..count)
        .map(|i| {
            let name = note_name(i);
            let filename = format!("{}.txt", name);
            (name, filename)
        })
        .collect()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_filter_and_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_and_sort");

    for &size in SIZES {
        let index = build_index(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("all", size), &index, |b, index| {
            b.iter(|| filter_and_sort(index.names(), black_box("")));
        });
        group.bench_with_input(BenchmarkId::new("search", size), &index, |b, index| {
            b.iter(|| filter_and_sort(index.names(), black_box("plan")));
        });
    }

    group.finish();
}

fn bench_checksum(c: &mut Criterion) {
    let mut group = c.benchmark_group("checksum");

    for &size in SIZES {
        let index = build_index(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("notes", size), &index, |b, index| {
            b.iter(|| black_box(index.checksum()));
        });
    }

    group.finish();
}

fn bench_save_and_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("save_and_load");

    for &size in SIZES {
        let index = build_index(size);
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("NoteBag.index");
        index.save(&path).unwrap();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("save", size), &index, |b, index| {
            b.iter(|| index.save(&path).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("load", size), &path, |b, path| {
            b.iter(|| black_box(NoteIndex::load(path).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_filter_and_sort,
    bench_checksum,
    bench_save_and_load
);
criterion_main!(benches);
