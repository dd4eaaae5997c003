//! Benchmark for mapset's `Set` vs the standard library `HashSet`.
//!
//! Compares insertion, membership probing and the algebraic operations for
//! common set sizes.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mapset::Set;
use std::collections::HashSet;
use std::hint::black_box;

// =============================================================================
// insert Benchmark
// =============================================================================

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert");

    for size in [1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("Set", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut set = Set::new();
                for index in 0..size {
                    set.insert(black_box(index));
                }
                set
            });
        });

        group.bench_with_input(
            BenchmarkId::new("std HashSet", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut set = HashSet::new();
                    for index in 0..size {
                        set.insert(black_box(index));
                    }
                    set
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// contains Benchmark
// =============================================================================

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("contains");

    for size in [1_000, 10_000] {
        let set: Set<i32> = (0..size).collect();
        let standard: HashSet<i32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("Set", size), &size, |bencher, &size| {
            bencher.iter(|| {
                for index in 0..size {
                    black_box(set.contains(&index));
                }
            });
        });

        group.bench_with_input(
            BenchmarkId::new("std HashSet", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    for index in 0..size {
                        black_box(standard.contains(&index));
                    }
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// algebra Benchmark
// =============================================================================

fn benchmark_algebra(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("algebra");

    for size in [1_000, 10_000] {
        // Half-overlapping operands
        let a: Set<i32> = (0..size).collect();
        let b: Set<i32> = (size / 2..size + size / 2).collect();

        group.bench_with_input(BenchmarkId::new("union", size), &size, |bencher, _| {
            bencher.iter(|| black_box(&a).union(black_box(&b)));
        });

        group.bench_with_input(
            BenchmarkId::new("intersection", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(&a).intersection(black_box(&b)));
            },
        );

        group.bench_with_input(BenchmarkId::new("difference", size), &size, |bencher, _| {
            bencher.iter(|| black_box(&a).difference(black_box(&b)));
        });

        group.bench_with_input(
            BenchmarkId::new("symmetric_difference", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(&a).symmetric_difference(black_box(&b)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_contains,
    benchmark_algebra
);
criterion_main!(benches);
