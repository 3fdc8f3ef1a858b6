//! Benchmarks for histogram construction and mode-centered merging

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gof_histogram::{merge_bins, pair_edges, recompute_histogram, MergeDirection};

/// Deterministic bell-shaped sample
fn generate_test_data(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| {
            let u = (i as f64 + 0.5) / size as f64;
            (u * 12.0 - 6.0).tanh() * 3.0
        })
        .collect()
}

fn bench_merge_bins(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_bins");

    for &num_bins in &[10usize, 100, 1000] {
        let counts: Vec<usize> = (0..num_bins).map(|i| (i * 7 + 3) % 9).collect();
        let edges: Vec<f64> = (0..=num_bins).map(|i| i as f64).collect();
        let bins = pair_edges(&edges).unwrap();

        group.bench_with_input(BenchmarkId::new("reverse", num_bins), &num_bins, |b, _| {
            b.iter(|| merge_bins(black_box(&counts), black_box(&bins), 5, MergeDirection::Reverse))
        });
    }

    group.finish();
}

fn bench_recompute_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("recompute_histogram");

    for &size in &[1_000usize, 10_000, 100_000] {
        let data = generate_test_data(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| recompute_histogram(black_box(&data), 10, 5))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_merge_bins, bench_recompute_histogram);
criterion_main!(benches);
