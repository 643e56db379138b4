//! Benchmarks for the matching engine.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- find_match
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main,
    Criterion, BenchmarkId, Throughput, BatchSize
};
use std::time::Duration;

use bipartite_match::{CostMatrix, EntryQueue, MatchingEngine, PriorityEntry};

// ============================================================================
// HELPER FUNCTIONS - Deterministic matrix generation
// ============================================================================

/// Generate a deterministic cost matrix with uniform random integer costs
fn generate_matrix(n: usize, seed: u64) -> CostMatrix {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let rows: Vec<Vec<f64>> = (0..n)
        .map(|_| (0..n).map(|_| rng.gen_range(0..1_000) as f64).collect())
        .collect();
    CostMatrix::from_rows(&rows).expect("square matrix")
}

/// Matrix where every row prefers column 0, forcing long augmenting paths
fn generate_contended_matrix(n: usize) -> CostMatrix {
    let rows: Vec<Vec<f64>> = (0..n)
        .map(|i| (0..n).map(|j| (j * n + i) as f64).collect())
        .collect();
    CostMatrix::from_rows(&rows).expect("square matrix")
}

// ============================================================================
// BENCHMARK: find_match
// ============================================================================

fn bench_find_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_match");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(20);

    for &n in &[10usize, 50, 100, 200] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("uniform", n), &n, |b, &n| {
            let matrix = generate_matrix(n, 42);
            b.iter_batched(
                || MatchingEngine::new(matrix.clone()),
                |mut engine| black_box(engine.find_match()),
                BatchSize::SmallInput,
            );
        });
    }

    for &n in &[50usize, 100] {
        group.bench_with_input(BenchmarkId::new("contended", n), &n, |b, &n| {
            let matrix = generate_contended_matrix(n);
            b.iter_batched(
                || MatchingEngine::new(matrix.clone()),
                |mut engine| black_box(engine.find_match()),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Queue operations
// ============================================================================

fn bench_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("entry_queue");

    group.bench_function("push_relax_drain_1k", |b| {
        b.iter(|| {
            let mut queue = EntryQueue::with_capacity(1_000);
            let source = queue.push(PriorityEntry::source(0)).expect("push");
            for id in 1..1_000 {
                queue.push(PriorityEntry::unreached(id)).expect("push");
            }
            for id in (1..1_000).rev() {
                queue.relax(id, id as f64, source).expect("relax");
            }
            while let Some(key) = queue.pop_min() {
                black_box(key);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_find_match, bench_queue);
criterion_main!(benches);
