//! Criterion benchmarks for the queue
//!
//! Two workloads: a push-then-drain churn compared against
//! `std::collections::BinaryHeap` (wrapped in `Reverse` to match min-first
//! order), and an update-heavy workload that re-keys every entry, which
//! the standard heap cannot express without rebuilding.
//!
//! ```bash
//! cargo bench --bench queue_perf
//! ```

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use indexed_pqueue::{Mode, PQueue};

fn random_keys(size: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.gen()).collect()
}

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");

    for &size in &[1_000usize, 10_000, 100_000] {
        let keys = random_keys(size, 0xC0FFEE);

        group.bench_with_input(
            BenchmarkId::new("indexed_pqueue", size),
            &keys,
            |b, keys| {
                b.iter(|| {
                    let mut pq = PQueue::with_capacity(Mode::Min, keys.len());
                    for &key in keys {
                        let _ = pq.insert(key, ());
                    }
                    while let Ok((key, ())) = pq.extract_top() {
                        black_box(key);
                    }
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("std_binary_heap", size),
            &keys,
            |b, keys| {
                b.iter(|| {
                    let mut heap = BinaryHeap::with_capacity(keys.len());
                    for &key in keys {
                        heap.push(Reverse(key));
                    }
                    while let Some(Reverse(key)) = heap.pop() {
                        black_box(key);
                    }
                })
            },
        );
    }

    group.finish();
}

fn bench_update_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_key");

    for &size in &[1_000usize, 10_000] {
        let keys = random_keys(size, 0xBEEF);

        group.bench_with_input(BenchmarkId::from_parameter(size), &keys, |b, keys| {
            b.iter(|| {
                let mut pq = PQueue::with_capacity(Mode::Min, keys.len());
                let handles: Vec<_> = keys
                    .iter()
                    .filter_map(|&key| pq.insert(key | (1 << 32), ()).ok())
                    .collect();

                // Promote every entry past the rest of the queue.
                for (i, &handle) in handles.iter().enumerate() {
                    let _ = pq.update_key(handle, i as u64);
                }
                black_box(pq.len());
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_push_pop, bench_update_key);
criterion_main!(benches);
