//! Benchmarks for the call sequence generator
//!
//! Measures:
//! - Seeding cost
//! - Single-value throughput
//! - Pair throughput at simulation scale

use callnet_sequence::{LaggedFibonacci, SeedCoefficients};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_seeding(c: &mut Criterion) {
    c.bench_function("seed_ring", |b| {
        b.iter(|| LaggedFibonacci::with_coefficients(black_box(SeedCoefficients::CANONICAL)))
    });
}

fn bench_draws(c: &mut Criterion) {
    let mut group = c.benchmark_group("draws");

    for &count in &[1_000u64, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(count));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &n| {
            b.iter(|| {
                let mut g = LaggedFibonacci::new();
                let mut acc = 0u64;
                for _ in 0..n {
                    acc = acc.wrapping_add(u64::from(g.next_value()));
                }
                black_box(acc)
            })
        });
    }
    group.finish();
}

fn bench_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairs");
    group.sample_size(20);

    let count = 2_500_000u64;
    group.throughput(Throughput::Elements(count));
    group.bench_function("simulation_scale", |b| {
        b.iter(|| {
            let mut g = LaggedFibonacci::new();
            let mut self_calls = 0u64;
            for _ in 0..count {
                let (caller, called) = g.next_pair();
                if caller == called {
                    self_calls += 1;
                }
            }
            black_box(self_calls)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_seeding, bench_draws, bench_pairs);
criterion_main!(benches);
