//! Criterion benchmarks for the sampling primitives.
//!
//! Benchmarks cover:
//! - Uniform integer and float draws
//! - Normal and triangular variates
//! - Weighted selection and shuffling

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sampler_core::draw;

/// Benchmark scalar draws (the per-call cost of one variate).
fn bench_scalar_draws(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_draws");

    group.bench_function("uniform_between_i64", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| black_box(draw::uniform_between(-1_000_i64, 1_000, &mut rng)));
    });

    group.bench_function("probability_u8", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| black_box(draw::probability::<u8, _>(&mut rng)));
    });

    group.bench_function("uniform_f_f64", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| black_box(draw::uniform_f::<f64, _>(&mut rng)));
    });

    group.bench_function("normal_f64", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| black_box(draw::normal(0.0_f64, 1.0, &mut rng)));
    });

    group.bench_function("triangular_f64", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| black_box(draw::triangular(0.0_f64, 1.0, 0.5, &mut rng)));
    });

    group.finish();
}

/// Benchmark collection operations at a few sizes.
fn bench_collection_draws(c: &mut Criterion) {
    let mut group = c.benchmark_group("collection_draws");

    for size in [16_u32, 256, 4_096] {
        let items: Vec<u32> = (0..size).collect();
        let weights: Vec<f32> = (1..=size).map(|w| w as f32).collect();

        group.bench_with_input(BenchmarkId::new("pick", size), &items, |b, items| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| black_box(*draw::pick(items, &mut rng)));
        });

        group.bench_with_input(
            BenchmarkId::new("pick_weighted", size),
            &(weights, items.clone()),
            |b, (weights, items)| {
                let mut rng = StdRng::seed_from_u64(42);
                b.iter(|| black_box(*draw::pick_weighted(weights, items, &mut rng)));
            },
        );

        group.bench_with_input(BenchmarkId::new("shuffle", size), &items, |b, items| {
            let mut rng = StdRng::seed_from_u64(42);
            let mut deck = items.clone();
            b.iter(|| {
                draw::shuffle(&mut deck, &mut rng);
                black_box(deck[0])
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scalar_draws, bench_collection_draws);
criterion_main!(benches);
