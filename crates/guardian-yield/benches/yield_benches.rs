//! Criterion benchmarks for guardian-yield compute paths.
//!
//! Covers: simple yield, compound yield, capsule reward lookup and projections.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use guardian_yield::{calculate_compound_yield, TimeHorizon, YieldEngine};

fn bench_simple_yield(c: &mut Criterion) {
    let engine: YieldEngine = YieldEngine::default();

    c.bench_function("calculate_yield", |b| {
        b.iter(|| engine.calculate_yield(black_box("Creator"), black_box(1000.0), black_box(12.0)))
    });
}

fn bench_compound_yield(c: &mut Criterion) {
    c.bench_function("calculate_compound_yield", |b| {
        b.iter(|| {
            calculate_compound_yield(
                black_box(1000.0),
                black_box(0.12),
                black_box(12),
                black_box(5.0),
            )
        })
    });
}

fn bench_capsule_rewards(c: &mut Criterion) {
    let engine: YieldEngine = YieldEngine::default();

    c.bench_function("calculate_capsule_rewards", |b| {
        b.iter(|| engine.calculate_capsule_rewards(black_box(2_500.0)))
    });
}

fn bench_projection(c: &mut Criterion) {
    let engine: YieldEngine = YieldEngine::default();

    c.bench_function("calculate_projected_earnings", |b| {
        b.iter(|| {
            engine.calculate_projected_earnings(
                black_box(10_000.0),
                black_box("sovereign"),
                black_box(TimeHorizon::OneYear),
            )
        })
    });
}

criterion_group!(
    benches,
    bench_simple_yield,
    bench_compound_yield,
    bench_capsule_rewards,
    bench_projection,
);
criterion_main!(benches);
