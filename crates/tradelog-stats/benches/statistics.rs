//! Benchmarks for the statistics engine.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tradelog_stats::{cumulative_returns, longest_profit_loss_streak, max_drawdown};

fn generate_test_returns(size: usize) -> Vec<f64> {
    (0..size).map(|i| (i as f64 * 0.7).sin() * 0.03).collect()
}

fn benchmark_cumulative_returns(c: &mut Criterion) {
    let mut group = c.benchmark_group("CumulativeReturns");

    for size in [1000, 10000, 100000].iter() {
        let data = generate_test_returns(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| cumulative_returns(black_box(data)))
        });
    }

    group.finish();
}

fn benchmark_max_drawdown(c: &mut Criterion) {
    let mut group = c.benchmark_group("MaxDrawdown");

    for size in [1000, 10000, 100000].iter() {
        let curve = cumulative_returns(&generate_test_returns(*size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &curve, |b, curve| {
            b.iter(|| max_drawdown(black_box(curve)))
        });
    }

    group.finish();
}

fn benchmark_streaks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Streaks");

    for size in [1000, 10000, 100000].iter() {
        let data = generate_test_returns(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| longest_profit_loss_streak(black_box(data)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_cumulative_returns,
    benchmark_max_drawdown,
    benchmark_streaks
);
criterion_main!(benches);
