//! Criterion benchmarks for futopt_models.
//!
//! Measures Black-76 pricing, the full Greeks set and implied volatility.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use futopt_models::analytical::{Black76, ImpliedVolSolver};
use futopt_models::instruments::OptionType;

/// Benchmark rounded prices and Greeks for a single option.
fn bench_pricing(c: &mut Criterion) {
    let model = Black76::new(300.0_f64, 350.0, 0.2, 0.55, 0.05);

    c.bench_function("black76_price_call", |b| {
        b.iter(|| black_box(model).price_call(black_box(2)));
    });
    c.bench_function("black76_price_put", |b| {
        b.iter(|| black_box(model).price_put(black_box(2)));
    });
    c.bench_function("black76_greeks", |b| {
        b.iter(|| black_box(model).greeks(OptionType::Call, black_box(365)));
    });
}

/// Benchmark implied volatility across volatility levels.
fn bench_implied_volatility(c: &mut Criterion) {
    let mut group = c.benchmark_group("implied_volatility");
    let solver = ImpliedVolSolver::bounded(0.02_f64, 100);

    for vol in [0.1_f64, 0.25, 0.4, 0.6] {
        let premium = Black76::new(100.0, 100.0, vol, 1.0, 0.03).price_call(2);
        group.bench_with_input(BenchmarkId::new("call", vol), &premium, |b, &premium| {
            b.iter(|| {
                solver
                    .solve(OptionType::Call, black_box(premium), 100.0, 100.0, 1.0, 0.03)
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pricing, bench_implied_volatility);
criterion_main!(benches);
