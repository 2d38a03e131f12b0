//! Benchmarks for the Monte Carlo engine.
//!
//! Run with: cargo bench -p drawdown-risk

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use drawdown_core::{Market, Portfolio};
use drawdown_risk::{portfolio_value, EngineConfig, MonteCarloParams, RiskEngine};

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn create_market(n: usize) -> Market {
    let mut builder = Market::builder().seed(1);
    for i in 0..n {
        builder = builder.instrument(format!("SYM{i:04}"), 50.0 + (i % 200) as f64);
    }
    builder.build().unwrap()
}

fn create_portfolio(n: usize) -> Portfolio {
    let mut builder = Portfolio::builder();
    for i in 0..n {
        builder = builder.holding(format!("SYM{i:04}"), 10 + (i % 90) as u64);
    }
    builder.build().unwrap()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_valuation(c: &mut Criterion) {
    let mut group = c.benchmark_group("valuation");
    for size in [4, 64, 512] {
        let market = create_market(size);
        let portfolio = create_portfolio(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| portfolio_value(black_box(&portfolio), black_box(&market)).unwrap());
        });
    }
    group.finish();
}

fn bench_monte_carlo(c: &mut Criterion) {
    let market = create_market(4);
    let portfolio = create_portfolio(4);
    let mut group = c.benchmark_group("monte_carlo");

    for sims in [100, 1000, 10_000] {
        let params = MonteCarloParams::new(sims, 0.05);
        group.throughput(Throughput::Elements(sims as u64));

        let sequential = RiskEngine::new(EngineConfig::sequential().with_seed(7));
        group.bench_with_input(BenchmarkId::new("sequential", sims), &params, |b, p| {
            b.iter(|| sequential.monte_carlo(&portfolio, &market, black_box(p)).unwrap());
        });

        let parallel = RiskEngine::new(EngineConfig::new().with_seed(7).with_threshold(1));
        group.bench_with_input(BenchmarkId::new("parallel", sims), &params, |b, p| {
            b.iter(|| parallel.monte_carlo(&portfolio, &market, black_box(p)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_valuation, bench_monte_carlo);
criterion_main!(benches);
