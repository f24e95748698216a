//! Fuzzification benchmarks.
//!
//! Benchmarks: full price-to-transaction pass at growing table sizes.
//! Run with: cargo bench -p comove-fuzzy --bench fuzzify_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use comove_fuzzy::fuzzify_prices;
use test_fixtures::random_walk_prices;

fn fuzzify_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("fuzzify");

    for (commodities, periods) in [(10, 60), (50, 120), (200, 240)] {
        let prices = random_walk_prices(commodities, periods, 42);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{commodities}x{periods}")),
            &prices,
            |b, prices| {
                b.iter(|| fuzzify_prices(prices).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, fuzzify_by_size);
criterion_main!(benches);
