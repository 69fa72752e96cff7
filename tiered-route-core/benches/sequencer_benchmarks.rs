//! Criterion benchmarks for the tiered sequencer.
//!
//! Greedy sequencing is quadratic in the number of stops; these benchmarks
//! track how a day's route scales across 50, 100 and 200 stops.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package tiered-route-core
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use tiered_route_core::build_route;


use bench_support::{BENCHMARK_DEPOT, BENCHMARK_SEED, generate_stops};

/// Stops per day to benchmark.
const PROBLEM_SIZES: &[usize] = &[50, 100, 200];

fn bench_build_route(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_route");

    for &size in PROBLEM_SIZES {
        let stops = generate_stops(size, BENCHMARK_SEED);

        #[expect(
            clippy::as_conversions,
            reason = "Safe conversion for small problem sizes"
        )]
        let throughput_size = size as u64;
        group.throughput(Throughput::Elements(throughput_size));
        group.bench_with_input(BenchmarkId::new("stops", size), &stops, |b, stops| {
            b.iter(|| build_route(black_box(BENCHMARK_DEPOT), black_box(stops)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_route);
criterion_main!(benches);
