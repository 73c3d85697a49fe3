//! Criterion benchmarks for the partition test and its range queries.
//! Sizes follow the generator families: staircase and scattered up to ~10^4
//! rectangles, nested strips kept small (quadratic cut sequence).
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use guillotine::api::{
    nested_strips, scattered, staircase, BoundAggregate, PartitionTester, ScatteredParams,
    SplitStrategy, StaircaseParams,
};

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");
    group.sample_size(20);
    for &n in &[100usize, 1_000, 10_000] {
        let rects = staircase(
            StaircaseParams {
                count: n,
                max_step: 10,
            },
            43,
        )
        .unwrap();
        for strategy in SplitStrategy::ALL {
            let tester = PartitionTester::with_strategy(strategy);
            group.bench_with_input(
                BenchmarkId::new(format!("staircase/{strategy:?}"), n),
                &rects,
                |b, rects| b.iter(|| tester.verdict(rects)),
            );
        }
    }
    for &tiles in &[2usize, 5, 10] {
        let params = ScatteredParams {
            tiles,
            ..ScatteredParams::default()
        };
        let rects = scattered(params, 44).unwrap();
        for strategy in SplitStrategy::ALL {
            let tester = PartitionTester::with_strategy(strategy);
            group.bench_with_input(
                BenchmarkId::new(format!("scattered/{strategy:?}"), rects.len()),
                &rects,
                |b, rects| b.iter(|| tester.verdict(rects)),
            );
        }
    }
    for &count in &[100usize, 500] {
        let rects = nested_strips(count, 100_000).unwrap();
        for strategy in SplitStrategy::ALL {
            let tester = PartitionTester::with_strategy(strategy);
            group.bench_with_input(
                BenchmarkId::new(format!("strips/{strategy:?}"), rects.len()),
                &rects,
                |b, rects| b.iter(|| tester.verdict(rects)),
            );
        }
    }
    group.finish();
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    for &n in &[1_000usize, 10_000, 100_000] {
        let rects = staircase(
            StaircaseParams {
                count: n,
                max_step: 10,
            },
            45,
        )
        .unwrap();
        group.bench_with_input(BenchmarkId::new("build", n), &rects, |b, rects| {
            b.iter(|| BoundAggregate::build(rects))
        });
        group.bench_with_input(BenchmarkId::new("query_prefixes", n), &n, |b, &n| {
            b.iter_batched(
                || BoundAggregate::build(&rects),
                |agg| {
                    let mut acc = 0i64;
                    for i in (0..n).step_by(97) {
                        acc ^= agg.query(0, i).hi(guillotine::Axis::X).unwrap_or(0);
                    }
                    acc
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_partition, bench_aggregate);
criterion_main!(benches);
