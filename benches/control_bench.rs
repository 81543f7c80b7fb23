//! Benchmark for the algebraic containers: Maybe, Either, Try and NonEmptyList.
//!
//! Measures map/bind chains and list construction.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use funk::collection::{NonEmptyList, unwrap_left};
use funk::control::{Either, Maybe, Try};
use std::hint::black_box;

// =============================================================================
// Maybe / Either Benchmarks
// =============================================================================

fn benchmark_maybe_map_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("maybe_map_chain");

    for depth in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let mut value = Maybe::some(0_u64);
                for step in 0..depth {
                    value = value.map(|x| x.wrapping_add(step));
                }
                black_box(value)
            });
        });
    }

    group.finish();
}

fn benchmark_either_bind_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("either_bind_chain");

    for depth in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let mut value: Either<&str, u64> = Either::Right(1);
                for step in 0..depth {
                    value = value.bind(|x| {
                        x.checked_add(step)
                            .map_or(Either::Left("overflow"), Either::Right)
                    });
                }
                black_box(value)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Try Benchmarks
// =============================================================================

fn benchmark_try_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("try_map");

    group.bench_function("success_chain", |bencher| {
        bencher.iter(|| {
            let mut value = Try::success(1_u64);
            for step in 0..100 {
                value = value.map(|x| x.wrapping_mul(3).wrapping_add(step));
            }
            black_box(value.or_default(0))
        });
    });

    group.bench_function("failure_passthrough", |bencher| {
        let failure: Try<u64> = Try::failure("benchmark failure");
        bencher.iter(|| {
            let mut value = failure.clone();
            for step in 0..100 {
                value = value.map(|x| x.wrapping_add(step));
            }
            black_box(value.is_failure())
        });
    });

    group.finish();
}

// =============================================================================
// NonEmptyList Benchmarks
// =============================================================================

fn benchmark_non_empty_list_create(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("non_empty_list_create");

    for size in [1, 100, 10_000] {
        group.bench_with_input(BenchmarkId::new("create", size), &size, |bencher, &size| {
            bencher.iter(|| black_box(NonEmptyList::create(0..size).map(|list| list.len())));
        });
        group.bench_with_input(BenchmarkId::new("new", size), &size, |bencher, &size| {
            bencher.iter(|| black_box(NonEmptyList::new(0, 1..size).len()));
        });
    }

    group.finish();
}

fn benchmark_unwrap_left(criterion: &mut Criterion) {
    let items: Vec<Either<u32, u32>> = (0..10_000)
        .map(|n| if n % 3 == 0 { Either::Right(n) } else { Either::Left(n) })
        .collect();

    criterion.bench_function("unwrap_left_10000", |bencher| {
        bencher.iter(|| black_box(unwrap_left(items.iter().copied()).sum::<u32>()));
    });
}

criterion_group!(
    benches,
    benchmark_maybe_map_chain,
    benchmark_either_bind_chain,
    benchmark_try_map,
    benchmark_non_empty_list_create,
    benchmark_unwrap_left
);

criterion_main!(benches);
