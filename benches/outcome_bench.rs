//! Benchmark for the core Outcome combinators.
//!
//! Measures the hot paths: transformation chains, the attempt! macro, and
//! the capture boundary.

use criterion::{Criterion, criterion_group, criterion_main};
use outcome::{Outcome, attempt};
use std::hint::black_box;

// =============================================================================
// Combinator Chains
// =============================================================================

fn benchmark_combinator_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("combinator_chain");

    group.bench_function("map_and_then_ok", |bencher| {
        bencher.iter(|| {
            let outcome: Outcome<i32, String> = Outcome::Ok(black_box(1));
            let result = outcome
                .map(|n| n + 1)
                .and_then(|n| Outcome::Ok(n * 2))
                .map(|n| n - 1);
            black_box(result)
        });
    });

    group.bench_function("map_and_then_err", |bencher| {
        bencher.iter(|| {
            let outcome: Outcome<i32, String> = Outcome::Err(black_box("gone".to_string()));
            let result = outcome
                .map(|n| n + 1)
                .and_then(|n| Outcome::Ok(n * 2))
                .map(|n| n - 1);
            black_box(result)
        });
    });

    group.finish();
}

// =============================================================================
// attempt! Macro
// =============================================================================

fn benchmark_attempt_macro(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("attempt_macro");

    group.bench_function("three_binds", |bencher| {
        bencher.iter(|| {
            let result: Outcome<i32, String> = attempt! {
                x <= Outcome::<i32, String>::Ok(black_box(1));
                y <= Outcome::<i32, String>::Ok(x + 1);
                z <= Outcome::<i32, String>::Ok(y + 1);
                yield x + y + z
            };
            black_box(result)
        });
    });

    group.bench_function("early_failure", |bencher| {
        bencher.iter(|| {
            let result: Outcome<i32, String> = attempt! {
                x <= Outcome::<i32, String>::Err(black_box("gone".to_string()));
                y <= Outcome::<i32, String>::Ok(x + 1);
                yield x + y
            };
            black_box(result)
        });
    });

    group.finish();
}

// =============================================================================
// Capture Boundary
// =============================================================================

fn benchmark_catch(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("catch");

    group.bench_function("success_path", |bencher| {
        bencher.iter(|| {
            let outcome = Outcome::catch(|| black_box(42));
            black_box(outcome.ok())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_combinator_chain,
    benchmark_attempt_macro,
    benchmark_catch
);
criterion_main!(benches);
