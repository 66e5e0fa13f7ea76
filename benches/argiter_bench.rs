//! Throughput of the index helpers on a pseudo-random workload

use argitertools::{argmax, args_match, argsequal, argsort, MatchMode};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn workload(len: usize) -> Vec<i64> {
    (0..len as i64).map(|i| (i * 48_271) % 2_003 - 1_001).collect()
}

fn benchmark_index_helpers(c: &mut Criterion) {
    let values = workload(100_000);

    c.bench_function("argmax_n=100000", |b| {
        b.iter(|| argmax(black_box(&values)))
    });

    c.bench_function("argsort_n=100000", |b| {
        b.iter(|| argsort(black_box(&values)))
    });

    c.bench_function("argsequal_n=100000", |b| {
        b.iter(|| argsequal(black_box(&values)).len())
    });

    c.bench_function("args_match_negate_n=100000", |b| {
        b.iter(|| {
            args_match(black_box(&values).iter().copied(), |v| -v, MatchMode::OnlyMatches).len()
        })
    });
}

criterion_group!(benches, benchmark_index_helpers);
criterion_main!(benches);
