//! Benchmarks for the stable log-space combinators

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use logtypes_core::{log_no_fp_error, logaddexp, logsubexp};

fn bench_logaddexp(c: &mut Criterion) {
    c.bench_function("logaddexp", |b| {
        b.iter(|| logaddexp(black_box(-1200.0), black_box(-1210.0)))
    });
}

fn bench_logaddexp_neg_infinity(c: &mut Criterion) {
    c.bench_function("logaddexp_neg_infinity", |b| {
        b.iter(|| logaddexp(black_box(f64::NEG_INFINITY), black_box(3.5)))
    });
}

fn bench_logsubexp(c: &mut Criterion) {
    c.bench_function("logsubexp", |b| {
        b.iter(|| logsubexp(black_box(-1200.0), black_box(-1210.0)))
    });
}

fn bench_naive_log_sum(c: &mut Criterion) {
    // Reference point: the unstable formula
    c.bench_function("naive_log_sum", |b| {
        b.iter(|| (black_box(-12.0f64).exp() + black_box(-12.1f64).exp()).ln())
    });
}

fn bench_log_no_fp_error(c: &mut Criterion) {
    c.bench_function("log_no_fp_error", |b| {
        let mut i = 0u32;
        b.iter(|| {
            i = i.wrapping_add(1);
            log_no_fp_error(black_box(i as f64 - 8.0))
        })
    });
}

criterion_group!(
    benches,
    bench_logaddexp,
    bench_logaddexp_neg_infinity,
    bench_logsubexp,
    bench_naive_log_sum,
    bench_log_no_fp_error,
);
criterion_main!(benches);
