//! Benchmarks for division, magnitude and the polar functions

use bigcomplex::{BigComplex, Context};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn operands() -> (BigComplex, BigComplex) {
    let a: BigComplex = "3.14159265358979323846 - 2.71828182845904523536i".parse().unwrap();
    let b: BigComplex = "(1.41421356237309504880, 1.73205080756887729352)".parse().unwrap();
    (a, b)
}

fn bench_exact(c: &mut Criterion) {
    let (a, b) = operands();
    let mut group = c.benchmark_group("exact");
    group.bench_function("multiply", |bench| {
        bench.iter(|| black_box(&a).multiply(black_box(&b)))
    });
    group.bench_function("divide", |bench| {
        bench.iter(|| black_box(&a).divide(black_box(&b)).unwrap())
    });
    group.finish();
}

fn bench_polar(c: &mut Criterion) {
    let (a, _) = operands();
    let mut group = c.benchmark_group("polar");

    for precision in [20u64, 50, 100].iter() {
        let ctx = Context::new(*precision).unwrap();
        group.bench_with_input(BenchmarkId::new("abs", precision), &ctx, |bench, ctx| {
            bench.iter(|| black_box(&a).abs(ctx).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("sqrt", precision), &ctx, |bench, ctx| {
            bench.iter(|| black_box(&a).sqrt(ctx).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("log", precision), &ctx, |bench, ctx| {
            bench.iter(|| black_box(&a).log(ctx).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_exact, bench_polar);
criterion_main!(benches);
