//! Criterion benchmarks for prng_distributions samplers.
//!
//! Measures the inverse normal CDF and per-sample cost of each distribution
//! over both generator types.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use prng_core::{DistinctGenerator, Generator, TricycleGenerator};
use prng_distributions::{
    probit, GammaDistribution, KumaraswamyDistribution, NormalDistribution,
};

/// Benchmark probit across its three regions.
fn bench_probit(c: &mut Criterion) {
    let mut group = c.benchmark_group("probit");
    for p in [1e-6, 0.3, 0.999_99] {
        group.bench_with_input(BenchmarkId::from_parameter(p), &p, |b, &p| {
            b.iter(|| black_box(probit(black_box(p))));
        });
    }
    group.finish();
}

/// Benchmark one sample per distribution.
fn bench_samplers(c: &mut Criterion) {
    let mut group = c.benchmark_group("samplers");

    let sources: Vec<Box<dyn Generator>> = vec![
        Box::new(TricycleGenerator::new(42)),
        Box::new(DistinctGenerator::new(42)),
    ];
    for mut source in sources {
        let tag = source.tag();

        let mut normal = NormalDistribution::new(source.as_mut(), 0.0, 1.0).unwrap();
        group.bench_function(BenchmarkId::new("normal", tag), |b| {
            b.iter(|| black_box(normal.next_f64()));
        });
        drop(normal);

        for alpha in [0.5, 2.0, 20.0] {
            let mut gamma = GammaDistribution::new(source.as_mut(), alpha, 1.0).unwrap();
            group.bench_function(BenchmarkId::new(format!("gamma/alpha={alpha}"), tag), |b| {
                b.iter(|| black_box(gamma.next_f64()));
            });
        }

        let mut kumaraswamy = KumaraswamyDistribution::new(source.as_mut(), 2.0, 5.0).unwrap();
        group.bench_function(BenchmarkId::new("kumaraswamy", tag), |b| {
            b.iter(|| black_box(kumaraswamy.next_f64()));
        });
    }

    group.finish();
}

/// Benchmark bulk filling.
fn bench_fill(c: &mut Criterion) {
    let mut rng = TricycleGenerator::new(7);
    let mut normal = NormalDistribution::new(&mut rng, 0.0, 1.0).unwrap();
    let mut buffer = vec![0.0; 4096];
    c.bench_function("fill/normal/4096", |b| {
        b.iter(|| {
            normal.fill(&mut buffer);
            black_box(buffer[0])
        });
    });
}

criterion_group!(benches, bench_probit, bench_samplers, bench_fill);
criterion_main!(benches);
