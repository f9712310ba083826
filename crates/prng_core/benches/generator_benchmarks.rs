//! Criterion benchmarks for prng_core generators.
//!
//! Measures raw word generation, backward stepping, bounded draws and the
//! text codec for each generator type.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use prng_core::generators::{DistinctGenerator, Generator, TricycleGenerator};
use prng_core::registry::GeneratorRegistry;

fn generators() -> Vec<Box<dyn Generator>> {
    vec![
        Box::new(TricycleGenerator::new(42)),
        Box::new(DistinctGenerator::new(42)),
    ]
}

/// Benchmark forward and backward stepping.
fn bench_stepping(c: &mut Criterion) {
    let mut group = c.benchmark_group("stepping");

    for mut generator in generators() {
        let tag = generator.tag();
        group.bench_function(BenchmarkId::new("next_u64", tag), |b| {
            b.iter(|| black_box(generator.next_u64()));
        });
        group.bench_function(BenchmarkId::new("previous_u64", tag), |b| {
            b.iter(|| black_box(generator.previous_u64().ok()));
        });
    }

    // Static dispatch for comparison with the boxed path above.
    let mut tricycle = TricycleGenerator::new(42);
    group.bench_function("next_u64/TriR-static", |b| {
        b.iter(|| black_box(tricycle.next_u64()));
    });

    group.finish();
}

/// Benchmark bounded and floating-point views.
fn bench_derived(c: &mut Criterion) {
    let mut group = c.benchmark_group("derived");
    let mut rng = TricycleGenerator::new(7);

    for bound in [10i32, 1_000, 1 << 30] {
        group.bench_with_input(BenchmarkId::new("next_i32_below", bound), &bound, |b, &bound| {
            b.iter(|| black_box(rng.next_i32_below(black_box(bound))));
        });
    }
    group.bench_function("next_f64", |b| b.iter(|| black_box(rng.next_f64())));
    group.bench_function("next_exclusive_f64", |b| {
        b.iter(|| black_box(rng.next_exclusive_f64()))
    });

    let mut distinct = DistinctGenerator::new(7);
    group.bench_function("skip/DisR", |b| {
        b.iter(|| black_box(distinct.skip(black_box(1_000_000)).ok()));
    });

    group.finish();
}

/// Benchmark serialisation through the registry.
fn bench_codec(c: &mut Criterion) {
    let registry = GeneratorRegistry::with_defaults();
    let text = TricycleGenerator::new(42).serialize();

    c.bench_function("codec/serialize", |b| {
        let rng = TricycleGenerator::new(42);
        b.iter(|| black_box(rng.serialize()));
    });
    c.bench_function("codec/deserialize", |b| {
        b.iter(|| black_box(registry.deserialize(black_box(&text)).ok()));
    });
}

criterion_group!(benches, bench_stepping, bench_derived, bench_codec);
criterion_main!(benches);
