//! Benchmarks for scalar and point vector algebra

use benches::random_instance;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pedersen_core::{hash_to_point, ScalarVector};
use rand::thread_rng;

fn bench_scalar_vector(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_vector");

    for n in [64, 256, 1024] {
        group.throughput(Throughput::Elements(n as u64));
        let mut rng = thread_rng();
        let a = ScalarVector::random(&mut rng, n);
        let b = ScalarVector::random(&mut rng, n);

        group.bench_with_input(BenchmarkId::new("hadamard", n), &n, |bench, _| {
            bench.iter(|| a.multiply(black_box(&b)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("inner_product", n), &n, |bench, _| {
            bench.iter(|| a.inner_product(black_box(&b)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("divide", n), &n, |bench, _| {
            bench.iter(|| a.divide(black_box(&b)).unwrap())
        });
    }

    group.finish();
}

fn bench_point_vector(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_vector");

    for n in [64, 256] {
        group.throughput(Throughput::Elements(n as u64));
        let (scalars, points) = random_instance(n);

        group.bench_with_input(BenchmarkId::new("hadamard", n), &n, |bench, _| {
            bench.iter(|| points.multiply(black_box(&scalars)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("add", n), &n, |bench, _| {
            bench.iter(|| points.add(black_box(&points)).unwrap())
        });
    }

    group.finish();
}

fn bench_hash_to_point(c: &mut Criterion) {
    c.bench_function("hash_to_point", |b| {
        b.iter(|| hash_to_point(black_box(b"benchmark input")).unwrap())
    });
}

criterion_group!(benches, bench_scalar_vector, bench_point_vector, bench_hash_to_point);
criterion_main!(benches);
