//! Benchmarks for multiscalar multiplication

use benches::random_instance;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use curve25519_dalek::edwards::EdwardsPoint;
use curve25519_dalek::scalar::Scalar as DalekScalar;
use curve25519_dalek::traits::VartimeMultiscalarMul;
use pedersen_core::multiexp::{multiscalar_mul_with_config, naive_multiscalar_mul, MultiexpConfig};

fn bench_bucket_vs_naive(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiexp");

    for n in [16, 64, 256, 1024] {
        group.throughput(Throughput::Elements(n as u64));
        let (scalars, points) = random_instance(n);
        let config = MultiexpConfig::default();

        group.bench_with_input(BenchmarkId::new("bucket", n), &n, |b, _| {
            b.iter(|| multiscalar_mul_with_config(black_box(&scalars), black_box(&points), &config).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("naive", n), &n, |b, _| {
            b.iter(|| naive_multiscalar_mul(black_box(&scalars), black_box(&points)).unwrap())
        });

        // curve25519-dalek's own variable-time MSM as a baseline
        let dalek_scalars: Vec<DalekScalar> = scalars.iter().map(|s| *s.inner()).collect();
        let dalek_points: Vec<EdwardsPoint> = points.iter().map(|p| *p.inner()).collect();
        group.bench_with_input(BenchmarkId::new("dalek_vartime", n), &n, |b, _| {
            b.iter(|| {
                EdwardsPoint::vartime_multiscalar_mul(
                    black_box(&dalek_scalars),
                    black_box(&dalek_points),
                )
            })
        });
    }

    group.finish();
}

fn bench_window_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiexp_window_bits");
    let (scalars, points) = random_instance(256);

    for window_bits in [2, 4, 6, 8] {
        let config = MultiexpConfig {
            window_bits,
            ..MultiexpConfig::default()
        };
        group.bench_with_input(
            BenchmarkId::new("bucket", window_bits),
            &window_bits,
            |b, _| b.iter(|| multiscalar_mul_with_config(&scalars, &points, &config).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_bucket_vs_naive, bench_window_width);
criterion_main!(benches);
