//! Baby Jubjub point arithmetic benchmarks

use babyjubjub::{point_mul, AffinePoint, ExtendedPoint, U256};
use criterion::{
    black_box, criterion_group, criterion_main, measurement::Measurement, BenchmarkGroup,
    Criterion,
};

fn test_scalar() -> U256 {
    U256::from_be_hex("06f6792dcf7803e616c51ba6b56f1951e18c0cdc302c18bc2ed7bb49b3a48ac9")
}

fn bench_affine_add<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let p = AffinePoint::GENERATOR;
    let q = AffinePoint::BASE8;
    group.bench_function("affine add", |b| b.iter(|| p.add(&q)));
}

fn bench_extended_add<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let p = ExtendedPoint::from(AffinePoint::GENERATOR);
    let q = ExtendedPoint::BASE8;
    group.bench_function("extended add", |b| b.iter(|| p + q));
}

fn bench_extended_double<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let p = ExtendedPoint::BASE8;
    group.bench_function("extended double", |b| b.iter(|| p.double()));
}

fn bench_mul<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let p = AffinePoint::BASE8;
    let k = test_scalar();
    group.bench_function("mul", |b| b.iter(|| p.mul(black_box(&k))));
}

fn bench_mul_vartime<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let p = AffinePoint::BASE8;
    let k = test_scalar();
    group.bench_function("mul_vartime", |b| b.iter(|| p.mul_vartime(black_box(&k))));
}

fn bench_point_mul<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let (x, y) = AffinePoint::BASE8.to_uints();
    let k = test_scalar();
    group.bench_function("point_mul", |b| {
        b.iter(|| point_mul(black_box(&x), black_box(&y), black_box(&k)))
    });
}

fn bench_point_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("point operations");
    bench_affine_add(&mut group);
    bench_extended_add(&mut group);
    bench_extended_double(&mut group);
    bench_mul(&mut group);
    bench_mul_vartime(&mut group);
    bench_point_mul(&mut group);
    group.finish();
}

criterion_group!(benches, bench_point_ops);
criterion_main!(benches);
