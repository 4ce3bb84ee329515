//! secp256k1 group operation benchmarks

use criterion::{
    black_box, criterion_group, criterion_main, measurement::Measurement, BenchmarkGroup,
    Criterion,
};
use hex_literal::hex;
use secp256k1_group::{hash_to_group, ProjectivePoint, Scalar};

fn test_scalar() -> Scalar {
    Scalar::decode(&hex!(
        "aa5e28d6a97a2479a65527f7290311a3624d4cc0fa1578598ee3c2613bf99522"
    ))
    .unwrap()
}

fn bench_point_add<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let p = ProjectivePoint::GENERATOR;
    let q = p.double();
    group.bench_function("add", |b| b.iter(|| black_box(p) + &black_box(q)));
}

fn bench_point_double<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let p = ProjectivePoint::GENERATOR;
    group.bench_function("double", |b| b.iter(|| black_box(p).double()));
}

fn bench_point_mul<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let p = ProjectivePoint::GENERATOR;
    let s = test_scalar();
    group.bench_function("point-scalar mul", |b| {
        b.iter(|| &black_box(p) * &black_box(s))
    });
}

fn bench_point_encode<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let p = ProjectivePoint::GENERATOR.double();
    group.bench_function("encode (compressed)", |b| b.iter(|| black_box(p).encode()));
}

fn bench_hash_to_group<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    group.bench_function("hash_to_group", |b| {
        b.iter(|| hash_to_group(black_box(b"benchmark input"), b"secp256k1_XMD:SHA-256_SSWU_RO_"))
    });
}

fn bench_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("group operations");
    bench_point_add(&mut group);
    bench_point_double(&mut group);
    bench_point_mul(&mut group);
    bench_point_encode(&mut group);
    bench_hash_to_group(&mut group);
    group.finish();
}

criterion_group!(benches, bench_point);
criterion_main!(benches);
