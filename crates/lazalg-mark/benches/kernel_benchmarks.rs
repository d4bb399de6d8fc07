//! Criterion benchmarks for the lazalg kernels
//!
//! Run with: cargo bench -p lazalg-mark
//!
//! Each group compares the classic eager baseline with expression
//! assignment for the same operands:
//! - Outer product of dense vectors
//! - Dense matrix scaling
//! - Dense vector addition
//! - Sparse matrix subtraction

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lazalg_core::prelude::*;
use lazalg_mark::classic::{outer, ClassicMatrix, ClassicSparse, ClassicVector};
use scirs2_core::random::{SeedableRng, StdRng};

const SEED: u64 = 12345;

fn classic_vectors(n: usize) -> (ClassicVector<f64>, ClassicVector<f64>) {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut a = ClassicVector::new(n);
    let mut b = ClassicVector::new(n);
    a.init(&mut rng);
    b.init(&mut rng);
    (a, b)
}

fn bench_dvectdvecmult(c: &mut Criterion) {
    let mut group = c.benchmark_group("dvectdvecmult");

    for &n in [10, 100, 500].iter() {
        group.throughput(Throughput::Elements((n * n) as u64));
        let (ca, cb) = classic_vectors(n);
        group.bench_with_input(BenchmarkId::new("classic", n), &n, |bencher, _| {
            bencher.iter(|| black_box(outer(&ca, &cb)));
        });

        let mut creator = Creator::new(SEED);
        let a: DynamicVector<f64> = creator.vector(n);
        let b: DynamicVector<f64> = creator.vector(n);
        let mut m = DynamicMatrix::new(n, n, StorageOrder::RowMajor);
        group.bench_with_input(BenchmarkId::new("lazalg", n), &n, |bencher, _| {
            bencher.iter(|| {
                m.assign(&a * trans(&b)).unwrap();
                black_box(&m);
            });
        });
    }
    group.finish();
}

fn bench_dmatscalarmult(c: &mut Criterion) {
    let mut group = c.benchmark_group("dmatscalarmult");

    for &n in [10, 100, 500].iter() {
        group.throughput(Throughput::Elements((n * n) as u64));
        let mut rng = StdRng::seed_from_u64(SEED);
        let mut ca = ClassicMatrix::<f64>::new(n, n);
        ca.init(&mut rng);
        group.bench_with_input(BenchmarkId::new("classic", n), &n, |bencher, _| {
            bencher.iter(|| black_box(&ca * 2.2));
        });

        let a: DynamicMatrix<f64> = Creator::new(SEED).matrix(n, n, StorageOrder::RowMajor);
        let mut m = DynamicMatrix::new(n, n, StorageOrder::RowMajor);
        group.bench_with_input(BenchmarkId::new("lazalg", n), &n, |bencher, _| {
            bencher.iter(|| {
                m.assign(&a * 2.2).unwrap();
                black_box(&m);
            });
        });
    }
    group.finish();
}

fn bench_dvecdvecadd(c: &mut Criterion) {
    let mut group = c.benchmark_group("dvecdvecadd");

    for &n in [100, 10_000, 1_000_000].iter() {
        group.throughput(Throughput::Elements(n as u64));
        let (ca, cb) = classic_vectors(n);
        group.bench_with_input(BenchmarkId::new("classic", n), &n, |bencher, _| {
            bencher.iter(|| black_box(&ca + &cb));
        });

        let mut creator = Creator::new(SEED);
        let a: DynamicVector<f64> = creator.vector(n);
        let b: DynamicVector<f64> = creator.vector(n);
        let mut v = DynamicVector::new(n);
        group.bench_with_input(BenchmarkId::new("lazalg", n), &n, |bencher, _| {
            bencher.iter(|| {
                v.assign(&a + &b).unwrap();
                black_box(&v);
            });
        });
    }
    group.finish();
}

fn bench_smatsmatsub(c: &mut Criterion) {
    let mut group = c.benchmark_group("smatsmatsub");
    let fill = 4;

    for &n in [100, 1000, 10_000].iter() {
        group.throughput(Throughput::Elements((2 * n * fill) as u64));
        let mut rng = StdRng::seed_from_u64(SEED);
        let mut ca = ClassicSparse::<f64>::new(n, n);
        let mut cb = ClassicSparse::<f64>::new(n, n);
        ca.init(fill, &mut rng);
        cb.init(fill, &mut rng);
        group.bench_with_input(BenchmarkId::new("classic", n), &n, |bencher, _| {
            bencher.iter(|| black_box(&ca - &cb));
        });

        let a = CompressedMatrix::from_triplets(n, n, StorageOrder::RowMajor, &ca.triplets()).unwrap();
        let b = CompressedMatrix::from_triplets(n, n, StorageOrder::RowMajor, &cb.triplets()).unwrap();
        let mut m = CompressedMatrix::with_capacity(n, n, 2 * n * fill, StorageOrder::RowMajor);
        group.bench_with_input(BenchmarkId::new("lazalg", n), &n, |bencher, _| {
            bencher.iter(|| {
                m.assign(&a - &b).unwrap();
                black_box(&m);
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_dvectdvecmult,
    bench_dmatscalarmult,
    bench_dvecdvecadd,
    bench_smatsmatsub
);
criterion_main!(benches);
