//! Performance benchmarks for HashMill
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hashmill::config::DigestAlgorithm;
use hashmill::digest::{hash_range, hash_value};
use hashmill::dispatch::WorkRange;
use hashmill::sink::DigestSink;
use tempfile::TempDir;

fn bench_single_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_hash");
    group.throughput(Throughput::Elements(1));

    for algorithm in [
        DigestAlgorithm::Sha512,
        DigestAlgorithm::Sha256,
        DigestAlgorithm::Blake3,
    ] {
        group.bench_with_input(
            BenchmarkId::from_parameter(algorithm.name()),
            &algorithm,
            |b, &algorithm| {
                let mut value: u64 = 0;
                b.iter(|| {
                    value += 1;
                    black_box(hash_value(value, algorithm))
                });
            },
        );
    }

    group.finish();
}

fn bench_batch_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_hash");

    for batch_size in [1_000u64, 10_000] {
        group.throughput(Throughput::Elements(batch_size));
        group.bench_with_input(
            BenchmarkId::new("sha512", batch_size),
            &batch_size,
            |b, &batch_size| {
                let mut buffer = Vec::with_capacity(batch_size as usize);
                b.iter(|| {
                    buffer.clear();
                    hash_range(
                        WorkRange {
                            start: 0,
                            len: batch_size,
                        },
                        DigestAlgorithm::Sha512,
                        &mut buffer,
                    );
                    black_box(buffer.len())
                });
            },
        );
    }

    group.finish();
}

fn bench_sink_submit(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let sink = DigestSink::open(&dir.path().join("bench.out")).unwrap();

    let mut buffer = Vec::new();
    hash_range(
        WorkRange {
            start: 0,
            len: 10_000,
        },
        DigestAlgorithm::Sha512,
        &mut buffer,
    );

    let mut group = c.benchmark_group("sink_submit");
    group.throughput(Throughput::Elements(buffer.len() as u64));
    group.bench_function("10k_records", |b| {
        b.iter(|| sink.submit(black_box(&buffer)).unwrap());
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_single_hash,
    bench_batch_hash,
    bench_sink_submit
);
criterion_main!(benches);
