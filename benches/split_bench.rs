//! Benchmarks for cookie-chunker.
//!
//! Run with:
//!     cargo bench

use std::collections::HashMap;
use std::convert::Infallible;

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use cookie_chunker::{
    PercentEncodedEntry, SplitConfig, Splitter, Utf8Bytes, combine, split, split_with,
};

fn token(size: usize) -> String {
    // JWT-like: mostly unreserved with some escaped characters
    "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJzdWIiOiIxMjM0 NTY3ODkwIn0=/"
        .chars()
        .cycle()
        .take(size)
        .collect()
}

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");

    for size in [1024, 8 * 1024, 64 * 1024] {
        let value = token(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(format!("default_{}kb", size / 1024), &value, |b, value| {
            b.iter(|| black_box(split("sb-auth-token", black_box(value)).unwrap().len()));
        });

        group.bench_with_input(format!("small_{}kb", size / 1024), &value, |b, value| {
            b.iter(|| black_box(split_with("sb-auth-token", black_box(value), 36).unwrap().len()));
        });
    }

    group.finish();
}

fn bench_measures(c: &mut Criterion) {
    let mut group = c.benchmark_group("measures");
    let value = token(64 * 1024);
    let config = SplitConfig::new(1024).unwrap();

    group.bench_function("percent_value", |b| {
        let splitter = Splitter::new(config);
        b.iter(|| black_box(splitter.split("key", black_box(&value)).unwrap().len()));
    });

    group.bench_function("percent_entry", |b| {
        let splitter = Splitter::with_measure(config, PercentEncodedEntry);
        b.iter(|| black_box(splitter.split("key", black_box(&value)).unwrap().len()));
    });

    group.bench_function("utf8_bytes", |b| {
        let splitter = Splitter::with_measure(config, Utf8Bytes);
        b.iter(|| black_box(splitter.split("key", black_box(&value)).unwrap().len()));
    });

    group.finish();
}

fn bench_combine(c: &mut Criterion) {
    let mut group = c.benchmark_group("combine");
    let value = token(64 * 1024);
    let store: HashMap<String, String> = split_with("key", &value, 320)
        .unwrap()
        .into_iter()
        .map(|piece| piece.into_parts())
        .collect();

    group.throughput(Throughput::Bytes(value.len() as u64));
    group.bench_function("hash_map", |b| {
        b.iter(|| {
            let combined = combine("key", |name: &str| {
                Ok::<_, Infallible>(store.get(black_box(name)).cloned())
            });
            black_box(combined.map(|v| v.map(|s| s.len())))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_split, bench_measures, bench_combine);
criterion_main!(benches);
