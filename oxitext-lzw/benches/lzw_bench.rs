//! LZW throughput benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxitext_lzw::{compress, decompress, initial_dictionary};
use std::hint::black_box;

/// Text-like input of `size` characters.
fn text_like(size: usize) -> String {
    "The quick brown fox jumps over the lazy dog. \
     Pack my box with five dozen liquor jugs. "
        .chars()
        .cycle()
        .take(size)
        .collect()
}

fn bench_lzw(c: &mut Criterion) {
    let mut group = c.benchmark_group("lzw");

    for size in [1_000, 10_000, 100_000] {
        let message = text_like(size);
        let dictionary = initial_dictionary(&message);
        let codes = compress(&message).unwrap();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("compress", size), &message, |b, m| {
            b.iter(|| compress(black_box(m)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("decompress", size), &codes, |b, c| {
            b.iter(|| decompress(black_box(c), &dictionary).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lzw);
criterion_main!(benches);
