//! Benchmark – logical-character scanning and XML export
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tmcodec::{scanner, transform};

/// Deterministic universal text of exactly `target_len` bytes, mixing plain
/// bytes, named escapes and numeric escapes.
fn make_payload(target_len: usize) -> Vec<u8> {
    const CHUNKS: [&[u8]; 4] = [b"plain text ", b"<alpha>", b" caf\xe9 ", b"<#20AC>"];
    let mut s = Vec::with_capacity(target_len + 16);
    let mut k = 0;
    while s.len() < target_len {
        s.extend_from_slice(CHUNKS[k % CHUNKS.len()]);
        k += 1;
    }
    s.truncate(target_len);
    s
}

fn bench_scanner(c: &mut Criterion) {
    let sizes = [1_024usize, 64 * 1_024];
    let mut group = c.benchmark_group("scanner");
    group.measurement_time(Duration::from_secs(5));

    for &size in &sizes {
        let payload = make_payload(size);

        group.bench_with_input(BenchmarkId::new("tokenize", size), &payload, |b, p| {
            b.iter(|| black_box(scanner::tokenize(black_box(p)).len()));
        });

        group.bench_with_input(BenchmarkId::new("logical_length", size), &payload, |b, p| {
            b.iter(|| black_box(scanner::logical_length(black_box(p))));
        });

        group.bench_with_input(BenchmarkId::new("search_forward", size), &payload, |b, p| {
            b.iter(|| black_box(scanner::search_forward(b"<#20AC>x", 0, black_box(p))));
        });

        group.bench_with_input(BenchmarkId::new("tm_to_xml_cdata", size), &payload, |b, p| {
            b.iter(|| black_box(transform::tm_to_xml_cdata(black_box(p)).to_xml()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scanner);
criterion_main!(benches);
