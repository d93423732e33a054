//! Benchmarks for the wiki formatting pipeline.
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use wikifmt::format;

/// Build a document with `sections` heading/link/paragraph blocks.
fn sample_document(sections: usize) -> String {
    let mut text = String::new();
    for i in 0..sections {
        text.push_str(&format!("== Section {i} ==\n"));
        text.push_str("Intro with a [[glossary|link]] and http://example.com/ inline.\n");
        text.push_str("Plain paragraph line without any markup at all.\n\n");
    }
    text
}

fn bench_format_small(c: &mut Criterion) {
    let text = sample_document(4);
    c.bench_function("format_small", |b| {
        b.iter(|| format(black_box(&text), |slug| format!("/wiki/{slug}")));
    });
}

fn bench_format_large(c: &mut Criterion) {
    let text = sample_document(512);
    c.bench_function("format_large", |b| {
        b.iter(|| format(black_box(&text), |slug| format!("/wiki/{slug}")));
    });
}

fn bench_format_inert(c: &mut Criterion) {
    let text = "plain line with no markup whatsoever\n".repeat(1024);
    c.bench_function("format_inert", |b| {
        b.iter(|| format(black_box(&text), |slug| format!("/wiki/{slug}")));
    });
}

criterion_group!(benches, bench_format_small, bench_format_large, bench_format_inert);
criterion_main!(benches);
