//! Benchmarks for asciirle encode/decode throughput.
//!
//! Compares art-like text (long runs) with text that falls back to verbatim
//! storage.

use asciirle::{decode_str, CodecConfig, DocumentCodec};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Generate ASCII-art style text: centred blocks of fill characters
fn generate_art_text(size: usize, width: usize) -> String {
    let fills = ['#', '*', '.', '@'];
    let mut lines = Vec::new();
    let mut total = 0;
    let mut i = 0;
    while total < size {
        let margin = (i * 5) % (width / 2);
        let line = format!(
            "{}{}{}",
            " ".repeat(margin),
            fills[i % fills.len()].to_string().repeat(width - 2 * margin),
            " ".repeat(margin)
        );
        total += line.len() + 1;
        lines.push(line);
        i += 1;
    }
    lines.join("\n")
}

/// Generate text without repeated neighbours (never compresses)
fn generate_noisy_text(size: usize, width: usize) -> String {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    let mut text = String::with_capacity(size);
    let mut prev = '\0';
    let mut column = 0;
    let mut i = 0u64;
    while text.len() < size {
        i.hash(&mut hasher);
        i += 1;
        let c = (b'!' + (hasher.finish() % 94) as u8) as char;
        if c == prev {
            continue;
        }
        if column == width {
            text.push('\n');
            column = 0;
        }
        text.push(c);
        prev = c;
        column += 1;
    }
    text
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for size in [1024, 64 * 1024, 1024 * 1024].iter() {
        let text = generate_art_text(*size, 120);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("art", size), &text, |b, text| {
            b.iter(|| {
                let mut codec = DocumentCodec::from_text(text.as_str()).unwrap();
                codec.encode().len()
            });
        });
    }

    let noisy = generate_noisy_text(256 * 1024, 80);
    group.throughput(Throughput::Bytes(noisy.len() as u64));
    group.bench_function("fallback", |b| {
        b.iter(|| {
            let mut codec = DocumentCodec::from_text(noisy.as_str()).unwrap();
            codec.encode().len()
        });
    });

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in [1024, 64 * 1024, 1024 * 1024].iter() {
        let text = generate_art_text(*size, 120);
        let mut codec = DocumentCodec::from_text(text.as_str()).unwrap();
        let encoded = codec.encode().as_str().to_string();
        let config = CodecConfig::default();

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("art", size), &encoded, |b, encoded| {
            b.iter(|| decode_str(encoded, &config).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
