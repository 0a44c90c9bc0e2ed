//! Recognizer Benchmarks
//!
//! Run with: `cargo bench --package numlit-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use numlit_lex::{is_valid_numeric_literal, Recognizer};

fn bench_short_literals(c: &mut Criterion) {
    let mut group = c.benchmark_group("recognizer");

    let inputs = ["0", "+123", "-0.5", ".5", "1E-5", "6.02214076e23", "1.2.3", "abc"];
    let bytes: usize = inputs.iter().map(|s| s.len()).sum();
    group.throughput(Throughput::Bytes(bytes as u64));

    group.bench_function("mixed_short", |b| {
        b.iter(|| {
            inputs
                .iter()
                .filter(|s| is_valid_numeric_literal(black_box(s)))
                .count()
        })
    });

    group.finish();
}

fn bench_long_literal(c: &mut Criterion) {
    let mut group = c.benchmark_group("recognizer_long");

    let source = format!("-{}.{}e+{}", "7".repeat(4096), "3".repeat(4096), "9".repeat(64));
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("verdict", |b| {
        b.iter(|| is_valid_numeric_literal(black_box(&source)))
    });

    group.bench_function("scan", |b| b.iter(|| Recognizer::scan(black_box(&source))));

    group.finish();
}

criterion_group!(benches, bench_short_literals, bench_long_literal);
criterion_main!(benches);
