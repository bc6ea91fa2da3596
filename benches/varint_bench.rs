// In benches/varint_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::io::Cursor;

use fst_outputs::kernels::varint;
use fst_outputs::{Output, Outputs, PositiveIntOutputs};

// --- Mock Data Generation ---

/// Generates outputs shaped like term-dictionary file offsets: mostly small
/// deltas after prefix factoring, with the occasional large absolute value.
fn generate_factored_outputs(count: usize) -> Vec<Output> {
    let mut values = Vec::with_capacity(count);
    for i in 0..count {
        let value = match i % 10 {
            0 => 0,                       // absent arc
            9 => (i as u64 + 1) << 32,    // rare large offset
            _ => (i % 500) as u64 + 1,    // small factored remainder
        };
        values.push(match value {
            0 => Output::None,
            v => Output::new(v),
        });
    }
    values
}

// --- Benchmark Suite ---

const BENCH_VALUE_COUNT: usize = 65_536;

fn bench_varint_codec(c: &mut Criterion) {
    let algebra = PositiveIntOutputs::new();
    let values = generate_factored_outputs(BENCH_VALUE_COUNT);

    // Prepare encoded data once so decode benchmarks measure decoding only.
    let mut encoded = Vec::new();
    for value in &values {
        algebra.write(value, &mut encoded).unwrap();
    }

    let mut group = c.benchmark_group("Varint Output Codec");
    group.throughput(criterion::Throughput::Elements(BENCH_VALUE_COUNT as u64));

    group.bench_function("Encode (factored term offsets)", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(encoded.len());
            for value in black_box(&values) {
                algebra.write(value, &mut buf).unwrap();
            }
            black_box(buf)
        })
    });

    group.bench_function("Decode (factored term offsets)", |b| {
        b.iter(|| {
            let mut cursor = Cursor::new(black_box(encoded.as_slice()));
            for _ in 0..BENCH_VALUE_COUNT {
                black_box(algebra.read(&mut cursor).unwrap());
            }
        })
    });

    group.bench_function("Raw kernel encode_one", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(10);
            varint::encode_one(black_box(6_000_000_000u64), &mut buf).unwrap();
            black_box(buf)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_varint_codec);
criterion_main!(benches);
