//! Criterion benchmarks for wireprim
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wireprim::varint::{self, MAX_VARINT_U64_SIZE};
use wireprim::*;

fn samples(count: usize) -> Vec<u64> {
    (0..count as u64)
        .map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15) >> (i % 64))
        .collect()
}

fn bench_varint_encode(c: &mut Criterion) {
    let values = samples(1024);
    let mut group = c.benchmark_group("varint_encode");

    group.bench_function("generic_vec", |b| {
        let mut out: Vec<u8> = Vec::with_capacity(values.len() * MAX_VARINT_U64_SIZE);
        b.iter(|| {
            out.clear();
            for &v in &values {
                write_varint(&mut out, black_box(v)).unwrap();
            }
            black_box(out.len());
        });
    });

    group.bench_function("native_slice", |b| {
        let mut buf = vec![0u8; values.len() * MAX_VARINT_U64_SIZE];
        b.iter(|| {
            let mut writer = SliceWriter::new(&mut buf);
            for &v in &values {
                write_varint(&mut writer, black_box(v)).unwrap();
            }
            black_box(writer.position());
        });
    });

    group.finish();
}

fn bench_varint_decode(c: &mut Criterion) {
    let values = samples(1024);
    let mut encoded: Vec<u8> = Vec::new();
    for &v in &values {
        write_varint(&mut encoded, v).unwrap();
    }

    let mut group = c.benchmark_group("varint_decode");

    group.bench_function("generic_slice", |b| {
        b.iter(|| {
            let mut input = black_box(&encoded[..]);
            for _ in 0..values.len() {
                let v: u64 = varint::read_varint_generic(&mut input).unwrap();
                black_box(v);
            }
        });
    });

    group.bench_function("native_reader", |b| {
        b.iter(|| {
            let mut reader = SliceReader::new(black_box(&encoded));
            for _ in 0..values.len() {
                let v: u64 = read_varint(&mut reader).unwrap();
                black_box(v);
            }
        });
    });

    group.finish();
}

fn bench_zigzag(c: &mut Criterion) {
    c.bench_function("zigzag_i64_roundtrip", |b| {
        b.iter(|| {
            for x in -512i64..512 {
                black_box(decode_zigzag::<i64>(encode_zigzag(black_box(x))));
            }
        });
    });
}

fn bench_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_write");

    for len in [16usize, 256, 4096].iter() {
        let narrow = vec![b'x'; *len];
        let wide: Vec<u16> = (0..*len as u16).collect();

        group.bench_with_input(BenchmarkId::new("narrow_bulk", len), len, |b, _| {
            let mut out: Vec<u8> = Vec::with_capacity(*len * 2);
            b.iter(|| {
                out.clear();
                write_narrow_string(&mut out, black_box(&narrow)).unwrap();
            });
        });

        group.bench_with_input(BenchmarkId::new("wide_bulk", len), len, |b, _| {
            let mut out: Vec<u8> = Vec::with_capacity(*len * 2);
            b.iter(|| {
                out.clear();
                write_wide_string(&mut out, black_box(&wide)).unwrap();
            });
        });

        group.bench_with_input(BenchmarkId::new("wide_narrowed", len), len, |b, _| {
            let mut out: Vec<u8> = Vec::with_capacity(*len * 2);
            b.iter(|| {
                out.clear();
                write_narrow_string(&mut out, black_box(&wide)).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_varint_encode,
    bench_varint_decode,
    bench_zigzag,
    bench_strings
);
criterion_main!(benches);
