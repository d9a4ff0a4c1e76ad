//! Benchmark utilities and performance testing
//!
//! This module provides simple timing helpers for comparing the generic and
//! buffer-native varint paths. Only available with std feature.

#[cfg(feature = "std")]
use std::time::{Duration, Instant};

use crate::error::Result;
use crate::reader::SliceReader;
use crate::varint::{self, MAX_VARINT_U64_SIZE};
use crate::writer::SliceWriter;

/// Simple benchmark statistics
#[derive(Debug, Clone)]
pub struct BenchStats {
    /// Number of operations
    pub count: usize,
    /// Total duration
    pub total_duration: Duration,
    /// Average time per operation
    pub avg_ns_per_op: u64,
    /// Operations per second
    pub ops_per_sec: f64,
}

impl BenchStats {
    /// Create new stats from measurements
    pub fn new(count: usize, total_duration: Duration) -> Self {
        let total_ns = total_duration.as_nanos() as u64;
        let avg_ns_per_op = if count > 0 {
            total_ns / count as u64
        } else {
            0
        };
        let ops_per_sec = if total_ns > 0 {
            (count as f64) * 1_000_000_000.0 / (total_ns as f64)
        } else {
            0.0
        };

        Self {
            count,
            total_duration,
            avg_ns_per_op,
            ops_per_sec,
        }
    }
}

#[cfg(feature = "std")]
impl std::fmt::Display for BenchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ops, {:.2}ms total, {} ns/op, {:.0} ops/sec",
            self.count,
            self.total_duration.as_secs_f64() * 1000.0,
            self.avg_ns_per_op,
            self.ops_per_sec
        )
    }
}

/// Spread of magnitudes so every encoded length shows up
#[inline]
fn sample(i: usize) -> u64 {
    (i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15) >> (i % 64)
}

/// Benchmark varint encoding through the generic algorithm
#[cfg(feature = "std")]
pub fn bench_varint_encode_generic(count: usize) -> Result<BenchStats> {
    let mut out: std::vec::Vec<u8> = std::vec::Vec::with_capacity(count * MAX_VARINT_U64_SIZE);
    let start = Instant::now();

    for i in 0..count {
        varint::write_varint_generic(&mut out, sample(i))?;
    }

    let duration = start.elapsed();
    std::hint::black_box(&out);
    Ok(BenchStats::new(count, duration))
}

/// Benchmark varint encoding through the slice writer's native path
#[cfg(feature = "std")]
pub fn bench_varint_encode_native(count: usize) -> Result<BenchStats> {
    let mut buf = std::vec![0u8; count * MAX_VARINT_U64_SIZE];
    let mut writer = SliceWriter::new(&mut buf);
    let start = Instant::now();

    for i in 0..count {
        varint::write_varint(&mut writer, sample(i))?;
    }

    let duration = start.elapsed();
    std::hint::black_box(writer.position());
    Ok(BenchStats::new(count, duration))
}

/// Benchmark varint decoding through the slice reader's native path
#[cfg(feature = "std")]
pub fn bench_varint_decode(count: usize) -> Result<BenchStats> {
    let mut encoded: std::vec::Vec<u8> = std::vec::Vec::with_capacity(count * MAX_VARINT_U64_SIZE);
    for i in 0..count {
        varint::write_varint_generic(&mut encoded, sample(i))?;
    }

    let mut reader = SliceReader::new(&encoded);
    let start = Instant::now();

    for _ in 0..count {
        let value: u64 = varint::read_varint(&mut reader)?;
        std::hint::black_box(value);
    }

    let duration = start.elapsed();
    Ok(BenchStats::new(count, duration))
}

/// Run simple performance test suite
#[cfg(feature = "std")]
pub fn run_perf_test() -> Result<()> {
    std::println!("wireprim Performance Test Suite");
    std::println!("===============================");

    const TEST_COUNT: usize = 100_000;

    std::println!("\nTesting with {} operations...", TEST_COUNT);

    let generic = bench_varint_encode_generic(TEST_COUNT)?;
    std::println!("Varint encode (generic): {}", generic);

    let native = bench_varint_encode_native(TEST_COUNT)?;
    std::println!("Varint encode (native): {}", native);

    let decode = bench_varint_decode(TEST_COUNT)?;
    std::println!("Varint decode (native): {}", decode);

    Ok(())
}
