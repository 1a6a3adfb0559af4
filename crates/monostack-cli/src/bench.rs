//! Timing comparison between the stack algorithms and the quadratic oracles.

use std::time::Instant;

use anyhow::{bail, Result};
use serde::Serialize;

use monostack_core::{
    next_greater, oracle, sum_of_subarray_maximums, sum_of_subarray_minimums,
    sum_of_subarray_ranges,
};

/// Oracle runs are O(n^2), so they only see a prefix of the input.
pub const ORACLE_MAX_LEN: usize = 5_000;

/// Values stay small enough that a million-element sum fits in `i64`.
const VALUE_SPAN: u64 = 2_000_001;

/// xorshift64* generator. Deterministic per seed, no external state.
pub struct XorShift64Star {
    state: u64,
}

impl XorShift64Star {
    pub const fn new(seed: u64) -> Self {
        // Zero is a fixed point of xorshift.
        let state = if seed == 0 { 1 } else { seed };
        XorShift64Star { state }
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }
}

pub fn random_sequence(len: usize, seed: u64) -> Vec<i64> {
    let mut rng = XorShift64Star::new(seed);
    (0..len)
        .map(|_| (rng.next_u64() % VALUE_SPAN) as i64 - 1_000_000)
        .collect()
}

#[derive(Debug, Serialize)]
pub struct BenchRow {
    pub label: &'static str,
    pub len: usize,
    pub ops: usize,
    pub total_ms: f64,
}

impl BenchRow {
    pub fn per_op_ms(&self) -> f64 {
        self.total_ms / self.ops as f64
    }
}

fn time<F: FnMut() -> i64>(label: &'static str, len: usize, ops: usize, mut f: F) -> BenchRow {
    let mut sink = 0i64;
    let t0 = Instant::now();
    for _ in 0..ops {
        sink = sink.wrapping_add(f());
    }
    let total_ms = t0.elapsed().as_secs_f64() * 1000.0;
    std::hint::black_box(sink);
    BenchRow {
        label,
        len,
        ops,
        total_ms,
    }
}

pub fn run(len: usize, iterations: usize, seed: u64) -> Result<Vec<BenchRow>> {
    if iterations == 0 {
        bail!("iterations must be at least 1");
    }
    let seq = random_sequence(len, seed);
    let prefix = &seq[..len.min(ORACLE_MAX_LEN)];

    // Sanity check before timing anything.
    if sum_of_subarray_minimums(prefix) != oracle::sum_of_subarray_minimums(prefix) {
        bail!("stack and oracle disagree on seed {seed}");
    }

    Ok(vec![
        time("Minimums (stack)", len, iterations, || {
            sum_of_subarray_minimums(&seq)
        }),
        time("Maximums (stack)", len, iterations, || {
            sum_of_subarray_maximums(&seq)
        }),
        time("Ranges (stack)", len, iterations, || sum_of_subarray_ranges(&seq)),
        time("Next greater (stack)", len, iterations, || {
            next_greater(&seq).iter().flatten().count() as i64
        }),
        time("Minimums (oracle)", prefix.len(), iterations, || {
            oracle::sum_of_subarray_minimums(prefix)
        }),
        time("Ranges (oracle)", prefix.len(), iterations, || {
            oracle::sum_of_subarray_ranges(prefix)
        }),
    ])
}

pub fn print_bench_row(row: &BenchRow) {
    let (total_str, per_str) = (format_duration(row.total_ms), format_duration(row.per_op_ms()));
    println!(
        "{:<24} n={:<8} {:>4} ops {:>12} {:>12}/op",
        row.label, row.len, row.ops, total_str, per_str
    );
}

fn format_duration(ms: f64) -> String {
    if ms < 0.001 {
        format!("{:.1} ns", ms * 1_000_000.0)
    } else if ms < 1.0 {
        format!("{:.1} µs", ms * 1000.0)
    } else if ms < 1000.0 {
        format!("{:.1} ms", ms)
    } else {
        format!("{:.2} s", ms / 1000.0)
    }
}
