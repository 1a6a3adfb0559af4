//! Quadratic reference implementations.
//!
//! These enumerate subarrays or scan neighbours directly. They exist to check
//! the stack-based versions and are never used on large inputs.

use crate::extremum::{Extremum, Relation, Side};

/// Number of non-empty contiguous subarrays of a length-`n` sequence.
pub fn subarray_count(n: usize) -> usize {
    n * (n + 1) / 2
}

/// Exact sum of subarray extrema, accumulated in `i128`.
pub fn extremum_sum_wide(seq: &[i64], mode: Extremum) -> i128 {
    let mut total = 0i128;
    for start in 0..seq.len() {
        let mut best = seq[start];
        for &v in &seq[start..] {
            best = match mode {
                Extremum::Min => best.min(v),
                Extremum::Max => best.max(v),
            };
            total += i128::from(best);
        }
    }
    total
}

pub fn extremum_sum(seq: &[i64], mode: Extremum) -> i64 {
    extremum_sum_wide(seq, mode) as i64
}

pub fn sum_of_subarray_minimums(seq: &[i64]) -> i64 {
    extremum_sum(seq, Extremum::Min)
}

pub fn sum_of_subarray_maximums(seq: &[i64]) -> i64 {
    extremum_sum(seq, Extremum::Max)
}

/// Sums `max - min` per subarray directly, without the linearity shortcut.
pub fn sum_of_subarray_ranges_wide(seq: &[i64]) -> i128 {
    let mut total = 0i128;
    for start in 0..seq.len() {
        let (mut lo, mut hi) = (seq[start], seq[start]);
        for &v in &seq[start..] {
            lo = lo.min(v);
            hi = hi.max(v);
            total += i128::from(hi) - i128::from(lo);
        }
    }
    total
}

pub fn sum_of_subarray_ranges(seq: &[i64]) -> i64 {
    sum_of_subarray_ranges_wide(seq) as i64
}

pub fn nearest<T: Ord>(seq: &[T], side: Side, relation: Relation) -> Vec<Option<usize>> {
    (0..seq.len())
        .map(|i| match side {
            Side::Previous => (0..i).rev().find(|&j| relation.holds(&seq[j], &seq[i])),
            Side::Next => (i + 1..seq.len()).find(|&j| relation.holds(&seq[j], &seq[i])),
        })
        .collect()
}

pub fn nearest_circular<T: Ord>(seq: &[T], side: Side, relation: Relation) -> Vec<Option<usize>> {
    let n = seq.len();
    (0..n)
        .map(|i| {
            (1..n)
                .map(|step| match side {
                    Side::Previous => (i + n - step) % n,
                    Side::Next => (i + step) % n,
                })
                .find(|&j| relation.holds(&seq[j], &seq[i]))
        })
        .collect()
}
