//! Sums of subarray extrema by the contribution technique.
//!
//! Instead of visiting all `n(n+1)/2` subarrays, every index adds
//! `seq[i] * left[i] * right[i]`, its value times the number of subarrays it
//! owns as extremum (see [`crate::boundary`]).
//!
//! Terms and running totals are accumulated in `i128`, which holds the exact
//! sum for any sequence shorter than 2^32 elements. Mixed-sign terms may
//! exceed `i64` on their own while the total still fits, so the only 64-bit
//! overflow check is the final conversion in the checked variants.

use serde::Serialize;
use tracing::debug;

use crate::boundary::boundaries;
use crate::error::{MonoError, MonoResult};
use crate::extremum::Extremum;

/// Modulus used by the classic "sum of subarray minimums" exercise.
pub const CLASSIC_MODULUS: u64 = 1_000_000_007;

/// Exact contribution sum in 128-bit arithmetic.
pub fn contribution_sum_wide(seq: &[i64], mode: Extremum) -> i128 {
    let b = boundaries(seq, mode);
    seq.iter()
        .enumerate()
        .map(|(i, &v)| i128::from(v) * b.left[i] as i128 * b.right[i] as i128)
        .sum()
}

pub fn sum_of_subarray_ranges_wide(seq: &[i64]) -> i128 {
    contribution_sum_wide(seq, Extremum::Max) - contribution_sum_wide(seq, Extremum::Min)
}

fn narrow(exact: i128) -> MonoResult<i64> {
    i64::try_from(exact).map_err(|_| {
        debug!(%exact, "sum does not fit in i64");
        MonoError::Overflow { exact }
    })
}

/// Contribution sum as `i64`. Exact whenever the true sum fits in `i64`;
/// larger sums are truncated to their low 64 bits.
pub fn contribution_sum(seq: &[i64], mode: Extremum) -> i64 {
    contribution_sum_wide(seq, mode) as i64
}

pub fn sum_of_subarray_minimums(seq: &[i64]) -> i64 {
    contribution_sum(seq, Extremum::Min)
}

pub fn sum_of_subarray_maximums(seq: &[i64]) -> i64 {
    contribution_sum(seq, Extremum::Max)
}

/// Sum of `max - min` over all subarrays. Summation is linear, so this is the
/// difference of the two extremum sums, taken before narrowing.
pub fn sum_of_subarray_ranges(seq: &[i64]) -> i64 {
    sum_of_subarray_ranges_wide(seq) as i64
}

/// Same result as [`contribution_sum`], failing with
/// [`MonoError::Overflow`] when the exact sum does not fit in `i64`.
pub fn checked_contribution_sum(seq: &[i64], mode: Extremum) -> MonoResult<i64> {
    narrow(contribution_sum_wide(seq, mode))
}

pub fn checked_sum_of_subarray_ranges(seq: &[i64]) -> MonoResult<i64> {
    narrow(sum_of_subarray_ranges_wide(seq))
}

/// Contribution sum reduced modulo `modulus`, in `0..modulus`.
///
/// Negative values reduce by Euclidean remainder, so the result is the
/// canonical residue of the exact sum.
pub fn contribution_sum_mod(seq: &[i64], mode: Extremum, modulus: u64) -> MonoResult<u64> {
    if modulus == 0 {
        return Err(MonoError::InvalidModulus);
    }
    let m = u128::from(modulus);
    let b = boundaries(seq, mode);
    let total = seq.iter().enumerate().fold(0u128, |acc, (i, &v)| {
        let residue = i128::from(v).rem_euclid(m as i128) as u128;
        let term = residue * (b.left[i] as u128 % m) % m * (b.right[i] as u128 % m) % m;
        (acc + term) % m
    });
    Ok(total as u64)
}

/// Range sum reduced modulo `modulus`.
pub fn sum_of_subarray_ranges_mod(seq: &[i64], modulus: u64) -> MonoResult<u64> {
    let max = contribution_sum_mod(seq, Extremum::Max, modulus)?;
    let min = contribution_sum_mod(seq, Extremum::Min, modulus)?;
    let m = u128::from(modulus);
    Ok(((u128::from(max) + m - u128::from(min)) % m) as u64)
}

/// All three aggregates for one sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubarraySums {
    pub minimums: i64,
    pub maximums: i64,
    pub ranges: i64,
}

impl SubarraySums {
    pub fn of(seq: &[i64]) -> Self {
        Self {
            minimums: sum_of_subarray_minimums(seq),
            maximums: sum_of_subarray_maximums(seq),
            ranges: sum_of_subarray_ranges(seq),
        }
    }

    /// Fails if any of the three aggregates does not fit in `i64`.
    pub fn checked(seq: &[i64]) -> MonoResult<Self> {
        Ok(Self {
            minimums: checked_contribution_sum(seq, Extremum::Min)?,
            maximums: checked_contribution_sum(seq, Extremum::Max)?,
            ranges: checked_sum_of_subarray_ranges(seq)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worked_examples() {
        let seq = [1, 4, 3, 2];
        assert_eq!(sum_of_subarray_minimums(&seq), 20);
        assert_eq!(sum_of_subarray_maximums(&seq), 33);
        assert_eq!(sum_of_subarray_ranges(&seq), 13);

        let seq = [3, 1, 2, 4];
        assert_eq!(sum_of_subarray_minimums(&seq), 17);
        assert_eq!(sum_of_subarray_maximums(&seq), 30);
        assert_eq!(sum_of_subarray_ranges(&seq), 13);
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(sum_of_subarray_minimums(&[]), 0);
        assert_eq!(sum_of_subarray_maximums(&[]), 0);
        assert_eq!(sum_of_subarray_ranges(&[]), 0);
        assert_eq!(checked_contribution_sum(&[], Extremum::Min), Ok(0));
        assert_eq!(contribution_sum_mod(&[], Extremum::Max, 7), Ok(0));
    }

    #[test]
    fn test_single_element() {
        assert_eq!(sum_of_subarray_minimums(&[5]), 5);
        assert_eq!(sum_of_subarray_maximums(&[5]), 5);
        assert_eq!(sum_of_subarray_ranges(&[5]), 0);
    }

    #[test]
    fn test_all_equal_values() {
        let seq = [6, 6, 6, 6];
        assert_eq!(sum_of_subarray_minimums(&seq), 6 * 10);
        assert_eq!(sum_of_subarray_maximums(&seq), 6 * 10);
        assert_eq!(sum_of_subarray_ranges(&seq), 0);
    }

    #[test]
    fn test_negative_values() {
        // Subarrays: [-2] [3] [-1] [-2,3] [3,-1] [-2,3,-1]
        let seq = [-2, 3, -1];
        assert_eq!(sum_of_subarray_minimums(&seq), -2 + 3 - 1 - 2 - 1 - 2);
        assert_eq!(sum_of_subarray_maximums(&seq), -2 + 3 - 1 + 3 + 3 + 3);
    }

    #[test]
    fn test_checked_matches_unchecked() {
        let seq = [8, -3, 8, 0, 5, 5, -9];
        for mode in [Extremum::Min, Extremum::Max] {
            assert_eq!(
                checked_contribution_sum(&seq, mode).unwrap(),
                contribution_sum(&seq, mode)
            );
        }
        assert_eq!(
            SubarraySums::checked(&seq).unwrap(),
            SubarraySums::of(&seq)
        );
    }

    #[test]
    fn test_checked_reports_overflow() {
        let seq = [i64::MAX, i64::MAX];
        assert_eq!(
            checked_contribution_sum(&seq, Extremum::Max),
            Err(MonoError::Overflow {
                exact: 3 * i128::from(i64::MAX)
            })
        );
        // Constant sequence: the range sum is zero even though both
        // extremum sums overflow.
        assert_eq!(checked_sum_of_subarray_ranges(&seq), Ok(0));
    }

    #[test]
    fn test_mixed_signs_cancel_without_overflow() {
        // Subarrays: [MAX] [-MAX] [MAX, -MAX]
        let seq = [i64::MAX, -i64::MAX];
        assert_eq!(sum_of_subarray_minimums(&seq), -i64::MAX);
        assert_eq!(sum_of_subarray_maximums(&seq), i64::MAX);
        assert_eq!(
            checked_contribution_sum(&seq, Extremum::Min),
            Ok(-i64::MAX)
        );
        assert_eq!(checked_contribution_sum(&seq, Extremum::Max), Ok(i64::MAX));
        // The range sum itself, 2 * MAX, is the one that overflows.
        assert!(matches!(
            checked_sum_of_subarray_ranges(&seq),
            Err(MonoError::Overflow { .. })
        ));
        assert_eq!(sum_of_subarray_ranges_wide(&seq), 2 * i128::from(i64::MAX));
    }

    #[test]
    fn test_range_fits_when_extremum_sums_do_not() {
        let seq = [i64::MAX / 2, i64::MAX / 2];
        assert_eq!(checked_sum_of_subarray_ranges(&seq), Ok(0));
        assert!(SubarraySums::checked(&seq).is_err());
        assert_eq!(SubarraySums::of(&seq).ranges, 0);
    }

    #[test]
    fn test_classic_modulus() {
        let seq = [3, 1, 2, 4];
        assert_eq!(
            contribution_sum_mod(&seq, Extremum::Min, CLASSIC_MODULUS),
            Ok(17)
        );
        assert_eq!(contribution_sum_mod(&seq, Extremum::Max, 7), Ok(30 % 7));
        assert_eq!(sum_of_subarray_ranges_mod(&seq, 5), Ok(13 % 5));
    }

    #[test]
    fn test_mod_handles_negatives() {
        let seq = [-2, 3, -1];
        let exact = sum_of_subarray_minimums(&seq);
        assert_eq!(
            contribution_sum_mod(&seq, Extremum::Min, 11),
            Ok(exact.rem_euclid(11) as u64)
        );
    }

    #[test]
    fn test_mod_survives_huge_values() {
        let seq = [i64::MAX, i64::MAX, i64::MIN];
        let got = contribution_sum_mod(&seq, Extremum::Max, CLASSIC_MODULUS).unwrap();
        assert!(got < CLASSIC_MODULUS);
    }

    #[test]
    fn test_zero_modulus_rejected() {
        assert_eq!(
            contribution_sum_mod(&[1, 2], Extremum::Min, 0),
            Err(MonoError::InvalidModulus)
        );
    }
}
