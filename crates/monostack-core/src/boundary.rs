use serde::Serialize;

use crate::extremum::{Extremum, Side};
use crate::nearest::nearest;

/// Per-index span counts for one extremum mode.
///
/// `left[i]` is how many left edges (ending at `i`) keep `seq[i]` as the
/// owning extremum, `right[i]` the same for right edges. Their product is the
/// number of subarrays owned by `i`, and the products over all indices
/// partition the `n(n+1)/2` subarrays exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Boundaries {
    pub mode: Extremum,
    pub left: Vec<usize>,
    pub right: Vec<usize>,
}

impl Boundaries {
    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Number of subarrays whose extremum is owned by index `i`.
    pub fn count(&self, i: usize) -> usize {
        self.left[i] * self.right[i]
    }

    pub fn counts(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).map(|i| self.count(i))
    }

    /// Sum of all owned counts. Equals `n(n+1)/2` for any input.
    pub fn total_subarrays(&self) -> usize {
        self.counts().sum()
    }
}

/// Computes the tie-broken boundary counts for `mode`.
///
/// The left pass stops at the nearest strictly dominating element and the
/// right pass at the nearest dominating-or-equal one, so among equal values
/// the rightmost occurrence owns every subarray they share.
pub fn boundaries<T: Ord>(seq: &[T], mode: Extremum) -> Boundaries {
    let n = seq.len();

    let left = nearest(seq, Side::Previous, mode.left_relation())
        .into_iter()
        .enumerate()
        .map(|(i, stop)| stop.map_or(i + 1, |j| i - j))
        .collect();

    let right = nearest(seq, Side::Next, mode.right_relation())
        .into_iter()
        .enumerate()
        .map(|(i, stop)| stop.map_or(n - i, |j| j - i))
        .collect();

    Boundaries { mode, left, right }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::subarray_count;

    #[test]
    fn test_min_boundaries_worked_example() {
        let b = boundaries(&[1, 4, 3, 2], Extremum::Min);
        assert_eq!(b.left, vec![1, 1, 2, 3]);
        assert_eq!(b.right, vec![4, 1, 1, 1]);
        assert_eq!(b.counts().collect::<Vec<_>>(), vec![4, 1, 2, 3]);
        assert_eq!(b.total_subarrays(), 10);
    }

    #[test]
    fn test_max_boundaries_worked_example() {
        let b = boundaries(&[1, 4, 3, 2], Extremum::Max);
        assert_eq!(b.left, vec![1, 2, 1, 1]);
        assert_eq!(b.right, vec![1, 3, 2, 1]);
        assert_eq!(b.total_subarrays(), 10);
    }

    #[test]
    fn test_duplicates_rightmost_owns() {
        let b = boundaries(&[7, 7, 7, 7], Extremum::Min);
        assert_eq!(b.left, vec![1, 2, 3, 4]);
        assert_eq!(b.right, vec![1, 1, 1, 1]);
        assert_eq!(b.total_subarrays(), subarray_count(4));

        let b = boundaries(&[7, 7, 7, 7], Extremum::Max);
        assert_eq!(b.total_subarrays(), subarray_count(4));
    }

    #[test]
    fn test_counts_are_at_least_one() {
        let seq = [2, -1, 2, 0, -1, 3, 3];
        for mode in [Extremum::Min, Extremum::Max] {
            let b = boundaries(&seq, mode);
            assert!(b.left.iter().all(|&c| c >= 1));
            assert!(b.right.iter().all(|&c| c >= 1));
            assert_eq!(b.total_subarrays(), subarray_count(seq.len()));
        }
    }

    #[test]
    fn test_empty_sequence() {
        let empty: [i64; 0] = [];
        let b = boundaries(&empty, Extremum::Min);
        assert!(b.is_empty());
        assert_eq!(b.total_subarrays(), 0);
    }
}
