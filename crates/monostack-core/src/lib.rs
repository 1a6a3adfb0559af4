//! Monotonic-stack range aggregates.
//!
//! One stack pass answers "nearest smaller/greater element" queries. Two such
//! passes with a tie-broken pair of relations give, for every index, the
//! number of subarrays in which it is the minimum (or maximum), and from those
//! counts the sum of subarray minimums, maximums and ranges in O(n).
//!
//! ```
//! use monostack_core::{sum_of_subarray_minimums, sum_of_subarray_ranges};
//!
//! assert_eq!(sum_of_subarray_minimums(&[3, 1, 2, 4]), 17);
//! assert_eq!(sum_of_subarray_ranges(&[1, 4, 3, 2]), 13);
//! ```

pub mod boundary;
pub mod contribution;
pub mod error;
pub mod extremum;
pub mod nearest;
pub mod oracle;
pub mod sequence;
pub mod stack;
pub mod verify;


pub use boundary::{boundaries, Boundaries};
pub use contribution::{
    checked_contribution_sum, checked_sum_of_subarray_ranges, contribution_sum,
    contribution_sum_mod, contribution_sum_wide, sum_of_subarray_maximums,
    sum_of_subarray_minimums, sum_of_subarray_ranges, sum_of_subarray_ranges_mod,
    sum_of_subarray_ranges_wide, SubarraySums, CLASSIC_MODULUS,
};
pub use error::{MonoError, MonoResult};
pub use extremum::{Extremum, Relation, Side};
pub use nearest::{
    nearest, nearest_circular, nearest_with, next_greater, next_greater_circular, next_smaller,
    previous_greater, previous_smaller, values_or,
};
pub use sequence::parse_sequence;
pub use stack::ArrayStack;
pub use verify::{check_sequence, verify_exhaustive, AllSequences, Mismatch, VerifyReport};
