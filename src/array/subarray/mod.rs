//! Analytics over contiguous runs of a slice.
//!
//! - [`PrefixSum`] answers inclusive range sums in `O(1)` after an `O(n)` precomputation.
//! - [`max_subarray`] finds the contiguous run with the greatest sum (Kadane's algorithm).
//! - [`counting_subarrays`] and [`counting_xor_subarrays`] count the runs that sum (or XOR) to a
//!   target in a single pass.

mod counting;
mod max_subarray;
mod prefix_sum;
mod tests;

pub use counting::*;
pub use max_subarray::*;
pub use prefix_sum::*;
