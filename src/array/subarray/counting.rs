use std::collections::HashMap;
use std::hash::Hash;
use std::ops::BitXor;

use num_traits::{WrappingAdd, WrappingSub};

/// Returns the number of contiguous runs of `seq` that sum to `target`.
///
/// A run `i..=j` sums to `target` exactly when `prefix(j) - target == prefix(i - 1)`, so a single
/// pass that remembers how often each running total has been seen can count them all. The map is
/// seeded with a single zero to count the runs starting at index 0.
///
/// Running totals wrap around on overflow, so sums are compared modulo the width of `T`. A run
/// whose sum fits in `T` is counted exactly, while one that overflows counts if it wraps to
/// `target`.
///
/// # Time Complexity
/// `O(n)` time and `O(n)` additional memory.
pub fn counting_subarrays<T>(seq: &[T], target: T) -> usize
where
    T: Copy + Default + Eq + Hash + WrappingAdd + WrappingSub,
{
    count_with(
        seq,
        |running, value| running.wrapping_add(&value),
        |running| running.wrapping_sub(&target),
    )
}

/// Returns the number of contiguous runs of `seq` whose elements XOR to `target`.
///
/// Works the same way as [`counting_subarrays`], because XOR is its own inverse:
/// `prefix(j) ^ target == prefix(i - 1)`.
pub fn counting_xor_subarrays<T>(seq: &[T], target: T) -> usize
where
    T: Copy + Default + Eq + Hash + BitXor<Output = T>,
{
    count_with(seq, |running, value| running ^ value, |running| running ^ target)
}

fn count_with<T, F, D>(seq: &[T], accumulate: F, wanted: D) -> usize
where
    T: Copy + Default + Eq + Hash,
    F: Fn(T, T) -> T,
    D: Fn(T) -> T,
{
    let mut seen = HashMap::from([(T::default(), 1_usize)]);
    let mut count = 0;
    let mut running = T::default();

    for &value in seq {
        running = accumulate(running, value);
        if let Some(occurrences) = seen.get(&wanted(running)) {
            count += occurrences;
        }
        *seen.entry(running).or_insert(0) += 1;
    }
    count
}
