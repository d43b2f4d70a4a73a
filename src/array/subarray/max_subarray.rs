use std::ops::{Add, RangeInclusive};

/// The contiguous run of a slice with the greatest sum, as found by [`max_subarray`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxSubarray<T> {
    pub value: T,
    pub start: usize,
    pub end: usize,
}

impl<T> MaxSubarray<T> {
    /// Returns the (inclusive) range of indices making up the run.
    pub const fn range(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// Returns the non-empty contiguous run of `seq` with the greatest sum, or [`None`] if `seq` is
/// empty. When several runs share the greatest sum, the first to end wins.
///
/// Kadane's algorithm: a running `local` sum is carried forward and compared with the best seen so
/// far, then dropped back to zero whenever it goes negative, since a negative prefix can only make
/// any run that follows it smaller. The comparison happens before the reset, so a slice with no
/// positive elements still reports its greatest single element.
pub fn max_subarray<T>(seq: &[T]) -> Option<MaxSubarray<T>>
where
    T: Copy + Default + Add<Output = T> + PartialOrd,
{
    let zero = T::default();
    let mut best: Option<MaxSubarray<T>> = None;
    let mut local = zero;
    let mut store = 0;

    for (i, &element) in seq.iter().enumerate() {
        local = local + element;
        if best.is_none_or(|best| local > best.value) {
            best = Some(MaxSubarray { value: local, start: store, end: i });
        }
        if local < zero {
            local = zero;
            store = i + 1;
        }
    }
    best
}
