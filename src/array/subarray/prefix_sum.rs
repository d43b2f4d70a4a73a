use std::fmt::{self, Debug, Formatter};
use num_traits::{WrappingAdd, WrappingSub};

#[doc(inline)]
pub use crate::util::error::{IndexOutOfBounds, RangeError, ReversedRange};
use crate::util::error::check_inclusive_range;
use crate::util::result::ResultExtension;

/// A snapshot of the running totals of a slice, answering the sum of any inclusive range in
/// constant time.
///
/// The sums are copied out of the slice on construction, so later changes to the slice aren't
/// reflected in the results.
///
/// Running totals wrap around on overflow. A range sum is the difference of two totals, so it is
/// still exact whenever the sum of that range fits in `T`, no matter how far the totals wrapped.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `new` | `O(n)` |
/// | `range` | `O(1)` |
#[derive(Clone, PartialEq, Eq)]
pub struct PrefixSum<T> {
    sums: Box<[T]>,
}

impl<T> PrefixSum<T>
where
    T: Copy + Default + WrappingAdd + WrappingSub,
{
    /// Precomputes the running totals of `seq`.
    pub fn new(seq: &[T]) -> PrefixSum<T> {
        let mut running = T::default();
        PrefixSum {
            sums: seq.iter()
                .map(|&value| {
                    running = running.wrapping_add(&value);
                    running
                })
                .collect(),
        }
    }

    /// Returns the sum of the elements from `start` to `end`, both inclusive, panicking on a
    /// failure.
    ///
    /// # Panics
    /// Panics if `end` is out of bounds of the original slice or `start` is greater than `end`.
    pub fn range(&self, start: usize, end: usize) -> T {
        self.try_range(start, end).throw()
    }

    /// Returns the sum of the elements from `start` to `end`, both inclusive, returning an [`Err`]
    /// on a failure rather than panicking.
    pub fn try_range(&self, start: usize, end: usize) -> Result<T, RangeError> {
        check_inclusive_range(start, end, self.sums.len())?;
        Ok(match start.checked_sub(1) {
            Some(before) => self.sums[end].wrapping_sub(&self.sums[before]),
            None => self.sums[end],
        })
    }

    /// Returns the sum of the whole slice, or the default value (zero) if it was empty. Like any
    /// range, this wraps if the sum doesn't fit in `T`.
    pub fn total(&self) -> T {
        self.sums.last().copied().unwrap_or_default()
    }
}

impl<T> PrefixSum<T> {
    /// Returns the length of the slice this PrefixSum was built from.
    pub const fn len(&self) -> usize {
        self.sums.len()
    }

    /// Returns true if this PrefixSum was built from an empty slice.
    pub const fn is_empty(&self) -> bool {
        self.sums.is_empty()
    }
}

impl<T: Debug> Debug for PrefixSum<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixSum")
            .field("sums", &self.sums)
            .finish()
    }
}
