use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index that doesn't refer to an element of the collection it was used with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The offending index.
    pub index: usize,
    /// The number of elements in the collection at the time.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// An inclusive range where the start comes after the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReversedRange {
    /// The (inclusive) start of the range.
    pub start: usize,
    /// The (inclusive) end of the range.
    pub end: usize,
}

impl Display for ReversedRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Range start {} is greater than range end {}!", self.start, self.end)
    }
}

impl Error for ReversedRange {}

/// Everything that can go wrong when an inclusive `start..=end` range is applied to a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum RangeError {
    /// The end of the range is past the end of the collection.
    IndexOutOfBounds(IndexOutOfBounds),
    /// The start of the range comes after its end.
    ReversedRange(ReversedRange),
}

/// Checks that `start..=end` is a non-empty, in-bounds range for a collection of `len` elements.
pub(crate) const fn check_inclusive_range(
    start: usize,
    end: usize,
    len: usize,
) -> Result<(), RangeError> {
    if start > end {
        Err(RangeError::ReversedRange(ReversedRange { start, end }))
    } else if end >= len {
        Err(RangeError::IndexOutOfBounds(IndexOutOfBounds { index: end, len }))
    } else {
        Ok(())
    }
}

/// A collection grew past the number of elements a [`usize`] can count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}
