use std::num::NonZero;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// The number of nodes in a list that has at least one. Empty lists don't store a length at all.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) struct Length(pub NonZero<usize>);

impl Length {
    pub fn new(value: usize) -> Option<Length> {
        NonZero::new(value).map(Length)
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// # Panics
    /// Panics if the length would overflow a usize.
    pub fn increment(self) -> Length {
        Length(self.0.checked_add(1).ok_or(CapacityOverflow).throw())
    }

    /// Returns the length after removing one node, or [`None`] if no nodes would remain.
    pub fn decrement(self) -> Option<Length> {
        Length::new(self.get() - 1)
    }
}

pub(crate) const ONE: Length = Length(NonZero::<usize>::MIN);
