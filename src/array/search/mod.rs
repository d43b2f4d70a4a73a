//! Searching for the index of a value within a slice.
//!
//! | Function | Precondition | Complexity |
//! |-|-|-|
//! | [`linear`] | None | `O(n)` |
//! | [`binary`] | Sorted ascending | `O(log n)` |
//! | [`exponential`] | Sorted ascending | `O(log i)` |
//! | [`jump`] | Sorted ascending | `O(sqrt n)` |
//! | [`interpolation`] | Sorted ascending, uniformly distributed | `O(log log n)` average |
//!
//! Where `i` is the index of the value in question.
//!
//! All searches return the index of the *first* element equal to the target, matching
//! [`Iterator::position`], so they agree with each other on slices containing duplicates.

mod search;

pub use search::*;
