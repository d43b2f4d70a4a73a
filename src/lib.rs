//! This crate is a collection of classic algorithms, each written out by hand.
//!
//! # Purpose
//! This crate is something I'm working on as a learning experience, with no expectation for it to
//! be used in production. Writing these algorithms out helps me to understand where their costs
//! come from (branches, memory access patterns, allocation) rather than only knowing their
//! complexity on paper.
//!
//! # Contents
//! - [`array`]: searching (linear, binary, exponential, jump, interpolation), sorting (Hoare and
//!   Lomuto quick sort, merge sort), quick select and subarray analytics (prefix sums, Kadane's
//!   maximum subarray, counting runs with a given sum or XOR).
//! - [`linked`]: a singly linked list and the slow / fast pointer algorithms built on it (middle,
//!   cycle detection, splitting, merge sort, reversal).
//! - [`string`]: the sliding window longest unique substring and Rabin-Karp search.
//!
//! Each module sits behind a Cargo feature of the same name, all enabled by default.
//!
//! # Error Handling
//! Absence isn't an error here: a search that doesn't find its target returns [`None`], because
//! `0` is a perfectly good index. Algorithms with preconditions (such as a binary search requiring
//! sorted input) don't check them, they just produce an unspecified result without panicking.
//!
//! Where an argument can actually be invalid, like an out of bounds range, there are two versions
//! of the method: `try_*`, which returns a strongly typed [`Result`], and a shorthand that panics
//! with the error's message. The errors are structs implementing
//! [`Error`](std::error::Error), combined into enums for static dispatch.
//!
//! # Dependencies
//! This crate depends on some derive macros because they remove the need for some very repetitive
//! programming, on `num-traits` for wrapping arithmetic over any integer type, and optionally on
//! `serde` so a list can be serialized as a plain sequence.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "array")]
pub mod array;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "string")]
pub mod string;
pub mod traits;

pub(crate) mod util;

#[doc(inline)]
pub use util::error::{CapacityOverflow, IndexOutOfBounds, RangeError, ReversedRange};
