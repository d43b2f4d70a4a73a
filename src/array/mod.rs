//! Algorithms over contiguous sequences, borrowed as slices.
//!
//! # Purpose
//! Each function here is a self-contained textbook algorithm. Nothing is validated up front: a
//! search that requires sorted input will happily run on unsorted input and return a meaningless
//! (but never panicking) result.
//!
//! # Method
//! Everything is written against `&[T]` / `&mut [T]` rather than a specific collection, so they
//! work with arrays, boxed slices and [`Vec`]s alike.

pub mod search;
pub mod sort;
pub mod subarray;

#[doc(inline)]
pub use search::{binary, exponential, interpolation, jump, linear};
#[doc(inline)]
pub use sort::{hoare_quick_sort, lomuto_quick_sort, merge_sort, quick_select};
#[doc(inline)]
pub use subarray::{
    MaxSubarray, PrefixSum, counting_subarrays, counting_xor_subarrays, max_subarray,
};
