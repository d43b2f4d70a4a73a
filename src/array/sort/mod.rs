//! Sorting and rank selection.
//!
//! | Function | Average | Worst | Memory | Stable |
//! |-|-|-|-|-|
//! | [`hoare_quick_sort`] | `O(n log n)` | `O(n^2)` | `O(log n)` work-list | No |
//! | [`lomuto_quick_sort`] | `O(n log n)` | `O(n^2)` | `O(log n)` work-list | No |
//! | [`merge_sort`] | `O(n log n)` | `O(n log n)` | `O(n)` | Yes |
//! | [`quick_select`] | `O(n)` | `O(n^2)` | `O(1)` | - |
//!
//! Both quick sorts are iterative, pushing the ranges left to sort onto an explicit work-list so a
//! bad run of pivots can't overflow the call stack. The larger side of each partition is pushed
//! first, so the smaller one is popped next and the work-list never holds more than `O(log n)`
//! ranges. All element exchanges go through
//! [`slice::swap`].

mod merge_sort;
mod quick_sort;

pub use merge_sort::*;
pub use quick_sort::*;
