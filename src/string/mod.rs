//! Substring algorithms over UTF-8 text.
//!
//! - [`longest_unique_substring`] is the sliding window pattern: two indices bound a window that
//!   only ever moves forward, with a registry of where each character was last seen.
//! - [`rabin_karp`] turns every window of the text into a number with a [`RollingHash`], so each
//!   shift of the window costs `O(1)` rather than `O(m)`.

mod rabin_karp;
mod sliding_window;
mod tests;

pub use rabin_karp::*;
pub use sliding_window::*;
