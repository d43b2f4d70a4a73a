//! Traits shared between the algorithm modules.

mod interpolate;

pub use interpolate::*;
