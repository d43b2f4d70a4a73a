use std::hint;

pub(crate) trait OptionExtension<T> {
    /// Acts similarly to [`Option::unwrap`] but with [`unreachable!`] in the none branch for debug
    /// builds and [`unreachable_unchecked`](hint::unreachable_unchecked) for release builds.
    ///
    /// Used for the cursors of the slow / fast traversals, where the slow cursor trails a cursor
    /// that has already seen the node it is about to step onto.
    ///
    /// # Safety
    /// The caller must guarantee that the option is [`Some`].
    unsafe fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    unsafe fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None if cfg!(debug_assertions) => unreachable!(),
            // SAFETY: It is the responsibility of the caller to ensure that None is impossible when
            // invoking this method.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }
}
