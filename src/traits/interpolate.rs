/// A totally ordered numeric type whose values can be placed on a real number line, allowing an
/// interpolation search to predict where a value sits between two others.
pub trait Interpolate: PartialOrd + Copy {
    /// Returns the position of `self` on the number line, possibly losing precision.
    fn position(self) -> f64;

    /// Returns where `self` sits between `low` and `high` as a fraction, where `low` is `0.0` and
    /// `high` is `1.0`. Returns [`None`] when `low` and `high` are equal, because the fraction
    /// would require dividing by zero.
    fn fraction_between(self, low: Self, high: Self) -> Option<f64> {
        let span = high.position() - low.position();
        if span == 0.0 {
            None
        } else {
            Some((self.position() - low.position()) / span)
        }
    }
}

macro_rules! impl_interpolate {
    ($($ty:ty),*) => {
        $(
            impl Interpolate for $ty {
                fn position(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_interpolate!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
