use crate::{Bits, Float};

/// The factor by which floats are scaled before rounding away insignificant
/// digits for equality testing and hashing.
#[cfg(feature = "f64")]
pub(crate) const ROUNDING_FACTOR: Float = 1e14;
#[cfg(not(feature = "f64"))]
pub(crate) const ROUNDING_FACTOR: Float = 1e5;

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping
/// the sign of negative zeros, and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a
/// bit string. It is only public because the [`assert_close_enough`] test
/// macro uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_to_eq_bits() {
        assert_eq!(to_eq_bits(0.0), to_eq_bits(-0.0));
        assert_eq!(to_eq_bits(Float::NAN), to_eq_bits(0.0));
        assert_eq!(to_eq_bits(0.1 + 0.2), to_eq_bits(0.3));
        assert_ne!(to_eq_bits(0.3), to_eq_bits(0.30001));
    }

    #[test]
    fn test_assert_close_enough() {
        assert_close_enough!(0.1 + 0.2, 0.3);
        assert_close_enough!(-0.0, 0.0);
    }
}
