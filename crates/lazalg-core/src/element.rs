//! Element contract for vector and matrix entries
//!
//! Elements are small signed numeric `Copy` types. Besides the ring
//! operations provided by [`Num`], the engine needs absolute values,
//! tolerance-aware equality and the scalar-division rule: floating-point
//! types divide by multiplying with the reciprocal, integral types divide
//! directly.

use std::fmt::{Debug, Display};
use std::ops::Neg;

use scirs2_core::numeric::{Num, NumCast};

use crate::config::Accuracy;

/// Numeric element stored in containers and produced by expressions
pub trait Element:
    Copy + Debug + Display + PartialOrd + Num + NumCast + Neg<Output = Self> + Send + Sync + 'static
{
    /// Whether the type is a floating-point type
    const IS_FLOAT: bool;

    /// Absolute value
    fn abs(self) -> Self;

    /// Whether the value equals the default (zero) value
    fn is_default(&self) -> bool {
        self.is_zero()
    }

    /// Tolerance-aware equality; exact for integral types
    fn equal(self, other: Self, accuracy: &Accuracy) -> bool;

    /// Precompute the divisor representation of a nonzero scalar
    ///
    /// Floating-point types store the reciprocal, integral types the scalar itself.
    fn divisor(scalar: Self) -> Self;

    /// Apply a divisor produced by [`Element::divisor`]
    fn apply_divisor(self, divisor: Self) -> Self;

    /// Lossy conversion from `f64` used by random generation
    fn from_f64(value: f64) -> Self;

    /// Lossy conversion into `f64`
    fn to_f64(self) -> f64;
}

macro_rules! float_element {
    ($($t:ty),*) => {$(
        impl Element for $t {
            const IS_FLOAT: bool = true;

            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            fn equal(self, other: Self, accuracy: &Accuracy) -> bool {
                if self == other {
                    return true;
                }
                let (a, b) = (self as f64, other as f64);
                (a - b).abs() <= accuracy.tolerance(a, b)
            }

            #[inline]
            fn divisor(scalar: Self) -> Self {
                1.0 / scalar
            }

            #[inline]
            fn apply_divisor(self, divisor: Self) -> Self {
                self * divisor
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

macro_rules! int_element {
    ($($t:ty),*) => {$(
        impl Element for $t {
            const IS_FLOAT: bool = false;

            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            #[inline]
            fn equal(self, other: Self, _accuracy: &Accuracy) -> bool {
                self == other
            }

            #[inline]
            fn divisor(scalar: Self) -> Self {
                scalar
            }

            #[inline]
            fn apply_divisor(self, divisor: Self) -> Self {
                self / divisor
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                <$t as NumCast>::from(value.round()).unwrap_or_else(<$t as scirs2_core::numeric::Zero>::zero)
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

float_element!(f32, f64);
int_element!(i8, i16, i32, i64, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_division_uses_reciprocal() {
        let d = <f64 as Element>::divisor(4.0);
        assert_eq!(d, 0.25);
        assert_eq!(3.0f64.apply_divisor(d), 0.75);
    }

    #[test]
    fn test_integral_division_truncates() {
        let d = <i32 as Element>::divisor(2);
        assert_eq!(d, 2);
        assert_eq!(7i32.apply_divisor(d), 3);
        assert_eq!((-7i32).apply_divisor(d), -3);
    }

    #[test]
    fn test_equal_with_tolerance() {
        let acc = Accuracy::exact().with_relative(1e-8);
        assert!(1.0f64.equal(1.0 + 1e-12, &acc));
        assert!(!1.0f64.equal(1.0 + 1e-6, &acc));
        assert!(0.0f64.equal(1e-10, &acc));
        assert!(!3i32.equal(4, &acc));
    }

    #[test]
    fn test_is_default() {
        assert!(0.0f32.is_default());
        assert!(!(-1i64).is_default());
        assert_eq!(<i16 as Element>::from_f64(2.6), 3);
        assert_eq!(<i8 as Element>::from_f64(1000.0), 0);
    }
}
