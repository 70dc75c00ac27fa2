//! Floating point helpers built on `core` only.
//!
//! Kernel code has no `std` and therefore no `f32::round()` or `f32::floor()`, so the
//! rounding used there is implemented with truncating casts and bit manipulation.

use core::ops::{Add, Div, Mul, Sub};

use crate::{cast, Scalar};

/// Floating point sample type.
pub trait Float:
    Scalar + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Div<Output = Self>
{
    /// 0.0
    const ZERO: Self;
    /// 0.5
    const HALF: Self;
    /// 1.0
    const ONE: Self;
    /// 2.0
    const TWO: Self;
    /// 2^(mantissa bits). Every value of at least this magnitude is an integer.
    const INTEGRAL_THRESHOLD: Self;

    /// Returns true if the value is NaN.
    fn is_nan(self) -> bool;

    /// Returns the absolute value.
    fn magnitude(self) -> Self;

    /// Returns the value with the sign bit of `sign`.
    fn with_sign_of(self, sign: Self) -> Self;

    /// Truncates towards zero. Exact only below `INTEGRAL_THRESHOLD` in magnitude.
    fn trunc_small(self) -> Self;

    /// Rounds to nearest, ties away from zero, using the standard library.
    #[cfg(not(target_arch = "nvptx64"))]
    fn round_std(self) -> Self;
}

macro_rules! impl_float {
    ($t:ty, $sign_mask:expr, $threshold:expr, $trunc:path) => {
        impl Float for $t {
            const ZERO: Self = 0.0;
            const HALF: Self = 0.5;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
            const INTEGRAL_THRESHOLD: Self = $threshold;

            #[inline(always)]
            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }

            #[inline(always)]
            fn magnitude(self) -> Self {
                <$t>::from_bits(self.to_bits() & !$sign_mask)
            }

            #[inline(always)]
            fn with_sign_of(self, sign: Self) -> Self {
                <$t>::from_bits((self.to_bits() & !$sign_mask) | (sign.to_bits() & $sign_mask))
            }

            #[inline(always)]
            fn trunc_small(self) -> Self {
                $trunc(self)
            }

            #[cfg(not(target_arch = "nvptx64"))]
            #[inline(always)]
            fn round_std(self) -> Self {
                <$t>::round(self)
            }
        }
    };
}

impl_float!(f32, 0x8000_0000u32, 8_388_608.0, cast::f32_trunc_small);
impl_float!(f64, 0x8000_0000_0000_0000u64, 4_503_599_627_370_496.0, cast::f64_trunc_small);

/// Rounds to nearest, ties away from zero.
///
/// Gives the same results as `f32::round()` and `f64::round()`.
#[inline(always)]
pub fn round_half_away<F: Float>(value: F) -> F {
    let mag = value.magnitude();
    if value.is_nan() || mag >= F::INTEGRAL_THRESHOLD {
        return value;
    }
    let int = mag.trunc_small();
    let rounded = if mag - int >= F::HALF { int + F::ONE } else { int };
    rounded.with_sign_of(value)
}

/// Rounds to nearest, ties toward zero: 127.5 rounds to 127 and -127.5 to -127.
#[inline(always)]
pub fn round_ties_toward_zero<F: Float>(value: F) -> F {
    let mag = value.magnitude();
    if value.is_nan() || mag >= F::INTEGRAL_THRESHOLD {
        return value;
    }
    let int = mag.trunc_small();
    let rounded = if mag - int > F::HALF { int + F::ONE } else { int };
    rounded.with_sign_of(value)
}

/// Rounds towards negative infinity.
#[inline(always)]
pub fn floor<F: Float>(value: F) -> F {
    if value.is_nan() || value.magnitude() >= F::INTEGRAL_THRESHOLD {
        return value;
    }
    let int = value.trunc_small();
    if int > value { int - F::ONE } else { int }
}

/// Clamps to [0, 1]. NaN becomes 0.
#[inline(always)]
pub fn saturate<F: Float>(value: F) -> F {
    if value > F::ONE {
        F::ONE
    } else if value > F::ZERO {
        value
    } else {
        F::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_away() {
        assert_eq!(round_half_away(0.0f32), 0.0);
        assert_eq!(round_half_away(0.4f32), 0.0);
        assert_eq!(round_half_away(0.5f32), 1.0);
        assert_eq!(round_half_away(1.5f32), 2.0);
        assert_eq!(round_half_away(2.5f32), 3.0);
        assert_eq!(round_half_away(-2.5f32), -3.0);
        assert_eq!(round_half_away(-0.49f64), 0.0);
        assert!(round_half_away(-0.49f64).is_sign_negative());
        assert_eq!(round_half_away(0.499_999_97f32), 0.0);
        assert_eq!(round_half_away(8_388_609.0f32), 8_388_609.0);
        assert_eq!(round_half_away(1e300f64), 1e300);
        assert_eq!(round_half_away(f32::INFINITY), f32::INFINITY);
        assert!(round_half_away(f64::NAN).is_nan());
    }

    #[test]
    fn test_round_half_away_matches_std() {
        let mut x = -1000.0f32;
        while x < 1000.0 {
            assert_eq!(round_half_away(x), x.round(), "{x}");
            x += 0.125;
        }
        for x in [4_503_599_627_370_495.5f64, -4_503_599_627_370_494.5, 0.5, -0.5, 123.456] {
            assert_eq!(round_half_away(x), x.round(), "{x}");
        }
    }

    #[test]
    fn test_round_ties_toward_zero() {
        assert_eq!(round_ties_toward_zero(127.5f32), 127.0);
        assert_eq!(round_ties_toward_zero(127.51f32), 128.0);
        assert_eq!(round_ties_toward_zero(-127.5f32), -127.0);
        assert_eq!(round_ties_toward_zero(-127.6f64), -128.0);
        assert_eq!(round_ties_toward_zero(0.5f64), 0.0);
        assert_eq!(round_ties_toward_zero(128.01f64), 128.0);
        assert_eq!(round_ties_toward_zero(2.0f32), 2.0);
        assert_eq!(round_ties_toward_zero(1e20f32), 1e20);
    }

    #[test]
    fn test_floor() {
        assert_eq!(floor(0.3f32), 0.0);
        assert_eq!(floor(-0.3f32), -1.0);
        assert_eq!(floor(-2.0f64), -2.0);
        assert_eq!(floor(2.999f64), 2.0);
        assert_eq!(floor(-1e30f32), -1e30);
        assert!(floor(f32::NAN).is_nan());
    }

    #[test]
    fn test_saturate() {
        assert_eq!(saturate(-0.5f32), 0.0);
        assert_eq!(saturate(0.25f32), 0.25);
        assert_eq!(saturate(7.0f64), 1.0);
        assert_eq!(saturate(f64::NAN), 0.0);
        assert_eq!(saturate(f32::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_sign_helpers() {
        assert_eq!((-3.5f32).magnitude(), 3.5);
        assert_eq!(2.0f64.with_sign_of(-0.0), -2.0);
        assert_eq!((-2.0f32).with_sign_of(1.0), 2.0);
    }
}
