//! Rounding of floating point values to integers.
//!
//! There are two implementations. [`host`] is used on general purpose processors and
//! [`device`] inside GPU kernels (`nvptx64`), where there is no `std` and the hardware
//! only rounds directly to 32-bit integers. The active one is picked at compile time;
//! [`device`] is also built for the host so that kernel results can be reproduced there.
//!
//! # Accepted divergence
//!
//! The device has no round-to-nearest instruction for 64-bit integers, so it computes
//! `floor(value + 0.5)`. For `i64` and `u64` destinations the results may differ by one
//! unit from the host on or next to `.5` boundaries: `-2.5` rounds to `-2` on the device
//! and to `-3` on the host, and `0.49999997f32 + 0.5` already rounds up to `1.0` in `f32`.
//! All other destinations give identical results on both targets.

use num_traits::AsPrimitive;

use crate::float::{self, Float};
use crate::{clamp, max_value, SaturatingCast, Scalar};

/// Rounding on general purpose processors.
#[cfg(not(target_arch = "nvptx64"))]
pub mod host {
    use super::*;

    /// Rounds to nearest (ties away from zero) and saturates into `I`.
    #[inline(always)]
    pub fn round_to_integral<I, F>(value: F) -> I
        where F: Float + SaturatingCast<I> {
        clamp(value.round_std())
    }

    /// Multiplies `value` by `max_value::<I>()`, rounds and saturates into `I`.
    #[inline(always)]
    pub fn scale_saturating<I, F>(value: F) -> I
        where I: Scalar + AsPrimitive<F>, F: Float + SaturatingCast<I> {
        clamp(float::round_ties_toward_zero(value * max_value::<I>().as_()))
    }
}

/// Rounding inside GPU kernels.
pub mod device {
    use super::*;

    /// Integer type the hardware rounds to before narrowing to `Self`, following the C
    /// integer promotion rules: 8 and 16-bit types round through `i32`.
    pub trait Promote: Scalar {
        /// The promoted type.
        type Promoted: Scalar;
    }

    macro_rules! promote {
        ($($t:ty => $p:ty),*) => {
            $( impl Promote for $t { type Promoted = $p; } )*
        };
    }

    promote!(i8 => i32, u8 => i32, i16 => i32, u16 => i32, i32 => i32, u32 => u32,
        i64 => i64, u64 => u64);

    /// Float to integer conversion instruction of the device.
    pub trait HardwareRound<P> {
        /// Rounds to the nearest `P`, saturating out-of-range values. NaN gives 0.
        fn hardware_round(self) -> P;
    }

    // 32-bit: round to nearest, ties away from zero.
    macro_rules! hardware_round_nearest {
        ($f:ty => $($p:ty),*) => {
            $(
                impl HardwareRound<$p> for $f {
                    #[inline(always)]
                    fn hardware_round(self) -> $p {
                        float::round_half_away(self).as_()
                    }
                }
            )*
        };
    }

    // 64-bit: round down after adding 0.5.
    macro_rules! hardware_round_biased_floor {
        ($f:ty => $($p:ty),*) => {
            $(
                impl HardwareRound<$p> for $f {
                    #[inline(always)]
                    fn hardware_round(self) -> $p {
                        float::floor(self + <$f as Float>::HALF).as_()
                    }
                }
            )*
        };
    }

    hardware_round_nearest!(f32 => i32, u32);
    hardware_round_nearest!(f64 => i32, u32);
    hardware_round_biased_floor!(f32 => i64, u64);
    hardware_round_biased_floor!(f64 => i64, u64);

    /// Rounds with the hardware instruction of the promoted type and saturates into `I`.
    #[inline(always)]
    pub fn round_to_integral<I, F>(value: F) -> I
        where I: Promote, F: HardwareRound<I::Promoted>, I::Promoted: SaturatingCast<I> {
        clamp(value.hardware_round())
    }

    /// Multiplies `value` by `max_value::<I>()`, rounds and saturates into `I`.
    ///
    /// Unsigned destinations saturate `value` to [0, 1] before scaling, so the product
    /// never leaves `I`'s range.
    #[inline(always)]
    pub fn scale_saturating<I, F>(value: F) -> I
        where I: Scalar + AsPrimitive<F>, F: Float + SaturatingCast<I> + AsPrimitive<I> {
        let max: F = max_value::<I>().as_();
        if I::KIND.is_signed() {
            clamp(float::round_ties_toward_zero(value * max))
        } else {
            float::round_ties_toward_zero(max * float::saturate(value)).as_()
        }
    }
}

#[cfg(target_arch = "nvptx64")]
use device as target;
#[cfg(not(target_arch = "nvptx64"))]
use host as target;

/// Float to integer rounding of the active target.
///
/// Implemented for `f32` and `f64` to every integer type.
pub trait RoundToIntegral<I>: Float {
    /// Rounds to the nearest integer and saturates into `I`.
    fn round_to_integral(self) -> I;

    /// Multiplies by `max_value::<I>()`, rounds (ties toward zero) and saturates into `I`.
    fn scale_saturating(self) -> I;
}

macro_rules! impl_round_to_integral {
    ($f:ty => $($i:ty),*) => {
        $(
            impl RoundToIntegral<$i> for $f {
                #[inline(always)]
                fn round_to_integral(self) -> $i {
                    target::round_to_integral::<$i, $f>(self)
                }

                #[inline(always)]
                fn scale_saturating(self) -> $i {
                    target::scale_saturating::<$i, $f>(self)
                }
            }
        )*
    };
}

impl_round_to_integral!(f32 => u8, i8, u16, i16, u32, i32, u64, i64);
impl_round_to_integral!(f64 => u8, i8, u16, i16, u32, i32, u64, i64);

/// Rounds `value` to the nearest integer, saturating into `I`'s range.
///
/// Ties round away from zero. NaN gives 0.
///
/// # Examples
///
/// ```
/// use scalarconv::round_to_integral;
///
/// assert_eq!(round_to_integral::<u8, _>(100.5f32), 101);
/// assert_eq!(round_to_integral::<i16, _>(-2.5f64), -3);
/// assert_eq!(round_to_integral::<u8, _>(-7.0f32), 0);
/// assert_eq!(round_to_integral::<i32, _>(1e12f64), i32::MAX);
/// ```
#[inline(always)]
pub fn round_to_integral<I, F: RoundToIntegral<I>>(value: F) -> I {
    value.round_to_integral()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_integral() {
        assert_eq!(round_to_integral::<u8, _>(100.2f32), 100);
        assert_eq!(round_to_integral::<u8, _>(100.7f32), 101);
        assert_eq!(round_to_integral::<i32, _>(2.5f32), 3);
        assert_eq!(round_to_integral::<i32, _>(-2.5f32), -3);
        assert_eq!(round_to_integral::<i64, _>(-2.5f64), -3);
        assert_eq!(round_to_integral::<u64, _>(2.5f64), 3);
        assert_eq!(round_to_integral::<u16, _>(70000.0f32), u16::MAX);
        assert_eq!(round_to_integral::<i8, _>(-1000.0f64), i8::MIN);
        assert_eq!(round_to_integral::<u32, _>(f32::NAN), 0);
    }

    #[test]
    fn test_device_nearest_matches_host() {
        let mut x = -300.0f32;
        while x < 300.0 {
            assert_eq!(device::round_to_integral::<i32, f32>(x),
                host::round_to_integral::<i32, f32>(x), "{x}");
            assert_eq!(device::round_to_integral::<u8, f32>(x),
                host::round_to_integral::<u8, f32>(x), "{x}");
            assert_eq!(device::round_to_integral::<i16, f64>(f64::from(x)),
                host::round_to_integral::<i16, f64>(f64::from(x)), "{x}");
            assert_eq!(device::round_to_integral::<u32, f64>(f64::from(x)),
                host::round_to_integral::<u32, f64>(f64::from(x)), "{x}");
            x += 0.25;
        }
        for x in [1e20f32, -1e20, 4294967295.0, 2147483647.0, f32::INFINITY] {
            assert_eq!(device::round_to_integral::<i32, f32>(x),
                host::round_to_integral::<i32, f32>(x), "{x}");
            assert_eq!(device::round_to_integral::<u32, f32>(x),
                host::round_to_integral::<u32, f32>(x), "{x}");
        }
    }

    #[test]
    fn test_device_64bit_divergence() {
        // same away from ties
        assert_eq!(device::round_to_integral::<i64, f64>(2.4), 2);
        assert_eq!(device::round_to_integral::<i64, f64>(-2.6), -3);
        assert_eq!(device::round_to_integral::<u64, f32>(7.7), 8);
        // positive ties agree
        assert_eq!(device::round_to_integral::<i64, f64>(2.5), 3);
        assert_eq!(host::round_to_integral::<i64, f64>(2.5), 3);
        // negative ties differ by one
        assert_eq!(device::round_to_integral::<i64, f64>(-2.5), -2);
        assert_eq!(host::round_to_integral::<i64, f64>(-2.5), -3);
        // the bias itself rounds up in f32
        assert_eq!(device::round_to_integral::<i64, f32>(0.499_999_97), 1);
        assert_eq!(host::round_to_integral::<i64, f32>(0.499_999_97), 0);
        // saturation
        assert_eq!(device::round_to_integral::<i64, f32>(1e30), i64::MAX);
        assert_eq!(device::round_to_integral::<u64, f64>(-5.0), 0);
        assert_eq!(device::round_to_integral::<u64, f64>(f64::NAN), 0);
    }

    #[test]
    fn test_scale_saturating() {
        assert_eq!(host::scale_saturating::<u8, f32>(0.5), 127);
        assert_eq!(host::scale_saturating::<u8, f64>(0.502), 128);
        assert_eq!(host::scale_saturating::<u8, f32>(-3.0), 0);
        assert_eq!(host::scale_saturating::<u8, f32>(3.0), 255);
        assert_eq!(host::scale_saturating::<i8, f32>(-1.0), -127);
        assert_eq!(host::scale_saturating::<i8, f32>(-2.0), -128);
        assert_eq!(host::scale_saturating::<u32, f32>(1.0), u32::MAX);
        assert_eq!(device::scale_saturating::<u8, f32>(0.5), 127);
        assert_eq!(device::scale_saturating::<i16, f64>(2.0), i16::MAX);
    }

    /// The host rounds then clamps, the device saturates then scales. Both must agree
    /// for every unsigned destination, including NaN and overflow of the scale factor.
    #[test]
    fn test_unsigned_scale_saturating_methods_agree() {
        let mut inputs = vec![f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -0.0, 0.0, 1.0,
            -1.0, 1e300, -1e300, 0.5, 1.0 / 255.0, 0.5 / 255.0, 1.5 / 255.0, 254.5 / 255.0,
            0.5 / 65535.0, 1.0 - f64::EPSILON, 1.0 + f64::EPSILON];
        let mut x = -2.0;
        while x <= 2.0 {
            inputs.push(x);
            x += 1.0 / 1024.0 + 1.0 / 3_000_000.0;
        }
        for &v in &inputs {
            assert_eq!(host::scale_saturating::<u8, f64>(v),
                device::scale_saturating::<u8, f64>(v), "{v}");
            assert_eq!(host::scale_saturating::<u16, f64>(v),
                device::scale_saturating::<u16, f64>(v), "{v}");
            assert_eq!(host::scale_saturating::<u32, f64>(v),
                device::scale_saturating::<u32, f64>(v), "{v}");
            assert_eq!(host::scale_saturating::<u64, f64>(v),
                device::scale_saturating::<u64, f64>(v), "{v}");
            #[allow(clippy::cast_possible_truncation)] // test inputs
            let f = v as f32;
            assert_eq!(host::scale_saturating::<u8, f32>(f),
                device::scale_saturating::<u8, f32>(f), "{f}");
            assert_eq!(host::scale_saturating::<u16, f32>(f),
                device::scale_saturating::<u16, f32>(f), "{f}");
            assert_eq!(host::scale_saturating::<u32, f32>(f),
                device::scale_saturating::<u32, f32>(f), "{f}");
            assert_eq!(host::scale_saturating::<u64, f32>(f),
                device::scale_saturating::<u64, f32>(f), "{f}");
        }
    }
}
