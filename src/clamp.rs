//! Saturating casts between scalar types.
//!
//! Every supported `(From, To)` pair gets exactly one implementation of
//! [`SaturatingCast`], chosen from the table at the bottom of this file. Each table row
//! is checked at compile time against [`needs_clamp`], so a pair listed under a
//! non-clamping rule can't silently lose the range check and vice versa.

use num_traits::AsPrimitive;

#[cfg(feature = "internal-no-panic")]
use no_panic::no_panic;

use crate::{cast, max_value, min_value, Scalar, ScalarKind};

/// Converts a value into `To`, clipping it to `To`'s representable range.
///
/// Implemented for every pair of supported scalar types.
pub trait SaturatingCast<To>: Scalar {
    /// Returns `self` clipped into the range of `To`.
    fn saturating_cast(self) -> To;
}

/// Converts `value` to `To`, clipping out-of-range values to `To`'s min/max.
///
/// Converting to `bool` tests for non-zero instead. NaN converts to 0 for integer
/// destinations.
///
/// # Examples
///
/// ```
/// use scalarconv::clamp;
///
/// assert_eq!(clamp::<u8, _>(-5), 0);
/// assert_eq!(clamp::<i8, _>(200u32), 127);
/// assert_eq!(clamp::<i32, _>(0x8000_0000u32), 0x7fff_ffff);
/// assert_eq!(clamp::<u32, _>(-1), 0);
/// assert_eq!(clamp::<u16, _>(1e10f32), 65535);
/// ```
#[inline(always)]
pub fn clamp<To, From: SaturatingCast<To>>(value: From) -> To {
    value.saturating_cast()
}

/// Returns true if converting from `from` to `to` may produce a value outside `to`'s
/// range, so that the conversion has to clip.
pub const fn needs_clamp(from: ScalarKind, to: ScalarKind) -> bool {
    if matches!(from, ScalarKind::Bool) || matches!(to, ScalarKind::Bool) {
        return false;
    }
    let from_fp = from.is_float();
    let to_fp = to.is_float();
    // to a smaller type of the same kind
    (from_fp == to_fp && to.size() < from.size()) ||
    // float range exceeds any integer range
    (from_fp && !to_fp) ||
    // negative values clip to zero
    (from.is_signed() && to.is_unsigned()) ||
    // the value may not fit in the positive range of a signed integer of the same or
    // smaller size
    (from.is_unsigned() && to.is_signed_integer() && to.size() <= from.size())
}

macro_rules! check_table_row {
    ($from:ty => $to:ty, $clamps:expr) => {
        const _: () = assert!(
            needs_clamp(<$from as Scalar>::KIND, <$to as Scalar>::KIND) == $clamps,
            concat!("clamp rule mismatch: ", stringify!($from), " => ", stringify!($to))
        );
    };
}

/// Value conversion without clipping: widening, integer to float, and identity.
macro_rules! clamp_none {
    ($from:ty => $($to:ty),+) => {
        $(
            impl SaturatingCast<$to> for $from {
                #[inline(always)]
                fn saturating_cast(self) -> $to {
                    self.as_()
                }
            }
            check_table_row!($from => $to, false);
        )+
    };
}

/// Two-sided clip with comparisons made in the source type. Used for signed to signed,
/// float to float and float to integer.
macro_rules! clamp_in_source {
    ($from:ty => $($to:ty),+) => {
        $(
            impl SaturatingCast<$to> for $from {
                #[inline(always)]
                fn saturating_cast(self) -> $to {
                    let lo: $from = min_value::<$to>().as_();
                    let hi: $from = max_value::<$to>().as_();
                    if self <= lo {
                        min_value::<$to>()
                    } else if self >= hi {
                        max_value::<$to>()
                    } else {
                        self.as_()
                    }
                }
            }
            check_table_row!($from => $to, true);
        )+
    };
}

/// Signed integer to unsigned: negative values become zero, then the value is compared
/// as the unsigned type of the same width. When `$to` is wider than `$from`, its maximum
/// truncates to all ones and the upper clip never triggers.
macro_rules! clamp_signed_to_unsigned {
    ($from:ty as $unsigned:ty => $($to:ty),+) => {
        $(
            impl SaturatingCast<$to> for $from {
                #[inline(always)]
                fn saturating_cast(self) -> $to {
                    if self <= 0 {
                        return 0;
                    }
                    let value: $unsigned = self.as_();
                    let hi: $unsigned = max_value::<$to>().as_();
                    if value >= hi { max_value::<$to>() } else { value.as_() }
                }
            }
            check_table_row!($from => $to, true);
        )+
    };
}

/// Unsigned to a narrower unsigned or a signed type of the same or smaller size: the
/// lower bound is zero, so only the upper bound is clipped.
macro_rules! clamp_upper {
    ($from:ty => $($to:ty),+) => {
        $(
            impl SaturatingCast<$to> for $from {
                #[inline(always)]
                fn saturating_cast(self) -> $to {
                    let hi: $from = max_value::<$to>().as_();
                    if self >= hi { max_value::<$to>() } else { self.as_() }
                }
            }
            check_table_row!($from => $to, true);
        )+
    };
}

/// Anything to bool tests for non-zero. NaN is true.
macro_rules! clamp_to_bool {
    ($($from:ty),+) => {
        $(
            impl SaturatingCast<bool> for $from {
                #[inline(always)]
                #[allow(clippy::float_cmp)] // -0.0 must compare equal to 0.0
                fn saturating_cast(self) -> bool {
                    self != <$from>::default()
                }
            }
            check_table_row!($from => bool, false);
        )+
    };
}

/// Bool to anything is 0 or 1.
macro_rules! clamp_from_bool {
    ($($to:ty),+) => {
        $(
            impl SaturatingCast<$to> for bool {
                #[inline(always)]
                fn saturating_cast(self) -> $to {
                    u8::from(self).as_()
                }
            }
            check_table_row!(bool => $to, false);
        )+
    };
}

/// Dedicated 32-bit paths. The results are the same as the generic rules give.
macro_rules! clamp_fast_path {
    ($from:ty => $to:ty, $func:ident) => {
        impl SaturatingCast<$to> for $from {
            #[inline(always)]
            fn saturating_cast(self) -> $to {
                $func(self)
            }
        }
        check_table_row!($from => $to, true);
    };
}

#[cfg_attr(feature = "internal-no-panic", no_panic)]
#[inline(always)]
fn clamp_u32_to_i32(value: u32) -> i32 {
    if value & 0x8000_0000 != 0 { 0x7fff_ffff } else { cast::u32_to_i32(value) }
}

#[cfg_attr(feature = "internal-no-panic", no_panic)]
#[inline(always)]
fn clamp_i32_to_u32(value: i32) -> u32 {
    if value < 0 { 0 } else { cast::i32_to_u32(value) }
}

#[cfg_attr(feature = "internal-no-panic", no_panic)]
#[inline(always)]
fn clamp_i64_to_i32(value: i64) -> i32 {
    if value < i64::from(i32::MIN) {
        i32::MIN
    } else if value > i64::from(i32::MAX) {
        i32::MAX
    } else {
        cast::i64_to_i32(value)
    }
}

#[cfg_attr(feature = "internal-no-panic", no_panic)]
#[inline(always)]
fn clamp_u64_to_i32(value: u64) -> i32 {
    if value > 0x7fff_ffff { i32::MAX } else { cast::u64_to_i32(value) }
}

#[cfg_attr(feature = "internal-no-panic", no_panic)]
#[inline(always)]
fn clamp_i64_to_u32(value: i64) -> u32 {
    if value < 0 {
        0
    } else if value > i64::from(u32::MAX) {
        u32::MAX
    } else {
        cast::i64_to_u32(value)
    }
}

#[cfg_attr(feature = "internal-no-panic", no_panic)]
#[inline(always)]
fn clamp_u64_to_u32(value: u64) -> u32 {
    if value > u64::from(u32::MAX) { u32::MAX } else { cast::u64_to_u32(value) }
}

// bool
clamp_to_bool!(bool, u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);
clamp_from_bool!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

// u8
clamp_none!(u8 => u8, u16, u32, u64, i16, i32, i64, f32, f64);
clamp_upper!(u8 => i8);

// u16
clamp_none!(u16 => u16, u32, u64, i32, i64, f32, f64);
clamp_upper!(u16 => u8, i8, i16);

// u32
clamp_none!(u32 => u32, u64, i64, f32, f64);
clamp_upper!(u32 => u8, u16, i8, i16);
clamp_fast_path!(u32 => i32, clamp_u32_to_i32);

// u64
clamp_none!(u64 => u64, f32, f64);
clamp_upper!(u64 => u8, u16, i8, i16, i64);
clamp_fast_path!(u64 => u32, clamp_u64_to_u32);
clamp_fast_path!(u64 => i32, clamp_u64_to_i32);

// i8
clamp_none!(i8 => i8, i16, i32, i64, f32, f64);
clamp_signed_to_unsigned!(i8 as u8 => u8, u16, u32, u64);

// i16
clamp_none!(i16 => i16, i32, i64, f32, f64);
clamp_in_source!(i16 => i8);
clamp_signed_to_unsigned!(i16 as u16 => u8, u16, u32, u64);

// i32
clamp_none!(i32 => i32, i64, f32, f64);
clamp_in_source!(i32 => i8, i16);
clamp_signed_to_unsigned!(i32 as u32 => u8, u16, u64);
clamp_fast_path!(i32 => u32, clamp_i32_to_u32);

// i64
clamp_none!(i64 => i64, f32, f64);
clamp_in_source!(i64 => i8, i16);
clamp_signed_to_unsigned!(i64 as u64 => u8, u16, u64);
clamp_fast_path!(i64 => i32, clamp_i64_to_i32);
clamp_fast_path!(i64 => u32, clamp_i64_to_u32);

// f32
clamp_none!(f32 => f32, f64);
clamp_in_source!(f32 => u8, u16, u32, u64, i8, i16, i32, i64);

// f64
clamp_none!(f64 => f64);
clamp_in_source!(f64 => f32, u8, u16, u32, u64, i8, i16, i32, i64);
