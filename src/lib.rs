//! # Scalar Numeric Conversions
//!
//! This crate converts values between the arithmetic types `bool`, `u8`, `i8`, `u16`,
//! `i16`, `u32`, `i32`, `u64`, `i64`, `f32` and `f64`. The same code runs on general
//! purpose processors and inside GPU kernels (`nvptx64`), where the crate is `no_std`.
//!
//! There are four conversion modes:
//!
//! - [`convert()`] converts the value, rounding floats to the nearest integer.
//!   Out-of-range results are unspecified.
//! - [`convert_norm()`] maps the dynamic range of the source type onto the dynamic range
//!   of the destination type. Floats use [0, 1] for unsigned and [-1, 1] for signed
//!   integers, so `255u8` becomes `1.0` and `1.0` becomes `255u8`.
//! - [`convert_sat()`] converts the value and clamps it into the destination range.
//! - [`convert_sat_norm()`] maps the dynamic range and clamps the result.
//!
//! Every conversion is resolved at compile time to one strategy (see [`select`]), and
//! there is no runtime dispatch.
//!
//! # Examples
//!
//! ```
//! use scalarconv::{convert, convert_norm, convert_sat, convert_sat_norm};
//!
//! assert_eq!(convert::<u8, _>(2.5f32), 3);
//! assert_eq!(convert_sat::<u8, _>(300i32), 255);
//! assert_eq!(convert_sat::<i8, _>(-1e9f64), -128);
//! assert_eq!(convert_norm::<f32, _>(255u8), 1.0);
//! assert_eq!(convert_norm::<u8, _>(0.5f32), 127);
//! assert_eq!(convert_sat_norm::<u8, _>(1.5f32), 255);
//! assert_eq!(convert_sat_norm::<u8, _>(-1i8), 0);
//! assert!(convert::<bool, _>(0.25f32));
//! ```
//!
//! Type ranges and saturating casts are available on their own:
//!
//! ```
//! use scalarconv::{clamp, max_value, min_value};
//!
//! assert_eq!(max_value::<u16>(), 65535);
//! assert_eq!(min_value::<i8>(), -128);
//! assert_eq!(clamp::<i16, _>(100_000u32), i16::MAX);
//! ```
//!
//! ## Host and device rounding
//!
//! Float to `i64` and `u64` rounding inside kernels may differ by one unit from the host
//! on `.5` boundaries. See the [`round`] module.

#![cfg_attr(target_arch = "nvptx64", no_std)]
#![forbid(
    unsafe_code,
    clippy::panic,
    clippy::exit,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::unimplemented,
    clippy::todo,
    clippy::unreachable,
)]
#![deny(
    clippy::cast_ptr_alignment,
    clippy::char_lit_as_u8,
    clippy::unnecessary_cast,
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::checked_conversions,
)]

// silly way to test rust code blocks in README.md
// https://doc.rust-lang.org/rustdoc/write-documentation/documentation-tests.html
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

mod cast;
mod clamp;
mod convert;
mod float;
mod limits;
pub mod round;
mod scalar;
mod scalarresult;

pub use clamp::{clamp, needs_clamp, SaturatingCast};
pub use convert::{select, Converter, Strategy};
pub use float::Float;
pub use limits::{max_value, min_value, TypeRange};
pub use round::{round_to_integral, RoundToIntegral};
pub use scalar::{Scalar, ScalarKind};
pub use scalarresult::{ScalarError, ScalarResult};

/// Converts `value` to `Out`.
///
/// Floats are rounded to the nearest integer, ties away from zero. Integers that don't
/// fit in `Out` wrap. Floats that don't fit in an integer `Out` give an unspecified
/// value. Converting to `bool` tests for non-zero.
///
/// # Examples
///
/// ```
/// assert_eq!(scalarconv::convert::<i32, _>(-2.5f64), -3);
/// assert_eq!(scalarconv::convert::<f32, _>(7u16), 7.0);
/// assert_eq!(scalarconv::convert::<u8, _>(true), 1);
/// ```
#[inline(always)]
pub fn convert<Out, In>(value: In) -> Out
    where Out: Converter<In> {
    Out::convert(value)
}

/// Converts `value` to `Out`, mapping the dynamic range of `In` onto the range of `Out`.
///
/// Integer ranges are [0, max] for unsigned and [-max, max] for signed types. Float
/// ranges are [0, 1] when the other side is unsigned and [-1, 1] when it's signed.
/// Signed to unsigned integer conversions map [0, max] onto [0, max], and negative
/// values are out of range.
/// Float to integer rounding is to nearest with ties toward zero. Out-of-range values
/// give an unspecified result.
///
/// # Examples
///
/// ```
/// use scalarconv::convert_norm;
///
/// assert_eq!(convert_norm::<f32, _>(-127i8), -1.0);
/// assert_eq!(convert_norm::<u16, _>(255u8), 65535);
/// assert_eq!(convert_norm::<i8, _>(-1.0f64), -127);
/// assert_eq!(convert_norm::<u8, _>(127i8), 255);
/// ```
#[inline(always)]
pub fn convert_norm<Out, In>(value: In) -> Out
    where Out: Converter<In> {
    Out::convert_norm(value)
}

/// Converts `value` to `Out`, clamping it to the representable range of `Out`.
///
/// NaN converts to 0 for integer destinations.
///
/// # Examples
///
/// ```
/// use scalarconv::convert_sat;
///
/// assert_eq!(convert_sat::<u8, _>(-5i32), 0);
/// assert_eq!(convert_sat::<u16, _>(1e10f32), u16::MAX);
/// assert_eq!(convert_sat::<f32, _>(1e300f64), f32::MAX);
/// assert_eq!(convert_sat::<i32, _>(f64::NAN), 0);
/// ```
#[inline(always)]
pub fn convert_sat<Out, In>(value: In) -> Out
    where Out: Converter<In> {
    Out::convert_sat(value)
}

/// Converts `value` to `Out` like [`convert_norm()`], clamping the result to the range of
/// `Out`.
///
/// Negative values converted to an unsigned type become 0.
///
/// # Examples
///
/// ```
/// use scalarconv::convert_sat_norm;
///
/// assert_eq!(convert_sat_norm::<u8, _>(1.5f32), 255);
/// assert_eq!(convert_sat_norm::<u8, _>(-0.5f32), 0);
/// assert_eq!(convert_sat_norm::<i16, _>(-2.0f64), i16::MIN);
/// assert_eq!(convert_sat_norm::<u8, _>(-100i8), 0);
/// ```
#[inline(always)]
pub fn convert_sat_norm<Out, In>(value: In) -> Out
    where Out: Converter<In> {
    Out::convert_sat_norm(value)
}
