//! Conversion strategies and the `Converter` dispatch table.
//!
//! Each supported `(Out, In)` pair implements [`Converter`] by delegating to one of the
//! strategy modules below. The table at the bottom of this file is the whole dispatch:
//! it is resolved at compile time and every row is checked against [`select`].

use num_traits::AsPrimitive;

use crate::float::{self, Float};
use crate::{clamp, max_value, RoundToIntegral, SaturatingCast, Scalar, ScalarKind};

/// Conversion strategy of a pair of types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Same type in and out. All modes return the value unchanged.
    PassThrough,
    /// Float to float.
    FloatToFloat,
    /// Integer to float.
    IntToFloat,
    /// Float to integer.
    FloatToInt,
    /// Integer to integer of the same signedness.
    IntToIntSameSign,
    /// Signed integer to unsigned integer.
    SignedToUnsigned,
    /// Unsigned integer to signed integer.
    UnsignedToSigned,
    /// Anything to bool.
    ToBool,
    /// Bool to anything else.
    FromBool,
}

/// Selects the conversion strategy for converting `input` to `out`.
pub const fn select(out: ScalarKind, input: ScalarKind) -> Strategy {
    if out as u8 == input as u8 {
        return Strategy::PassThrough;
    }
    if matches!(out, ScalarKind::Bool) {
        return Strategy::ToBool;
    }
    if matches!(input, ScalarKind::Bool) {
        return Strategy::FromBool;
    }
    match (out.is_float(), input.is_float()) {
        (true, true) => Strategy::FloatToFloat,
        (true, false) => Strategy::IntToFloat,
        (false, true) => Strategy::FloatToInt,
        (false, false) => match (out.is_signed(), input.is_signed()) {
            (false, true) => Strategy::SignedToUnsigned,
            (true, false) => Strategy::UnsignedToSigned,
            _ => Strategy::IntToIntSameSign,
        },
    }
}

/// Conversion from `In` into `Self`.
///
/// Implemented for every pair of the supported arithmetic types. Use the free functions
/// [`convert`](crate::convert()), [`convert_norm`](crate::convert_norm()),
/// [`convert_sat`](crate::convert_sat()) and
/// [`convert_sat_norm`](crate::convert_sat_norm()) rather than calling these directly.
#[diagnostic::on_unimplemented(
    message = "cannot convert `{In}` to `{Self}`",
    label = "not a supported arithmetic type pair",
    note = "conversions need arithmetic source and destination types: \
            bool, u8, i8, u16, i16, u32, i32, u64, i64, f32 or f64"
)]
pub trait Converter<In>: Sized {
    /// Plain conversion, rounding float to integer. Unspecified for out-of-range values.
    fn convert(value: In) -> Self;
    /// Maps the dynamic range of `In` onto the dynamic range of `Self`.
    fn convert_norm(value: In) -> Self;
    /// Plain conversion, clamped into the range of `Self`.
    fn convert_sat(value: In) -> Self;
    /// Dynamic range mapping, clamped into the range of `Self`.
    fn convert_sat_norm(value: In) -> Self;
}

mod pass_through {
    #[inline(always)]
    pub fn convert<T>(value: T) -> T {
        value
    }
}

mod float_to_float {
    use super::*;

    #[inline(always)]
    pub fn convert<Out: Float, In: Float + AsPrimitive<Out>>(value: In) -> Out {
        value.as_()
    }
}

mod int_to_float {
    use super::*;

    #[inline(always)]
    pub fn convert<Out: Float, In: Scalar + AsPrimitive<Out>>(value: In) -> Out {
        value.as_()
    }

    /// Multiplies by the reciprocal of `In`'s maximum: [0, max] maps onto [0, 1] and
    /// [-max, max] onto [-1, 1].
    #[inline(always)]
    pub fn convert_norm<Out: Float, In: Scalar + AsPrimitive<Out>>(value: In) -> Out {
        value.as_() * (Out::ONE / max_value::<In>().as_())
    }
}

mod float_to_int {
    use super::*;

    #[inline(always)]
    pub fn convert<Out, In: RoundToIntegral<Out>>(value: In) -> Out {
        value.round_to_integral()
    }

    /// Scales by `Out`'s maximum and rounds, ties toward zero. Unspecified if the product
    /// doesn't fit in `Out`.
    #[inline(always)]
    pub fn convert_norm<Out, In>(value: In) -> Out
        where Out: Scalar + AsPrimitive<In>, In: Float + AsPrimitive<Out> {
        float::round_ties_toward_zero(value * max_value::<Out>().as_()).as_()
    }

    #[inline(always)]
    pub fn convert_sat_norm<Out, In: RoundToIntegral<Out>>(value: In) -> Out {
        value.scale_saturating()
    }
}

mod int_to_int {
    use super::*;

    #[inline(always)]
    pub fn convert<Out: Scalar, In: Scalar + AsPrimitive<Out>>(value: In) -> Out {
        value.as_()
    }

    #[inline(always)]
    pub fn convert_sat<Out, In: SaturatingCast<Out>>(value: In) -> Out {
        clamp(value)
    }

    /// Rescales by `max_value::<Out>() / max_value::<In>()` in `f32`. Large ranges lose
    /// precision. Negative values toward an unsigned type clamp to zero.
    #[inline(always)]
    pub fn rescale<Out, In>(value: In) -> Out
        where Out: Scalar + AsPrimitive<f32>, In: Scalar + AsPrimitive<f32>,
            f32: RoundToIntegral<Out> {
        let scale = max_value::<Out>().as_() / max_value::<In>().as_();
        let scaled: f32 = value.as_() * scale;
        <f32 as RoundToIntegral<Out>>::round_to_integral(scaled)
    }

    /// Maps [0, max] onto [-max_value::<Out>(), max_value::<Out>()] through `2x - 1`.
    #[inline(always)]
    pub fn unsigned_to_signed_norm<Out, In>(value: In) -> Out
        where Out: Scalar + AsPrimitive<f32>, In: Scalar + AsPrimitive<f32>,
            f32: AsPrimitive<Out> {
        let unit = -1.0 + 2.0 * int_to_float::convert_norm::<f32, In>(value);
        float_to_int::convert_norm(unit)
    }

    #[inline(always)]
    pub fn unsigned_to_signed_sat_norm<Out, In>(value: In) -> Out
        where Out: Scalar, In: Scalar + AsPrimitive<f32>, f32: RoundToIntegral<Out> {
        let unit = -1.0 + 2.0 * int_to_float::convert_norm::<f32, In>(value);
        float_to_int::convert_sat_norm(unit)
    }
}

mod to_bool {
    use super::*;

    #[inline(always)]
    pub fn convert<In: SaturatingCast<bool>>(value: In) -> bool {
        clamp(value)
    }
}

mod from_bool {
    use super::*;

    #[inline(always)]
    pub fn convert<Out>(value: bool) -> Out
        where bool: SaturatingCast<Out> {
        clamp(value)
    }

    /// The unit value of `false..true`: [0, 1], or [-1, 1] toward signed integers.
    #[inline(always)]
    fn unit<Out: Scalar>(value: bool) -> f32 {
        let unit = if value { 1.0 } else { 0.0 };
        if Out::KIND.is_signed_integer() { 2.0 * unit - 1.0 } else { unit }
    }

    #[inline(always)]
    pub fn convert_norm<Out: Scalar + Converter<f32>>(value: bool) -> Out {
        Out::convert_norm(unit::<Out>(value))
    }

    #[inline(always)]
    pub fn convert_sat_norm<Out: Scalar + Converter<f32>>(value: bool) -> Out {
        Out::convert_sat_norm(unit::<Out>(value))
    }
}

macro_rules! check_strategy {
    ($out:ty, $in:ty, $strategy:ident) => {
        const _: () = assert!(
            matches!(select(<$out as Scalar>::KIND, <$in as Scalar>::KIND),
                Strategy::$strategy),
            concat!("strategy mismatch: ", stringify!($in), " => ", stringify!($out))
        );
    };
}

/// Implements `Converter` for every `Out` in the first list and every `In` in the second.
macro_rules! converters {
    ($strategy:ident: [$($out:ty),+] <- $ins:tt) => {
        $( converters!(@row $strategy, $out, $ins); )+
    };
    (@row $strategy:ident, $out:ty, [$($in:ty),+]) => {
        $(
            impl Converter<$in> for $out {
                converters!(@body $strategy, $out, $in);
            }
            check_strategy!($out, $in, $strategy);
        )+
    };

    (@body PassThrough, $out:ty, $in:ty) => {
        #[inline(always)]
        fn convert(value: $in) -> Self { pass_through::convert(value) }
        #[inline(always)]
        fn convert_norm(value: $in) -> Self { pass_through::convert(value) }
        #[inline(always)]
        fn convert_sat(value: $in) -> Self { pass_through::convert(value) }
        #[inline(always)]
        fn convert_sat_norm(value: $in) -> Self { pass_through::convert(value) }
    };
    (@body FloatToFloat, $out:ty, $in:ty) => {
        #[inline(always)]
        fn convert(value: $in) -> Self { float_to_float::convert(value) }
        #[inline(always)]
        fn convert_norm(value: $in) -> Self { float_to_float::convert(value) }
        #[inline(always)]
        fn convert_sat(value: $in) -> Self { float_to_float::convert(value) }
        #[inline(always)]
        fn convert_sat_norm(value: $in) -> Self { float_to_float::convert(value) }
    };
    (@body IntToFloat, $out:ty, $in:ty) => {
        #[inline(always)]
        fn convert(value: $in) -> Self { int_to_float::convert(value) }
        #[inline(always)]
        fn convert_norm(value: $in) -> Self { int_to_float::convert_norm(value) }
        #[inline(always)]
        fn convert_sat(value: $in) -> Self { int_to_float::convert(value) }
        #[inline(always)]
        fn convert_sat_norm(value: $in) -> Self { int_to_float::convert_norm(value) }
    };
    (@body FloatToInt, $out:ty, $in:ty) => {
        #[inline(always)]
        fn convert(value: $in) -> Self { float_to_int::convert(value) }
        #[inline(always)]
        fn convert_norm(value: $in) -> Self { float_to_int::convert_norm(value) }
        #[inline(always)]
        fn convert_sat(value: $in) -> Self { float_to_int::convert(value) }
        #[inline(always)]
        fn convert_sat_norm(value: $in) -> Self { float_to_int::convert_sat_norm(value) }
    };
    (@body IntToIntSameSign, $out:ty, $in:ty) => {
        #[inline(always)]
        fn convert(value: $in) -> Self { int_to_int::convert(value) }
        #[inline(always)]
        fn convert_norm(value: $in) -> Self { int_to_int::rescale(value) }
        #[inline(always)]
        fn convert_sat(value: $in) -> Self { int_to_int::convert_sat(value) }
        #[inline(always)]
        fn convert_sat_norm(value: $in) -> Self { int_to_int::rescale(value) }
    };
    (@body SignedToUnsigned, $out:ty, $in:ty) => {
        #[inline(always)]
        fn convert(value: $in) -> Self { int_to_int::convert(value) }
        #[inline(always)]
        fn convert_norm(value: $in) -> Self { int_to_int::rescale(value) }
        #[inline(always)]
        fn convert_sat(value: $in) -> Self { int_to_int::convert_sat(value) }
        #[inline(always)]
        fn convert_sat_norm(value: $in) -> Self { int_to_int::rescale(value) }
    };
    (@body UnsignedToSigned, $out:ty, $in:ty) => {
        #[inline(always)]
        fn convert(value: $in) -> Self { int_to_int::convert(value) }
        #[inline(always)]
        fn convert_norm(value: $in) -> Self { int_to_int::unsigned_to_signed_norm(value) }
        #[inline(always)]
        fn convert_sat(value: $in) -> Self { int_to_int::convert_sat(value) }
        #[inline(always)]
        fn convert_sat_norm(value: $in) -> Self {
            int_to_int::unsigned_to_signed_sat_norm(value)
        }
    };
    (@body ToBool, $out:ty, $in:ty) => {
        #[inline(always)]
        fn convert(value: $in) -> Self { to_bool::convert(value) }
        #[inline(always)]
        fn convert_norm(value: $in) -> Self { to_bool::convert(value) }
        #[inline(always)]
        fn convert_sat(value: $in) -> Self { to_bool::convert(value) }
        #[inline(always)]
        fn convert_sat_norm(value: $in) -> Self { to_bool::convert(value) }
    };
    (@body FromBool, $out:ty, $in:ty) => {
        #[inline(always)]
        fn convert(value: $in) -> Self { from_bool::convert(value) }
        #[inline(always)]
        fn convert_norm(value: $in) -> Self { from_bool::convert_norm(value) }
        #[inline(always)]
        fn convert_sat(value: $in) -> Self { from_bool::convert(value) }
        #[inline(always)]
        fn convert_sat_norm(value: $in) -> Self { from_bool::convert_sat_norm(value) }
    };
}

converters!(PassThrough: [bool] <- [bool]);
converters!(PassThrough: [u8] <- [u8]);
converters!(PassThrough: [i8] <- [i8]);
converters!(PassThrough: [u16] <- [u16]);
converters!(PassThrough: [i16] <- [i16]);
converters!(PassThrough: [u32] <- [u32]);
converters!(PassThrough: [i32] <- [i32]);
converters!(PassThrough: [u64] <- [u64]);
converters!(PassThrough: [i64] <- [i64]);
converters!(PassThrough: [f32] <- [f32]);
converters!(PassThrough: [f64] <- [f64]);

converters!(ToBool: [bool] <- [u8, i8, u16, i16, u32, i32, u64, i64, f32, f64]);
converters!(FromBool: [u8, i8, u16, i16, u32, i32, u64, i64, f32, f64] <- [bool]);

converters!(FloatToFloat: [f32] <- [f64]);
converters!(FloatToFloat: [f64] <- [f32]);

converters!(IntToFloat: [f32, f64] <- [u8, i8, u16, i16, u32, i32, u64, i64]);
converters!(FloatToInt: [u8, i8, u16, i16, u32, i32, u64, i64] <- [f32, f64]);

converters!(IntToIntSameSign: [u8] <- [u16, u32, u64]);
converters!(IntToIntSameSign: [u16] <- [u8, u32, u64]);
converters!(IntToIntSameSign: [u32] <- [u8, u16, u64]);
converters!(IntToIntSameSign: [u64] <- [u8, u16, u32]);
converters!(IntToIntSameSign: [i8] <- [i16, i32, i64]);
converters!(IntToIntSameSign: [i16] <- [i8, i32, i64]);
converters!(IntToIntSameSign: [i32] <- [i8, i16, i64]);
converters!(IntToIntSameSign: [i64] <- [i8, i16, i32]);

converters!(SignedToUnsigned: [u8, u16, u32, u64] <- [i8, i16, i32, i64]);
converters!(UnsignedToSigned: [i8, i16, i32, i64] <- [u8, u16, u32, u64]);
