/// Casts u32 to i32, mapping 0x8000_0000..0xffff_ffff to negative values.
#[allow(clippy::cast_possible_wrap)] // callers check the sign bit before casting
#[inline(always)]
pub const fn u32_to_i32(value: u32) -> i32 {
    value as i32
}

/// Casts i32 to u32, mapping negative values to 0x8000_0000..0xffff_ffff.
#[allow(clippy::cast_sign_loss)] // callers check the value is positive before casting
#[inline(always)]
pub const fn i32_to_u32(value: i32) -> u32 {
    value as u32
}

/// Casts i64 to i32, keeping only the lowest 32 bits.
#[allow(clippy::cast_possible_truncation)] // callers check the value fits before casting
#[inline(always)]
pub const fn i64_to_i32(value: i64) -> i32 {
    value as i32
}

/// Casts u64 to i32, keeping only the lowest 32 bits.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)] // checked by callers
#[inline(always)]
pub const fn u64_to_i32(value: u64) -> i32 {
    value as i32
}

/// Casts i64 to u32, keeping only the lowest 32 bits.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // checked by callers
#[inline(always)]
pub const fn i64_to_u32(value: i64) -> u32 {
    value as u32
}

/// Casts u64 to u32, keeping only the lowest 32 bits.
#[allow(clippy::cast_possible_truncation)] // callers check the value fits before casting
#[inline(always)]
pub const fn u64_to_u32(value: u64) -> u32 {
    value as u32
}

/// Truncates f32 towards zero. The value must be less than 2^23 in magnitude
/// for the result to be exact.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)] // |value| < 2^23
#[inline(always)]
pub fn f32_trunc_small(value: f32) -> f32 {
    (value as i32) as f32
}

/// Truncates f64 towards zero. The value must be less than 2^52 in magnitude
/// for the result to be exact.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)] // |value| < 2^52
#[inline(always)]
pub fn f64_trunc_small(value: f64) -> f64 {
    (value as i64) as f64
}
