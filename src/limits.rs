/// Representable range of a scalar type.
///
/// Unlike `core::num` constants, this is a single trait that generic code can name, and its
/// constants can be read in `const` contexts. Floating point bounds are the finite extremes.
pub trait TypeRange: Sized {
    /// The smallest representable value.
    const MIN: Self;
    /// The largest representable value.
    const MAX: Self;
}

/// Returns the smallest value representable by `T`.
#[inline(always)]
pub const fn min_value<T: TypeRange>() -> T {
    T::MIN
}

/// Returns the largest value representable by `T`.
#[inline(always)]
pub const fn max_value<T: TypeRange>() -> T {
    T::MAX
}

macro_rules! define_type_range {
    ($t:ty, $min:expr, $max:expr) => {
        impl TypeRange for $t {
            const MIN: Self = $min;
            const MAX: Self = $max;
        }
    };
}

define_type_range!(bool, false, true);
define_type_range!(u8, 0, 0xff);
define_type_range!(i8, -0x80, 0x7f);
define_type_range!(u16, 0, 0xffff);
define_type_range!(i16, -0x8000, 0x7fff);
define_type_range!(u32, 0, 0xffff_ffff);
define_type_range!(i32, -0x8000_0000, 0x7fff_ffff);
define_type_range!(u64, 0, 0xffff_ffff_ffff_ffff);
define_type_range!(i64, -0x8000_0000_0000_0000, 0x7fff_ffff_ffff_ffff);
define_type_range!(f32, -3.402_823_47e+38, 3.402_823_47e+38);
define_type_range!(f64, -1.797_693_134_862_315_7e+308, 1.797_693_134_862_315_7e+308);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_ranges() {
        assert_eq!(min_value::<u8>(), u8::MIN);
        assert_eq!(max_value::<u8>(), u8::MAX);
        assert_eq!(min_value::<i8>(), i8::MIN);
        assert_eq!(max_value::<i8>(), i8::MAX);
        assert_eq!(min_value::<u16>(), u16::MIN);
        assert_eq!(max_value::<u16>(), u16::MAX);
        assert_eq!(min_value::<i16>(), i16::MIN);
        assert_eq!(max_value::<i16>(), i16::MAX);
        assert_eq!(min_value::<u32>(), u32::MIN);
        assert_eq!(max_value::<u32>(), u32::MAX);
        assert_eq!(min_value::<i32>(), i32::MIN);
        assert_eq!(max_value::<i32>(), i32::MAX);
        assert_eq!(min_value::<u64>(), u64::MIN);
        assert_eq!(max_value::<u64>(), u64::MAX);
        assert_eq!(min_value::<i64>(), i64::MIN);
        assert_eq!(max_value::<i64>(), i64::MAX);
    }

    #[test]
    fn test_bool_and_float_ranges() {
        assert!(!min_value::<bool>());
        assert!(max_value::<bool>());
        assert_eq!(min_value::<f32>(), f32::MIN);
        assert_eq!(max_value::<f32>(), f32::MAX);
        assert_eq!(min_value::<f64>(), f64::MIN);
        assert_eq!(max_value::<f64>(), f64::MAX);
        assert!(max_value::<f32>().is_finite());
        assert!(min_value::<f64>().is_finite());
    }

    #[test]
    fn test_usable_in_const() {
        const U16_MAX: u16 = max_value::<u16>();
        const I8_MIN: i8 = min_value::<i8>();
        const F32_MAX: f32 = max_value::<f32>();
        assert_eq!(U16_MAX, 65535);
        assert_eq!(I8_MIN, -128);
        assert_eq!(F32_MAX, 3.402_823_47e+38);
    }
}
