use core::fmt;
use core::str::FromStr;

use crate::limits::TypeRange;
use crate::{ScalarError, ScalarResult};

mod private {
    pub trait Sealed {}
}

/// Scalar element type.
///
/// The set is closed: it covers the boolean, 8/16/32/64-bit signed and unsigned integer
/// and 32/64-bit floating point sample types a pixel format can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Boolean.
    Bool,
    /// Unsigned 8-bit integer.
    U8,
    /// Signed 8-bit integer.
    I8,
    /// Unsigned 16-bit integer.
    U16,
    /// Signed 16-bit integer.
    I16,
    /// Unsigned 32-bit integer.
    U32,
    /// Signed 32-bit integer.
    I32,
    /// Unsigned 64-bit integer.
    U64,
    /// Signed 64-bit integer.
    I64,
    /// 32-bit floating point.
    F32,
    /// 64-bit floating point.
    F64,
}

impl ScalarKind {
    /// Returns the kind of the scalar type `T`.
    #[inline(always)]
    pub const fn of<T: Scalar>() -> ScalarKind {
        T::KIND
    }

    /// Returns the size of the type in bytes.
    pub const fn size(self) -> usize {
        match self {
            ScalarKind::Bool | ScalarKind::U8 | ScalarKind::I8 => 1,
            ScalarKind::U16 | ScalarKind::I16 => 2,
            ScalarKind::U32 | ScalarKind::I32 | ScalarKind::F32 => 4,
            ScalarKind::U64 | ScalarKind::I64 | ScalarKind::F64 => 8,
        }
    }

    /// Returns the storage width of the type in bits. Bool returns 8.
    pub const fn bits(self) -> u32 {
        match self {
            ScalarKind::Bool | ScalarKind::U8 | ScalarKind::I8 => 8,
            ScalarKind::U16 | ScalarKind::I16 => 16,
            ScalarKind::U32 | ScalarKind::I32 | ScalarKind::F32 => 32,
            ScalarKind::U64 | ScalarKind::I64 | ScalarKind::F64 => 64,
        }
    }

    /// Returns true for floating point types.
    pub const fn is_float(self) -> bool {
        matches!(self, ScalarKind::F32 | ScalarKind::F64)
    }

    /// Returns true for integer types, including bool.
    pub const fn is_integer(self) -> bool {
        !self.is_float()
    }

    /// Returns true for types that can represent negative values: signed integers and
    /// floating point types.
    pub const fn is_signed(self) -> bool {
        matches!(self,
            ScalarKind::I8 | ScalarKind::I16 | ScalarKind::I32 | ScalarKind::I64 |
            ScalarKind::F32 | ScalarKind::F64)
    }

    /// Returns true for signed integer types.
    pub const fn is_signed_integer(self) -> bool {
        self.is_signed() && self.is_integer()
    }

    /// Returns true for unsigned integer types, including bool.
    pub const fn is_unsigned(self) -> bool {
        !self.is_signed()
    }

    /// Returns the Rust name of the type.
    pub const fn name(self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::U8 => "u8",
            ScalarKind::I8 => "i8",
            ScalarKind::U16 => "u16",
            ScalarKind::I16 => "i16",
            ScalarKind::U32 => "u32",
            ScalarKind::I32 => "i32",
            ScalarKind::U64 => "u64",
            ScalarKind::I64 => "i64",
            ScalarKind::F32 => "f32",
            ScalarKind::F64 => "f64",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScalarKind {
    type Err = ScalarError;

    /// Parses a Rust type name (`u8`, `f32`, ..) or a C-style name (`uint8`,
    /// `uint8_t`, `float`, `double`, ..).
    fn from_str(s: &str) -> ScalarResult<ScalarKind> {
        let name = s.trim();
        if name.is_empty() {
            return Err(ScalarError::EmptyName);
        }
        let name = name.strip_suffix("_t").unwrap_or(name);
        match name {
            "bool" => Ok(ScalarKind::Bool),
            "u8" | "uint8" => Ok(ScalarKind::U8),
            "i8" | "int8" => Ok(ScalarKind::I8),
            "u16" | "uint16" => Ok(ScalarKind::U16),
            "i16" | "int16" => Ok(ScalarKind::I16),
            "u32" | "uint32" => Ok(ScalarKind::U32),
            "i32" | "int32" => Ok(ScalarKind::I32),
            "u64" | "uint64" => Ok(ScalarKind::U64),
            "i64" | "int64" => Ok(ScalarKind::I64),
            "f32" | "float" => Ok(ScalarKind::F32),
            "f64" | "double" => Ok(ScalarKind::F64),
            _ => Err(ScalarError::UnknownScalarType),
        }
    }
}

/// A supported arithmetic sample type.
///
/// This trait is sealed. It is implemented for `bool`, `u8`, `i8`, `u16`, `i16`, `u32`,
/// `i32`, `u64`, `i64`, `f32` and `f64`.
pub trait Scalar:
    Copy + PartialOrd + Default + fmt::Debug + TypeRange + private::Sealed + 'static
{
    /// The kind of this type.
    const KIND: ScalarKind;
}

macro_rules! impl_scalar {
    ($($t:ty => $kind:ident),* $(,)?) => {
        $(
            impl private::Sealed for $t {}
            impl Scalar for $t {
                const KIND: ScalarKind = ScalarKind::$kind;
            }
        )*
    };
}

impl_scalar!(
    bool => Bool,
    u8 => U8,
    i8 => I8,
    u16 => U16,
    i16 => I16,
    u32 => U32,
    i32 => I32,
    u64 => U64,
    i64 => I64,
    f32 => F32,
    f64 => F64,
);
