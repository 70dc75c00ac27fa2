use core::fmt;
use core::result;

/// Error values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarError {
    /// The name doesn't match any supported scalar type.
    UnknownScalarType,
    /// The name is empty.
    EmptyName,
}

impl fmt::Display for ScalarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarError::UnknownScalarType => f.write_str("unknown scalar type"),
            ScalarError::EmptyName => f.write_str("empty scalar type name"),
        }
    }
}

#[cfg(not(target_arch = "nvptx64"))]
impl std::error::Error for ScalarError {}

/// Library Result type.
pub type ScalarResult<T> = result::Result<T, ScalarError>;
