//! Data type system for gramsvd operators
//!
//! This module provides the `DType` enum representing the element types an
//! operator may carry, along with the `Element` and `RealElement` traits that
//! connect Rust types to it.

pub mod complex;
mod element;

pub use complex::{Complex64, Complex128};
pub use element::{Element, RealElement};

use std::fmt;

/// Element types supported by gramsvd operators
///
/// # Discriminant Values (Serialization Stability)
///
/// - Floats: F64=0, F32=1
/// - Complex: Complex64=40, Complex128=41
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum DType {
    /// 64-bit floating point
    F64 = 0,
    /// 32-bit floating point
    F32 = 1,
    /// 64-bit complex (two f32: re, im)
    Complex64 = 40,
    /// 128-bit complex (two f64: re, im)
    Complex128 = 41,
}

impl DType {
    /// Size of one element in bytes
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::Complex128 => 16,
            Self::F64 | Self::Complex64 => 8,
            Self::F32 => 4,
        }
    }

    /// Returns true if this is a complex type
    #[inline]
    pub const fn is_complex(self) -> bool {
        matches!(self, Self::Complex64 | Self::Complex128)
    }

    /// Real dtype of the components (F32 for Complex64, F64 for Complex128)
    #[inline]
    pub const fn real_dtype(self) -> Self {
        match self {
            Self::F32 | Self::Complex64 => Self::F32,
            Self::F64 | Self::Complex128 => Self::F64,
        }
    }

    /// Working precision character: `'f'` for single, `'d'` for double
    ///
    /// Complex types report the precision of their components.
    #[inline]
    pub const fn precision_char(self) -> char {
        match self.real_dtype() {
            Self::F32 => 'f',
            _ => 'd',
        }
    }

    /// Machine epsilon of the component precision
    #[inline]
    pub fn machine_epsilon(self) -> f64 {
        match self.real_dtype() {
            Self::F32 => f32::EPSILON as f64,
            _ => f64::EPSILON,
        }
    }

    /// Short name for display
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::F64 => "f64",
            Self::F32 => "f32",
            Self::Complex64 => "c64",
            Self::Complex128 => "c128",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_size() {
        assert_eq!(DType::F64.size_in_bytes(), 8);
        assert_eq!(DType::F32.size_in_bytes(), 4);
        assert_eq!(DType::Complex64.size_in_bytes(), 8);
        assert_eq!(DType::Complex128.size_in_bytes(), 16);
    }

    #[test]
    fn test_precision_char() {
        assert_eq!(DType::F32.precision_char(), 'f');
        assert_eq!(DType::Complex64.precision_char(), 'f');
        assert_eq!(DType::F64.precision_char(), 'd');
        assert_eq!(DType::Complex128.precision_char(), 'd');
    }

    #[test]
    fn test_machine_epsilon() {
        assert_eq!(DType::Complex64.machine_epsilon(), f32::EPSILON as f64);
        assert_eq!(DType::F64.machine_epsilon(), f64::EPSILON);
        assert!(DType::Complex128.is_complex());
        assert!(!DType::F32.is_complex());
    }
}
