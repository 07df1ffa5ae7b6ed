//! Element traits for mapping Rust types to DType

use super::DType;
use super::complex::{Complex64, Complex128};
use bytemuck::{Pod, Zeroable};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Real floating-point scalar underlying an [`Element`]
///
/// Implemented for `f32` and `f64`. Eigenvalues, singular values, norms and
/// tolerances are all expressed in this type.
pub trait RealElement:
    Copy
    + Send
    + Sync
    + Pod
    + Zeroable
    + Debug
    + Display
    + PartialOrd
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Machine epsilon
    const EPSILON: Self;

    /// Zero value
    fn zero() -> Self;

    /// One value
    fn one() -> Self;

    /// Square root
    fn sqrt(self) -> Self;

    /// Absolute value
    fn abs(self) -> Self;

    /// Larger of two values (NaN-ignoring, like `f64::max`)
    fn max_value(self, other: Self) -> Self;

    /// Convert to f64
    fn to_f64(self) -> f64;

    /// Convert from f64
    fn from_f64(v: f64) -> Self;
}

macro_rules! impl_real_element {
    ($float:ty) => {
        impl RealElement for $float {
            const EPSILON: Self = <$float>::EPSILON;

            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn one() -> Self {
                1.0
            }

            #[inline]
            fn sqrt(self) -> Self {
                <$float>::sqrt(self)
            }

            #[inline]
            fn abs(self) -> Self {
                <$float>::abs(self)
            }

            #[inline]
            fn max_value(self, other: Self) -> Self {
                <$float>::max(self, other)
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $float
            }
        }
    };
}

impl_real_element!(f32);
impl_real_element!(f64);

/// Trait for types that can be elements of an operator
///
/// This trait connects Rust's type system to gramsvd's runtime dtype system.
/// It's implemented for `f32`, `f64`, [`Complex64`] and [`Complex128`].
///
/// # Bounds
/// - `Pod + Zeroable` - Safe memory transmutation (bytemuck)
/// - Field arithmetic (`Add`, `Sub`, `Mul`, `Div`, `Neg`)
///
/// Inner products throughout the crate are Hermitian: `<u, v> = sum(conj(u_i) * v_i)`.
pub trait Element:
    Copy
    + Send
    + Sync
    + Pod
    + Zeroable
    + Debug
    + PartialEq
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
{
    /// Real component type
    type Real: RealElement;

    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Zero value
    fn zero() -> Self;

    /// One value
    fn one() -> Self;

    /// Embed a real value (imaginary part = 0)
    fn from_real(r: Self::Real) -> Self;

    /// Real part
    fn re(self) -> Self::Real;

    /// Imaginary part (zero for real types)
    fn im(self) -> Self::Real;

    /// Complex conjugate (identity for real types)
    fn conj(self) -> Self;

    /// Magnitude |z|
    fn abs(self) -> Self::Real;

    /// Squared magnitude |z|²
    fn abs_sq(self) -> Self::Real;

    /// Multiply by a real scalar
    fn scale(self, s: Self::Real) -> Self;

    /// Draw a standard normal sample
    ///
    /// Complex types draw independent standard normal real and imaginary parts.
    fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

macro_rules! impl_real_as_element {
    ($float:ty, $dtype:expr) => {
        impl Element for $float {
            type Real = $float;
            const DTYPE: DType = $dtype;

            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn one() -> Self {
                1.0
            }

            #[inline]
            fn from_real(r: Self::Real) -> Self {
                r
            }

            #[inline]
            fn re(self) -> Self::Real {
                self
            }

            #[inline]
            fn im(self) -> Self::Real {
                0.0
            }

            #[inline]
            fn conj(self) -> Self {
                self
            }

            #[inline]
            fn abs(self) -> Self::Real {
                <$float>::abs(self)
            }

            #[inline]
            fn abs_sq(self) -> Self::Real {
                self * self
            }

            #[inline]
            fn scale(self, s: Self::Real) -> Self {
                self * s
            }

            #[inline]
            fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> Self {
                StandardNormal.sample(rng)
            }
        }
    };
}

impl_real_as_element!(f32, DType::F32);
impl_real_as_element!(f64, DType::F64);

macro_rules! impl_complex_as_element {
    ($name:ident, $float:ty, $dtype:expr) => {
        impl Element for $name {
            type Real = $float;
            const DTYPE: DType = $dtype;

            #[inline]
            fn zero() -> Self {
                Self::ZERO
            }

            #[inline]
            fn one() -> Self {
                Self::ONE
            }

            #[inline]
            fn from_real(r: Self::Real) -> Self {
                Self::new(r, 0.0)
            }

            #[inline]
            fn re(self) -> Self::Real {
                self.re
            }

            #[inline]
            fn im(self) -> Self::Real {
                self.im
            }

            #[inline]
            fn conj(self) -> Self {
                $name::conj(self)
            }

            #[inline]
            fn abs(self) -> Self::Real {
                self.magnitude()
            }

            #[inline]
            fn abs_sq(self) -> Self::Real {
                self.magnitude_squared()
            }

            #[inline]
            fn scale(self, s: Self::Real) -> Self {
                $name::scale(self, s)
            }

            #[inline]
            fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> Self {
                let re: $float = StandardNormal.sample(rng);
                let im: $float = StandardNormal.sample(rng);
                Self::new(re, im)
            }
        }
    };
}

impl_complex_as_element!(Complex64, f32, DType::Complex64);
impl_complex_as_element!(Complex128, f64, DType::Complex128);
