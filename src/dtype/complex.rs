//! Complex element types for Hermitian operators
//!
//! [`Complex64`] (two `f32`) and [`Complex128`] (two `f64`) are plain `#[repr(C)]`
//! pairs stored interleaved as `(re, im)`, so slices of them can be viewed as
//! bytes through bytemuck.
//!
//! # Examples
//!
//! ```
//! use gramsvd::dtype::Complex128;
//!
//! let z = Complex128::new(3.0, 4.0);
//! assert_eq!(z.magnitude(), 5.0);
//! assert_eq!(z.conj(), Complex128::new(3.0, -4.0));
//! ```

use bytemuck::{Pod, Zeroable};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Component-wise binary operator plus its compound assignment form
macro_rules! componentwise_op {
    ($name:ident, $op:ident, $method:ident, $assign:ident, $assign_method:ident, $sym:tt) => {
        impl $op for $name {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self::new(self.re $sym rhs.re, self.im $sym rhs.im)
            }
        }

        impl $assign for $name {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = $op::$method(*self, rhs);
            }
        }
    };
}

macro_rules! complex_type {
    ($name:ident, $float:ty, $doc:literal) => {
        #[doc = $doc]
        #[repr(C)]
        #[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
        pub struct $name {
            /// Real part
            pub re: $float,
            /// Imaginary part
            pub im: $float,
        }

        impl $name {
            /// 0 + 0i
            pub const ZERO: Self = Self::new(0.0, 0.0);

            /// 1 + 0i
            pub const ONE: Self = Self::new(1.0, 0.0);

            /// 0 + 1i
            pub const I: Self = Self::new(0.0, 1.0);

            /// Create a complex number from its parts
            #[inline]
            pub const fn new(re: $float, im: $float) -> Self {
                Self { re, im }
            }

            /// `r * (cos(phi) + i sin(phi))`
            #[inline]
            pub fn from_polar(r: $float, phi: $float) -> Self {
                let (sin, cos) = phi.sin_cos();
                Self::new(r * cos, r * sin)
            }

            /// |z|, computed without intermediate overflow
            #[inline]
            pub fn magnitude(self) -> $float {
                self.re.hypot(self.im)
            }

            /// |z|^2
            #[inline]
            pub fn magnitude_squared(self) -> $float {
                self.re.mul_add(self.re, self.im * self.im)
            }

            /// Complex conjugate
            #[inline]
            pub fn conj(self) -> Self {
                Self::new(self.re, -self.im)
            }

            /// Multiply by a real scalar
            #[inline]
            pub fn scale(self, s: $float) -> Self {
                Self::new(self.re * s, self.im * s)
            }
        }

        componentwise_op!($name, Add, add, AddAssign, add_assign, +);
        componentwise_op!($name, Sub, sub, SubAssign, sub_assign, -);

        impl Mul for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self::new(
                    self.re * rhs.re - self.im * rhs.im,
                    self.re * rhs.im + self.im * rhs.re,
                )
            }
        }

        impl Div for $name {
            type Output = Self;

            /// `self * conj(rhs) / |rhs|^2`; division by zero gives NaN parts
            #[inline]
            fn div(self, rhs: Self) -> Self {
                let denom = rhs.magnitude_squared();
                if denom == 0.0 {
                    return Self::new(<$float>::NAN, <$float>::NAN);
                }
                (self * rhs.conj()).scale(denom.recip())
            }
        }

        impl Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self::new(-self.re, -self.im)
            }
        }

        impl From<$float> for $name {
            #[inline]
            fn from(re: $float) -> Self {
                Self::new(re, 0.0)
            }
        }
    };
}

complex_type!(
    Complex64,
    f32,
    "Single precision complex number (`f32` parts, 8 bytes)"
);
complex_type!(
    Complex128,
    f64,
    "Double precision complex number (`f64` parts, 16 bytes)"
);
