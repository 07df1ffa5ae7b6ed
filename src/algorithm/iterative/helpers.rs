//! Shared vector kernels for the Krylov and block eigensolvers
//!
//! All inner products are Hermitian: `<u, v> = sum(conj(u_i) * v_i)`.

use crate::dtype::{Element, RealElement};

/// Number of Gram-Schmidt passes used for reorthogonalization
///
/// Two passes restore orthogonality to working precision ("twice is enough").
pub const REORTH_PASSES: usize = 2;

/// A new Krylov direction is treated as lying in the current subspace when
/// its norm after reorthogonalization drops below this multiple of epsilon
/// times the norm of `A v`.
pub const INVARIANT_SUBSPACE_FACTOR: f64 = 100.0;

/// Block columns whose norm shrinks by more than this multiple of sqrt(epsilon)
/// during orthogonalization are dropped as linearly dependent.
pub const DEPENDENT_COLUMN_FACTOR: f64 = 10.0;

/// Hermitian dot product: <u, v> = sum(conj(u) * v)
#[inline]
pub fn vector_dot<T: Element>(u: &[T], v: &[T]) -> T {
    u.iter()
        .zip(v)
        .fold(T::zero(), |acc, (&a, &b)| acc + a.conj() * b)
}

/// Vector L2 norm: ||v|| = sqrt(sum(|v|^2))
#[inline]
pub fn vector_norm<T: Element>(v: &[T]) -> T::Real {
    v.iter()
        .fold(T::Real::zero(), |acc, x| acc + x.abs_sq())
        .sqrt()
}

/// y = y + alpha * x
#[inline]
pub fn axpy<T: Element>(y: &mut [T], alpha: T, x: &[T]) {
    for (yi, &xi) in y.iter_mut().zip(x) {
        *yi += alpha * xi;
    }
}

/// Scale a vector in place by a real factor
#[inline]
pub fn scale_in_place<T: Element>(v: &mut [T], s: T::Real) {
    for x in v.iter_mut() {
        *x = x.scale(s);
    }
}

/// Normalize in place, returning the original norm
///
/// Returns `None` and leaves `v` untouched when its norm is zero.
pub fn normalize<T: Element>(v: &mut [T]) -> Option<T::Real> {
    let norm = vector_norm(v);
    if norm > T::Real::zero() {
        scale_in_place(v, T::Real::one() / norm);
        Some(norm)
    } else {
        None
    }
}

/// Orthogonalize `w` against an orthonormal basis with repeated modified
/// Gram-Schmidt, returning the accumulated projection coefficients
///
/// `coeffs[i] = <basis_i, w_original>` up to rounding.
pub fn orthogonalize_against<T: Element>(basis: &[Vec<T>], w: &mut [T]) -> Vec<T> {
    let mut coeffs = vec![T::zero(); basis.len()];
    for _ in 0..REORTH_PASSES {
        for (c, b) in coeffs.iter_mut().zip(basis) {
            let h = vector_dot(b, w);
            axpy(w, -h, b);
            *c += h;
        }
    }
    coeffs
}

/// Linear combination of basis vectors: sum_i coeffs[i] * basis[i]
pub fn accumulate_basis_combination<T: Element>(basis: &[Vec<T>], coeffs: &[T], n: usize) -> Vec<T> {
    let mut out = vec![T::zero(); n];
    for (b, &c) in basis.iter().zip(coeffs) {
        if c != T::zero() {
            axpy(&mut out, c, b);
        }
    }
    out
}

/// Threshold below which a reorthogonalized vector is considered zero
#[inline]
pub fn invariant_subspace_tol<T: Element>(reference_norm: T::Real) -> T::Real {
    T::Real::from_f64(INVARIANT_SUBSPACE_FACTOR) * T::Real::EPSILON * reference_norm
}

/// Orthonormalize candidates against an existing orthonormal basis and append
/// the independent ones
///
/// Returns the number of columns appended.
pub fn extend_orthonormal<T: Element>(
    basis: &mut Vec<Vec<T>>,
    candidates: impl IntoIterator<Item = Vec<T>>,
) -> usize {
    let before = basis.len();
    let drop_factor = T::Real::from_f64(DEPENDENT_COLUMN_FACTOR) * T::Real::EPSILON.sqrt();
    for mut col in candidates {
        let original = vector_norm(&col);
        if original == T::Real::zero() {
            continue;
        }
        orthogonalize_against(basis, &mut col);
        let remaining = vector_norm(&col);
        if remaining <= drop_factor * original {
            continue;
        }
        scale_in_place(&mut col, T::Real::one() / remaining);
        basis.push(col);
    }
    basis.len() - before
}
