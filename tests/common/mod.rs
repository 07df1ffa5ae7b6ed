//! Common test utilities
#![allow(dead_code)]

use gramsvd::dtype::{Element, RealElement};
use gramsvd::matrix::DenseMatrix;
use gramsvd::operator::LinearOperator;

/// The 4x3 matrix used throughout the SVD tests
///
/// Singular values: approximately 5.6060, 2.7519, 1.0.
pub fn example_matrix() -> DenseMatrix<f64> {
    DenseMatrix::from_rows(&[
        vec![1.0, 0.0, 0.0],
        vec![5.0, 0.0, 2.0],
        vec![0.0, -1.0, 0.0],
        vec![0.0, 0.0, 3.0],
    ])
    .expect("example matrix rows have equal length")
}

/// Deterministic pseudo-random dense matrix with entries in [-1, 1)
pub fn lcg_matrix(rows: usize, cols: usize, seed: u64) -> DenseMatrix<f64> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    DenseMatrix::from_fn(rows, cols, |_, _| {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 11) as f64 / (1u64 << 53) as f64) * 2.0 - 1.0
    })
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Hermitian inner product of two vectors
pub fn dot<T: Element>(u: &[T], v: &[T]) -> T {
    u.iter()
        .zip(v)
        .fold(T::zero(), |acc, (&a, &b)| acc + a.conj() * b)
}

/// Largest deviation of `Q^H Q` from the identity over the columns of `q`
pub fn orthonormality_error<T: Element>(columns: &[Vec<T>]) -> f64 {
    let mut worst = 0.0f64;
    for (i, ci) in columns.iter().enumerate() {
        for (j, cj) in columns.iter().enumerate() {
            let expected = if i == j { T::one() } else { T::zero() };
            let err = (dot(ci, cj) - expected).abs().to_f64();
            worst = worst.max(err);
        }
    }
    worst
}

/// Rows of Vt as columns of V
pub fn v_columns<T: Element>(vt: &DenseMatrix<T>) -> Vec<Vec<T>> {
    vt.conj_transpose().columns()
}

/// Relative residual ||A v - s u|| / max(s, 1)
pub fn triplet_residual<T, O>(a: &O, u: &[T], s: T::Real, v: &[T]) -> f64
where
    T: Element,
    O: LinearOperator<T>,
{
    let av = a.matvec(v).expect("operator accepts v");
    let mut sum = 0.0f64;
    for (x, y) in av.iter().zip(u) {
        let d = (*x - y.scale(s)).abs().to_f64();
        sum += d * d;
    }
    sum.sqrt() / s.to_f64().max(1.0)
}
