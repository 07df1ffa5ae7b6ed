//! Dense Hermitian eigensolver for the small projected matrices produced by
//! Lanczos and LOBPCG
//!
//! Projected problems are at most a few hundred wide, so a cyclic Jacobi
//! method is accurate and simple enough. Eigenvectors come out orthonormal to
//! working precision regardless of eigenvalue clustering.

use std::cmp::Ordering;

use crate::dtype::{Element, RealElement};
use crate::error::{Error, Result};
use crate::matrix::DenseMatrix;

use super::super::types::WhichEigenvalues;

/// Upper bound on full Jacobi sweeps
const MAX_SWEEPS: usize = 100;

/// Eigendecomposition of a Hermitian matrix with cyclic complex Jacobi rotations
///
/// Only the Hermitian part `(A + A^H) / 2` of the input is used.
///
/// Returns `(eigenvalues, eigenvectors)` with eigenvalues ascending and the
/// corresponding unit eigenvectors as columns of a unitary matrix.
pub fn hermitian_eig<T: Element>(a: &DenseMatrix<T>) -> Result<(Vec<T::Real>, DenseMatrix<T>)> {
    let [nrows, ncols] = a.shape();
    if nrows != ncols {
        return Err(Error::shape_mismatch(&[nrows, nrows], &[nrows, ncols]));
    }
    let n = nrows;
    let half = T::Real::from_f64(0.5);

    let mut h = DenseMatrix::from_fn(n, n, |i, j| {
        if i == j {
            T::from_real(a[(i, i)].re())
        } else {
            (a[(i, j)] + a[(j, i)].conj()).scale(half)
        }
    });
    let mut v = DenseMatrix::<T>::identity(n);

    let scale = h.frobenius_norm();
    let threshold = T::Real::EPSILON * scale;

    for _ in 0..MAX_SWEEPS {
        if off_diagonal_norm(&h) <= threshold {
            break;
        }
        for p in 0..n {
            for q in (p + 1)..n {
                rotate(&mut h, &mut v, p, q);
            }
        }
    }

    let diagonal: Vec<T::Real> = (0..n).map(|i| h[(i, i)].re()).collect();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&x, &y| diagonal[x].partial_cmp(&diagonal[y]).unwrap_or(Ordering::Equal));

    let eigenvalues = order.iter().map(|&i| diagonal[i]).collect();
    Ok((eigenvalues, v.select_columns(&order)))
}

fn off_diagonal_norm<T: Element>(h: &DenseMatrix<T>) -> T::Real {
    let n = h.nrows();
    let mut sum = T::Real::zero();
    for i in 0..n {
        for j in 0..n {
            if i != j {
                sum = sum + h[(i, j)].abs_sq();
            }
        }
    }
    sum.sqrt()
}

/// Annihilate `h[p, q]` with the unitary `U = D * G`, where `D` rotates the
/// phase of `h[p, q]` onto the real axis and `G` is a real Jacobi rotation.
///
/// `U e_p = c e_p - s conj(e) e_q` and `U e_q = s e_p + c conj(e) e_q`, with
/// `e` the phase of `h[p, q]`.
fn rotate<T: Element>(h: &mut DenseMatrix<T>, v: &mut DenseMatrix<T>, p: usize, q: usize) {
    let g = h[(p, q)];
    let g_abs = g.abs();
    if g_abs == T::Real::zero() {
        return;
    }
    let one = T::Real::one();
    let two = one + one;

    let phase = g.scale(one / g_abs);
    let app = h[(p, p)].re();
    let aqq = h[(q, q)].re();

    // Numerically stable tangent of the rotation angle
    let theta = (aqq - app) / (two * g_abs);
    let t_mag = one / (theta.abs() + (theta * theta + one).sqrt());
    let t = if theta < T::Real::zero() { -t_mag } else { t_mag };
    let c = one / (t * t + one).sqrt();
    let s = t * c;

    let cs = T::from_real(c);
    let ss = T::from_real(s);
    let phase_conj = phase.conj();
    let n = h.nrows();

    // H <- H U
    for i in 0..n {
        let hip = h[(i, p)];
        let hiq = h[(i, q)];
        h[(i, p)] = cs * hip - ss * phase_conj * hiq;
        h[(i, q)] = ss * hip + cs * phase_conj * hiq;
    }
    // H <- U^H H
    for j in 0..n {
        let hpj = h[(p, j)];
        let hqj = h[(q, j)];
        h[(p, j)] = cs * hpj - ss * phase * hqj;
        h[(q, j)] = ss * hpj + cs * phase * hqj;
    }
    h[(p, q)] = T::zero();
    h[(q, p)] = T::zero();
    h[(p, p)] = T::from_real(app - t * g_abs);
    h[(q, q)] = T::from_real(aqq + t * g_abs);

    // V <- V U
    for i in 0..n {
        let vip = v[(i, p)];
        let viq = v[(i, q)];
        v[(i, p)] = cs * vip - ss * phase_conj * viq;
        v[(i, q)] = ss * vip + cs * phase_conj * viq;
    }
}

/// Select eigenvalue indices according to the `which` criterion, most wanted first
pub fn select_eigenvalues<R: RealElement>(eigenvalues: &[R], k: usize, which: WhichEigenvalues) -> Vec<usize> {
    let n = eigenvalues.len();
    let k = k.min(n);
    let mut indices: Vec<usize> = (0..n).collect();
    let cmp = |a: R, b: R| a.partial_cmp(&b).unwrap_or(Ordering::Equal);

    match which {
        WhichEigenvalues::LargestMagnitude => {
            indices.sort_by(|&a, &b| cmp(eigenvalues[b].abs(), eigenvalues[a].abs()));
        }
        WhichEigenvalues::SmallestMagnitude => {
            indices.sort_by(|&a, &b| cmp(eigenvalues[a].abs(), eigenvalues[b].abs()));
        }
        WhichEigenvalues::LargestAlgebraic => {
            indices.sort_by(|&a, &b| cmp(eigenvalues[b], eigenvalues[a]));
        }
        WhichEigenvalues::SmallestAlgebraic => {
            indices.sort_by(|&a, &b| cmp(eigenvalues[a], eigenvalues[b]));
        }
    }

    indices.truncate(k);
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::iterative::helpers::{vector_dot, vector_norm};
    use crate::dtype::Complex128;

    #[test]
    fn test_hermitian_eig_real_symmetric() {
        let a = DenseMatrix::from_slice(&[2.0f64, 1.0, 0.0, 1.0, 2.0, 1.0, 0.0, 1.0, 2.0], [3, 3]);
        let (vals, vecs) = hermitian_eig(&a).unwrap();
        let expected = [2.0 - 2.0f64.sqrt(), 2.0, 2.0 + 2.0f64.sqrt()];
        for (got, want) in vals.iter().zip(expected) {
            assert!((got - want).abs() < 1e-12, "got {got}, want {want}");
        }
        for j in 0..3 {
            let x = vecs.column(j);
            let ax = a.matvec(&x).unwrap();
            for i in 0..3 {
                assert!((ax[i] - vals[j] * x[i]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_hermitian_eig_complex() {
        // [[2, i], [-i, 2]] has eigenvalues 1 and 3
        let a = DenseMatrix::from_slice(
            &[
                Complex128::new(2.0, 0.0),
                Complex128::new(0.0, 1.0),
                Complex128::new(0.0, -1.0),
                Complex128::new(2.0, 0.0),
            ],
            [2, 2],
        );
        let (vals, vecs) = hermitian_eig(&a).unwrap();
        assert!((vals[0] - 1.0).abs() < 1e-12);
        assert!((vals[1] - 3.0).abs() < 1e-12);

        let x0 = vecs.column(0);
        let x1 = vecs.column(1);
        assert!((vector_norm(&x0) - 1.0).abs() < 1e-12);
        assert!(vector_dot(&x0, &x1).magnitude() < 1e-12);

        let ax = a.matvec(&x1).unwrap();
        for i in 0..2 {
            assert!((ax[i] - x1[i].scale(3.0)).magnitude() < 1e-12);
        }
    }

    #[test]
    fn test_hermitian_eig_rejects_rectangular() {
        let a = DenseMatrix::<f64>::zeros(2, 3);
        assert!(matches!(hermitian_eig(&a), Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn test_select_eigenvalues() {
        let vals = [-5.0f64, 1.0, 3.0, -0.5];
        assert_eq!(select_eigenvalues(&vals, 2, WhichEigenvalues::LargestMagnitude), vec![0, 2]);
        assert_eq!(select_eigenvalues(&vals, 2, WhichEigenvalues::SmallestMagnitude), vec![3, 1]);
        assert_eq!(select_eigenvalues(&vals, 1, WhichEigenvalues::LargestAlgebraic), vec![2]);
        assert_eq!(select_eigenvalues(&vals, 9, WhichEigenvalues::SmallestAlgebraic), vec![0, 3, 1, 2]);
    }
}
