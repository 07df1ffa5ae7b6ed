//! Generic LOBPCG (Locally Optimal Block Preconditioned Conjugate Gradient)
//! eigensolver for Hermitian operators
//!
//! Runs without a preconditioner, so the search directions are the raw block
//! residuals.

use tracing::trace;

use crate::dtype::{Element, RealElement};
use crate::error::{Error, Result};
use crate::matrix::DenseMatrix;
use crate::operator::LinearOperator;

use super::super::helpers::{axpy, extend_orthonormal, vector_norm};
use super::super::random::{RandomVectorSource, push_random_orthonormal, seeded_rng};
use super::super::types::{EigenPairs, EigenRequest, WhichEigenvalues};
use super::dense_eig::{hermitian_eig, select_eigenvalues};

/// Default bound on block iterations
const DEFAULT_MAX_ITER: usize = 200;

/// Below `n < DENSE_FALLBACK_RATIO * k` the operator is materialized and
/// solved densely
const DENSE_FALLBACK_RATIO: usize = 5;

/// Generic LOBPCG implementation
///
/// Algorithm:
/// 1. Orthonormalize the initial block X and perform Rayleigh-Ritz on it.
/// 2. Form the residuals R = AX - X diag(theta). Converged columns have
///    ||r_i|| <= tol (default `sqrt(eps) * n`).
/// 3. Orthonormalize [X, W, P], where W are the active residuals and P the
///    previous update direction, and perform Rayleigh-Ritz on that subspace.
/// 4. The new X is the wanted Ritz block; the new P is its component outside
///    the old X.
///
/// The initial block is `v0` as a single column when `k == 1` and `v0` is
/// given, otherwise seeded standard normal entries.
pub fn lobpcg_impl<T, O>(a: &O, request: &EigenRequest<T>) -> Result<EigenPairs<T>>
where
    T: Element,
    O: LinearOperator<T> + ?Sized,
{
    let [nrows, ncols] = a.shape();
    if nrows != ncols {
        return Err(Error::shape_mismatch(&[nrows, nrows], &[nrows, ncols]));
    }
    let n = nrows;
    let k = request.k;

    if k == 0 || k > n {
        return Err(Error::invalid_argument(
            "k",
            format!("must satisfy 0 < k <= n, got k={k}, n={n}"),
        ));
    }

    let mut rng = seeded_rng(request.seed);
    let initial: Vec<Vec<T>> = match (&request.v0, k) {
        (Some(v0), 1) => {
            if v0.len() != n {
                return Err(Error::shape_mismatch(&[n], &[v0.len()]));
            }
            vec![v0.clone()]
        }
        _ => (0..k).map(|_| rng.random_vector(n)).collect(),
    };

    if n < DENSE_FALLBACK_RATIO * k {
        trace!(n, k, "lobpcg dense fallback");
        return dense_eigenpairs(a, n, k, request.which);
    }

    let max_iter = request.max_iter.unwrap_or(DEFAULT_MAX_ITER);
    let tol = if request.tol > 0.0 {
        T::Real::from_f64(request.tol)
    } else {
        T::Real::EPSILON.sqrt() * T::Real::from_f64(n as f64)
    };

    let mut x_cols: Vec<Vec<T>> = Vec::with_capacity(k);
    extend_orthonormal(&mut x_cols, initial);
    while x_cols.len() < k {
        push_random_orthonormal(&mut rng, &mut x_cols, n);
    }
    let x0 = DenseMatrix::from_columns(&x_cols, n)?;
    let ax0 = a.matmat(&x0)?;
    let (mut theta, mut x, mut ax, _) = rayleigh_ritz(&x0, &ax0, k, request.which)?;

    let mut p: Option<DenseMatrix<T>> = None;
    let mut nconv = 0;
    let mut iterations = 0;

    while iterations < max_iter {
        let residuals: Vec<Vec<T>> = (0..k)
            .map(|j| {
                let mut r = ax.column(j);
                axpy(&mut r, T::from_real(-theta[j]), &x.column(j));
                r
            })
            .collect();
        let norms: Vec<T::Real> = residuals.iter().map(|r| vector_norm(r)).collect();
        nconv = norms.iter().filter(|&&r| r <= tol).count();
        trace!(iteration = iterations, nconv, k, "lobpcg step");

        if nconv == k {
            return Ok(EigenPairs {
                eigenvalues: theta,
                eigenvectors: x,
                iterations,
                nconv,
            });
        }
        iterations += 1;

        let active = residuals
            .into_iter()
            .zip(&norms)
            .filter(|&(_, &norm)| norm > tol)
            .map(|(r, _)| r);

        let mut basis = x.columns();
        extend_orthonormal(&mut basis, active);
        if let Some(p) = &p {
            extend_orthonormal(&mut basis, p.columns());
        }
        if basis.len() == k {
            // No direction outside span(X) survived orthogonalization
            break;
        }

        let rest = DenseMatrix::from_columns(&basis[k..], n)?;
        let a_rest = a.matmat(&rest)?;
        let s = DenseMatrix::from_columns(&basis, n)?;
        let as_cols: Vec<Vec<T>> = ax.columns().into_iter().chain(a_rest.columns()).collect();
        let a_s = DenseMatrix::from_columns(&as_cols, n)?;

        let (new_theta, new_x, new_ax, coeffs) = rayleigh_ritz(&s, &a_s, k, request.which)?;
        let rest_rows: Vec<usize> = (k..basis.len()).collect();
        p = Some(rest.matmul(&coeffs.select_rows(&rest_rows))?);

        theta = new_theta;
        x = new_x;
        ax = new_ax;
    }

    Err(Error::NotConverged {
        solver: "lobpcg",
        iterations,
        nconv,
        k,
    })
}

/// Rayleigh-Ritz on an orthonormal basis `S` with precomputed `A S`
///
/// Returns the `k` wanted Ritz values (most wanted first), the Ritz block
/// `S C`, its image `A S C`, and the coefficients `C`.
#[allow(clippy::type_complexity)]
fn rayleigh_ritz<T: Element>(
    s: &DenseMatrix<T>,
    a_s: &DenseMatrix<T>,
    k: usize,
    which: WhichEigenvalues,
) -> Result<(Vec<T::Real>, DenseMatrix<T>, DenseMatrix<T>, DenseMatrix<T>)> {
    let gram = s.adjoint_matmul(a_s)?;
    let (values, vectors) = hermitian_eig(&gram)?;
    let wanted = select_eigenvalues(&values, k, which);
    let coeffs = vectors.select_columns(&wanted);
    let theta = wanted.iter().map(|&i| values[i]).collect();
    Ok((theta, s.matmul(&coeffs)?, a_s.matmul(&coeffs)?, coeffs))
}

/// Small problems: apply the operator to the identity and solve densely
fn dense_eigenpairs<T, O>(a: &O, n: usize, k: usize, which: WhichEigenvalues) -> Result<EigenPairs<T>>
where
    T: Element,
    O: LinearOperator<T> + ?Sized,
{
    let full = a.matmat(&DenseMatrix::identity(n))?;
    let (values, vectors) = hermitian_eig(&full)?;
    let wanted = select_eigenvalues(&values, k, which);
    Ok(EigenPairs {
        eigenvalues: wanted.iter().map(|&i| values[i]).collect(),
        eigenvectors: vectors.select_columns(&wanted),
        iterations: 0,
        nconv: k,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::iterative::helpers::vector_dot;

    fn diagonal(values: &[f64]) -> DenseMatrix<f64> {
        let n = values.len();
        DenseMatrix::from_fn(n, n, |i, j| if i == j { values[i] } else { 0.0 })
    }

    #[test]
    fn test_lobpcg_largest() {
        let values: Vec<f64> = (1..=30).map(|i| (i * i) as f64).collect();
        let a = diagonal(&values);
        let mut request = EigenRequest::new(2);
        request.which = WhichEigenvalues::LargestMagnitude;

        let result = lobpcg_impl(&a, &request).unwrap();
        assert_eq!(result.nconv, 2);
        assert!((result.eigenvalues[0] - 900.0).abs() < 1e-6);
        assert!((result.eigenvalues[1] - 841.0).abs() < 1e-6);

        let x0 = result.eigenvectors.column(0);
        let x1 = result.eigenvectors.column(1);
        assert!(vector_dot(&x0, &x1).abs() < 1e-10);
        assert!((x0[29].abs() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_lobpcg_smallest() {
        let values: Vec<f64> = (1..=25).map(|i| i as f64).collect();
        let a = diagonal(&values);
        let mut request = EigenRequest::new(1);
        request.which = WhichEigenvalues::SmallestAlgebraic;

        let result = lobpcg_impl(&a, &request).unwrap();
        assert!((result.eigenvalues[0] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_lobpcg_dense_fallback() {
        let a = diagonal(&[3.0, 1.0, 2.0]);
        let result = lobpcg_impl(&a, &EigenRequest::new(2)).unwrap();
        assert_eq!(result.iterations, 0);
        assert_eq!(result.eigenvalues, vec![3.0, 2.0]);
    }

    #[test]
    fn test_lobpcg_v0_single_column() {
        let values: Vec<f64> = (1..=10).map(|i| i as f64).collect();
        let a = diagonal(&values);
        let mut request = EigenRequest::new(1);
        request.v0 = Some(vec![0.0; 9]);
        assert!(matches!(lobpcg_impl(&a, &request), Err(Error::ShapeMismatch { .. })));

        let mut v0 = vec![0.0; 10];
        v0[9] = 1.0;
        request.v0 = Some(v0);
        let result = lobpcg_impl(&a, &request).unwrap();
        assert_eq!(result.iterations, 0);
        assert!((result.eigenvalues[0] - 10.0).abs() < 1e-12);
    }
}
