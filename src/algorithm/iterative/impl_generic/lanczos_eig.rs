//! Generic thick-restart Lanczos eigensolver for Hermitian operators

use tracing::trace;

use crate::dtype::{Element, RealElement};
use crate::error::{Error, Result};
use crate::matrix::DenseMatrix;
use crate::operator::LinearOperator;

use super::super::helpers::{
    accumulate_basis_combination, invariant_subspace_tol, normalize, orthogonalize_against,
    scale_in_place, vector_norm,
};
use super::super::random::{RandomVectorSource, push_random_orthonormal, seeded_rng};
use super::super::types::{EigenPairs, EigenRequest};
use super::dense_eig::{hermitian_eig, select_eigenvalues};

/// Lower bound on the default Krylov dimension
const MIN_NCV: usize = 20;

/// Default restart bound per unit of operator dimension
const MAX_ITER_PER_DIM: usize = 10;

/// Generic Lanczos eigensolver implementation
///
/// Finds `k` eigenpairs of a Hermitian operator with thick-restart Lanczos.
///
/// Algorithm:
/// 1. Expand an orthonormal Krylov basis V to `ncv` vectors. Every new
///    direction is reorthogonalized against the whole basis. The projected
///    matrix H = V^H A V is kept in its exact structure: tridiagonal, with
///    an arrowhead border after a restart.
/// 2. Diagonalize H (small dense problem) and pick the wanted Ritz values.
/// 3. A Ritz pair (theta, V z) has residual |beta * z_m|, where beta couples the
///    basis to the next direction. Accept when it is below
///    `tol * max(|theta|, eps^(2/3))`.
/// 4. Otherwise keep the most wanted Ritz vectors as the start of the next
///    basis and continue from the pending direction.
///
/// If the basis becomes invariant before reaching `ncv`, a random direction
/// orthogonal to it is injected. A basis spanning the whole space gives exact
/// Ritz pairs.
pub fn lanczos_eig_impl<T, O>(a: &O, request: &EigenRequest<T>) -> Result<EigenPairs<T>>
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

    if k == 0 || k >= n {
        return Err(Error::invalid_argument(
            "k",
            format!("must satisfy 0 < k < n, got k={k}, n={n}"),
        ));
    }

    let ncv = request.ncv.unwrap_or_else(|| (2 * k + 1).max(MIN_NCV).min(n));
    if ncv <= k || ncv > n {
        return Err(Error::invalid_argument(
            "ncv",
            format!("must satisfy k < ncv <= n, got ncv={ncv}, k={k}, n={n}"),
        ));
    }
    let max_iter = request.max_iter.unwrap_or(MAX_ITER_PER_DIM * n);

    let eps = T::Real::EPSILON;
    let tol = if request.tol > 0.0 {
        T::Real::from_f64(request.tol)
    } else {
        eps
    };
    let ritz_floor = T::Real::from_f64(eps.to_f64().powf(2.0 / 3.0));

    let mut rng = seeded_rng(request.seed);
    let mut v = starting_vector(request.v0.as_deref(), n, &mut rng)?;

    let mut basis: Vec<Vec<T>> = Vec::with_capacity(ncv);
    let mut h = DenseMatrix::<T>::zeros(ncv, ncv);
    let mut beta = T::Real::zero();
    let mut nconv = 0;

    for restart_iter in 0..max_iter {
        while basis.len() < ncv {
            let j = basis.len();
            let mut w = a.matvec(&v)?;
            let av_norm = vector_norm(&w);
            basis.push(v);

            // Full reorthogonalization; only the diagonal coefficient enters H
            let coeffs = orthogonalize_against(&basis, &mut w);
            h[(j, j)] = T::from_real(coeffs[j].re());

            beta = vector_norm(&w);
            if beta > invariant_subspace_tol::<T>(av_norm) {
                scale_in_place(&mut w, T::Real::one() / beta);
                v = w;
            } else {
                // Invariant subspace: the coupling to the next direction is zero
                beta = T::Real::zero();
                trace!(dim = basis.len(), "lanczos invariant subspace");
                v = if push_random_orthonormal(&mut rng, &mut basis, n) {
                    basis.pop().unwrap_or_default()
                } else {
                    w
                };
            }

            if j + 1 < ncv {
                h[(j + 1, j)] = T::from_real(beta);
                h[(j, j + 1)] = T::from_real(beta);
            }
        }

        let m = basis.len();
        let (theta, z) = hermitian_eig(&h)?;
        let wanted = select_eigenvalues(&theta, k, request.which);

        nconv = wanted
            .iter()
            .filter(|&&i| beta * z[(m - 1, i)].abs() <= tol * theta[i].abs().max_value(ritz_floor))
            .count();
        trace!(restart = restart_iter, nconv, k, "lanczos restart");

        if nconv >= k || m >= n {
            let eigenvalues = wanted.iter().map(|&i| theta[i]).collect();
            let ritz_vectors: Vec<Vec<T>> = wanted
                .iter()
                .map(|&i| accumulate_basis_combination(&basis, &z.column(i), n))
                .collect();
            return Ok(EigenPairs {
                eigenvalues,
                eigenvectors: DenseMatrix::from_columns(&ritz_vectors, n)?,
                iterations: restart_iter + 1,
                nconv: k,
            });
        }

        // Thick restart: keep the most wanted Ritz vectors. H becomes
        // diag(theta) bordered by their couplings to the pending direction.
        let keep = (k + (ncv - k) / 2).min(ncv - 1);
        let kept = select_eigenvalues(&theta, keep, request.which);
        basis = kept
            .iter()
            .map(|&i| accumulate_basis_combination(&basis, &z.column(i), n))
            .collect();
        h = DenseMatrix::zeros(ncv, ncv);
        for (slot, &i) in kept.iter().enumerate() {
            let coupling = z[(m - 1, i)].scale(beta);
            h[(slot, slot)] = T::from_real(theta[i]);
            h[(keep, slot)] = coupling;
            h[(slot, keep)] = coupling.conj();
        }
    }

    Err(Error::NotConverged {
        solver: "lanczos",
        iterations: max_iter,
        nconv,
        k,
    })
}

/// Normalized caller vector, or a random unit vector from the seeded source
fn starting_vector<T: Element, S: RandomVectorSource>(
    v0: Option<&[T]>,
    n: usize,
    rng: &mut S,
) -> Result<Vec<T>> {
    match v0 {
        Some(v0) => {
            if v0.len() != n {
                return Err(Error::shape_mismatch(&[n], &[v0.len()]));
            }
            let mut v = v0.to_vec();
            normalize(&mut v).ok_or_else(|| Error::invalid_argument("v0", "must be nonzero"))?;
            Ok(v)
        }
        None => Ok(rng.random_unit_vector(n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::iterative::types::WhichEigenvalues;
    use crate::dtype::Complex128;

    fn diagonal(values: &[f64]) -> DenseMatrix<f64> {
        let n = values.len();
        DenseMatrix::from_fn(n, n, |i, j| if i == j { values[i] } else { 0.0 })
    }

    #[test]
    fn test_lanczos_restarts_on_diagonal() {
        let values: Vec<f64> = (1..=60).map(|i| i as f64).collect();
        let a = diagonal(&values);
        let mut request = EigenRequest::new(3);
        request.ncv = Some(10);
        request.tol = 1e-10;

        let result = lanczos_eig_impl(&a, &request).unwrap();
        assert_eq!(result.nconv, 3);
        for (got, want) in result.eigenvalues.iter().zip([60.0, 59.0, 58.0]) {
            assert!((got - want).abs() < 1e-6, "got {got}, want {want}");
        }
        assert_eq!(result.eigenvectors.shape(), [60, 3]);
    }

    #[test]
    fn test_lanczos_smallest_exact_when_basis_spans_space() {
        let a = diagonal(&[4.0, 1.0, 3.0, 2.0, 5.0]);
        let mut request = EigenRequest::new(2);
        request.which = WhichEigenvalues::SmallestMagnitude;

        let result = lanczos_eig_impl(&a, &request).unwrap();
        assert!((result.eigenvalues[0] - 1.0).abs() < 1e-12);
        assert!((result.eigenvalues[1] - 2.0).abs() < 1e-12);
        // eigenvector of 1.0 is +-e_1
        assert!((result.eigenvectors[(1, 0)].abs() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_lanczos_invariant_start_vector() {
        // v0 = e_0 spans an invariant subspace; a random direction must be injected
        let a = diagonal(&[1.0, 2.0, 3.0, 4.0]);
        let mut request = EigenRequest::new(1);
        request.v0 = Some(vec![1.0, 0.0, 0.0, 0.0]);

        let result = lanczos_eig_impl(&a, &request).unwrap();
        assert!((result.eigenvalues[0] - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_lanczos_complex_hermitian() {
        let a = DenseMatrix::from_slice(
            &[
                Complex128::new(2.0, 0.0),
                Complex128::new(0.0, 1.0),
                Complex128::new(0.0, 0.0),
                Complex128::new(0.0, -1.0),
                Complex128::new(2.0, 0.0),
                Complex128::new(0.0, 0.0),
                Complex128::new(0.0, 0.0),
                Complex128::new(0.0, 0.0),
                Complex128::new(0.5, 0.0),
            ],
            [3, 3],
        );
        let result = lanczos_eig_impl(&a, &EigenRequest::new(1)).unwrap();
        assert!((result.eigenvalues[0] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_lanczos_argument_errors() {
        let a = diagonal(&[1.0, 2.0, 3.0]);
        assert!(matches!(
            lanczos_eig_impl(&a, &EigenRequest::new(3)),
            Err(Error::InvalidArgument { arg: "k", .. })
        ));

        let mut request = EigenRequest::new(1);
        request.ncv = Some(1);
        assert!(matches!(
            lanczos_eig_impl(&a, &request),
            Err(Error::InvalidArgument { arg: "ncv", .. })
        ));

        let mut request = EigenRequest::new(1);
        request.v0 = Some(vec![1.0; 4]);
        assert!(matches!(lanczos_eig_impl(&a, &request), Err(Error::ShapeMismatch { .. })));

        let rect = DenseMatrix::<f64>::zeros(3, 4);
        assert!(matches!(
            lanczos_eig_impl(&rect, &EigenRequest::new(1)),
            Err(Error::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_lanczos_not_converged() {
        let values: Vec<f64> = (1..=200).map(|i| 1.0 + 1e-3 * i as f64).collect();
        let a = diagonal(&values);
        let mut request = EigenRequest::new(4);
        request.ncv = Some(6);
        request.max_iter = Some(1);

        let err = lanczos_eig_impl(&a, &request).unwrap_err();
        assert!(err.is_convergence_failure());
    }
}
