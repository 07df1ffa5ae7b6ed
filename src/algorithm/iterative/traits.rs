//! Eigensolver trait and input validation
//!
//! Defines the contract between the partial SVD and the Hermitian
//! eigensolvers it runs on the Gram operator.

use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::operator::LinearOperator;

use super::impl_generic::{lanczos_eig_impl, lobpcg_impl};
use super::types::{EigenPairs, EigenRequest, SvdsOptions, SvdsSolver};

/// A source of eigenpairs for Hermitian operators
///
/// # Implementation Requirements
///
/// Implementations MUST:
/// - Return exactly `request.k` eigenpairs ordered according to
///   `request.which`, most wanted first
/// - Return eigenvectors as orthonormal columns of an `[n, k]` matrix
/// - Interpret `request.tol` in the operator's own units
/// - Fail with [`Error::NotConverged`] rather than return unconverged pairs
pub trait EigenSource<T: Element> {
    /// Compute `request.k` eigenpairs of the Hermitian operator `a`
    fn eigsh<O: LinearOperator<T> + ?Sized>(
        &self,
        a: &O,
        request: &EigenRequest<T>,
    ) -> Result<EigenPairs<T>>;

    /// Short backend name used in logs and errors
    fn name(&self) -> &'static str;
}

/// Thick-restart Lanczos backend
#[derive(Debug, Clone, Copy, Default)]
pub struct Lanczos;

/// LOBPCG backend
#[derive(Debug, Clone, Copy, Default)]
pub struct Lobpcg;

impl<T: Element> EigenSource<T> for Lanczos {
    fn eigsh<O: LinearOperator<T> + ?Sized>(
        &self,
        a: &O,
        request: &EigenRequest<T>,
    ) -> Result<EigenPairs<T>> {
        lanczos_eig_impl(a, request)
    }

    fn name(&self) -> &'static str {
        "lanczos"
    }
}

impl<T: Element> EigenSource<T> for Lobpcg {
    fn eigsh<O: LinearOperator<T> + ?Sized>(
        &self,
        a: &O,
        request: &EigenRequest<T>,
    ) -> Result<EigenPairs<T>> {
        lobpcg_impl(a, request)
    }

    fn name(&self) -> &'static str {
        "lobpcg"
    }
}

/// Validate partial SVD inputs before any operator application
///
/// Checks:
/// - `1 <= k < min(rows, cols)`
/// - `v0`, when given, has length `min(rows, cols)`
/// - `ncv`, when given for the Lanczos backend, satisfies `k < ncv <= min(rows, cols)`
/// - `tol` is finite and non-negative
/// - `max_iter`, when given, is positive
pub fn validate_svds_inputs<T: Element>(
    shape: [usize; 2],
    k: usize,
    options: &SvdsOptions<T>,
) -> Result<()> {
    let min_dim = shape[0].min(shape[1]);

    if k == 0 || k >= min_dim {
        return Err(Error::InvalidCount { k, min_dim });
    }

    if let Some(v0) = &options.v0 {
        if v0.len() != min_dim {
            return Err(Error::shape_mismatch(&[min_dim], &[v0.len()]));
        }
    }

    if let (Some(ncv), SvdsSolver::Lanczos) = (options.ncv, options.solver) {
        if ncv <= k || ncv > min_dim {
            return Err(Error::invalid_argument(
                "ncv",
                format!("must satisfy k < ncv <= {min_dim}, got ncv={ncv}, k={k}"),
            ));
        }
    }

    if !options.tol.is_finite() || options.tol < 0.0 {
        return Err(Error::invalid_argument(
            "tol",
            format!("must be finite and non-negative, got {}", options.tol),
        ));
    }

    if options.max_iter == Some(0) {
        return Err(Error::invalid_argument("max_iter", "must be positive"));
    }

    Ok(())
}
