//! Hermitian eigensolvers and the Gram-operator partial SVD
//!
//! # Available Eigensolvers
//!
//! - **Lanczos** - Thick-restart Lanczos with full reorthogonalization
//! - **LOBPCG** - Locally optimal block preconditioned conjugate gradient
//!
//! # Partial SVD
//!
//! [`svds`] computes `k` singular triplets of an operator `A` by
//! eigendecomposing `A^H A` or `A A^H`, whichever is smaller. Eigenvalues at
//! the noise floor are treated as rank deficiency: their singular values are
//! reported as exactly zero and their vectors are random orthonormal
//! completions.
//!
//! # Architecture
//!
//! The partial SVD only talks to eigensolvers through [`EigenSource`], and
//! only to randomness through [`RandomVectorSource`]. The generic
//! implementations in `impl_generic/` define the algorithms.

mod helpers;
mod random;
mod traits;
mod types;

pub mod impl_generic;

use crate::dtype::Element;
use crate::error::Result;
use crate::operator::LinearOperator;

// Re-export types
pub use types::{
    EigenPairs, EigenRequest, ReturnVectors, SvdsOptions, SvdsResult, SvdsSolver,
    WhichEigenvalues, WhichSingularValues,
};

// Re-export traits
pub use random::{DEFAULT_SEED, RandomVectorSource, push_random_orthonormal, seeded_rng};
pub use traits::{EigenSource, Lanczos, Lobpcg, validate_svds_inputs};

// Re-export implementations
pub use impl_generic::{hermitian_eig, lanczos_eig_impl, lobpcg_impl, select_eigenvalues, svds_impl};

/// Partial SVD with the backend and seed named in `options`
///
/// Returns `k` singular triplets with singular values ascending. See
/// [`svds_with`] to supply the eigensolver and random source directly.
///
/// # Example
///
/// ```
/// use gramsvd::prelude::*;
///
/// let a = DenseMatrix::from_rows(&[
///     vec![1.0, 0.0, 0.0],
///     vec![5.0, 0.0, 2.0],
///     vec![0.0, -1.0, 0.0],
///     vec![0.0, 0.0, 3.0],
/// ])?;
/// let result = svds(&a, 2, &SvdsOptions::<f64>::default())?;
/// assert!((result.singular_values[0] - 2.7519).abs() < 1e-4);
/// assert!((result.singular_values[1] - 5.6060).abs() < 1e-4);
/// # Ok::<(), gramsvd::Error>(())
/// ```
pub fn svds<T, O>(a: &O, k: usize, options: &SvdsOptions<T>) -> Result<SvdsResult<T>>
where
    T: Element,
    O: LinearOperator<T> + ?Sized,
{
    let mut rng = seeded_rng(options.seed);
    match options.solver {
        SvdsSolver::Lanczos => svds_impl(a, k, options, &Lanczos, &mut rng),
        SvdsSolver::Lobpcg => svds_impl(a, k, options, &Lobpcg, &mut rng),
    }
}

/// Partial SVD with a caller-supplied eigensolver and padding source
///
/// `options.solver` is ignored. `rng` is only drawn from when the operator
/// is numerically rank deficient within the `k` requested values.
pub fn svds_with<T, O, E, S>(
    a: &O,
    k: usize,
    options: &SvdsOptions<T>,
    solver: &E,
    rng: &mut S,
) -> Result<SvdsResult<T>>
where
    T: Element,
    O: LinearOperator<T> + ?Sized,
    E: EigenSource<T>,
    S: RandomVectorSource,
{
    svds_impl(a, k, options, solver, rng)
}
