//! Generic partial SVD via eigendecomposition of the Gram operator
//!
//! Pipeline:
//! 1. Pick `X` so that `X^H X` has dimension `min(rows, cols)` ([`gram`])
//! 2. Compute `k` eigenpairs of `X^H X` with an [`EigenSource`]
//! 3. Clamp eigenvalues and split off the ones below the noise cutoff ([`threshold`])
//! 4. Recover the other side's singular vectors as `X v / s` ([`assemble`])
//! 5. Pad both sides with random orthonormal vectors up to `k` ([`augment`])
//! 6. Sort triplets by ascending singular value

pub mod assemble;
pub mod augment;
pub mod gram;
pub mod threshold;

use tracing::debug;

use crate::dtype::{Element, RealElement};
use crate::error::Result;
use crate::operator::{LinearOperator, resolve_dtype};

use super::super::random::RandomVectorSource;
use super::super::traits::{EigenSource, validate_svds_inputs};
use super::super::types::{EigenRequest, SvdsOptions, SvdsResult};

use assemble::{reliable_singular_vectors, sort_triplets};
use augment::{augmented_orthonormal_cols, augmented_orthonormal_rows};
use gram::{GramOperator, SelectedOperator};
use threshold::partition_eigenvalues;

/// Generic partial SVD implementation
///
/// `solver` computes the Gram eigenpairs, `rng` supplies the padding vectors
/// for degenerate directions. The eigensolver tolerance is `options.tol^2`,
/// since Gram eigenvalues are squared singular values.
pub fn svds_impl<T, O, E, S>(
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
    let shape = a.shape();
    validate_svds_inputs(shape, k, options)?;

    let dtype = resolve_dtype(a);
    let gram = GramOperator::new(SelectedOperator::select(a));
    debug!(
        rows = shape[0],
        cols = shape[1],
        k,
        %dtype,
        side = ?gram.selected().side(),
        solver = solver.name(),
        "svds dispatch"
    );

    let request = EigenRequest {
        k,
        tol: options.tol * options.tol,
        max_iter: options.max_iter,
        ncv: options.ncv,
        which: options.which.to_eigen(),
        v0: options.v0.clone(),
        seed: options.seed,
    };
    let pairs = solver.eigsh(&gram, &request)?;

    let partition = partition_eigenvalues(&pairs.eigenvalues, dtype);
    let rank = partition.rank();
    let padding = partition.degenerate();
    debug!(
        cutoff = partition.cutoff.to_f64(),
        rank,
        padding,
        iterations = pairs.iterations,
        "svds eigenvalue partition"
    );

    if !options.return_vectors.wants_vectors() {
        let (singular_values, _, _) = sort_triplets::<T>(&partition.singular_values, None, None);
        return Ok(SvdsResult {
            u: None,
            singular_values,
            vt: None,
            rank,
            iterations: pairs.iterations,
        });
    }

    let reliable = pairs.eigenvectors.select_columns(&partition.reliable);
    let reliable_values = &partition.singular_values[..rank];
    let vectors = reliable_singular_vectors(
        gram.selected(),
        reliable,
        reliable_values,
        options.return_vectors,
    )?;

    if padding > 0 {
        debug!(padding, "svds augmenting degenerate singular vectors");
    }
    let u = vectors
        .u
        .map(|u| augmented_orthonormal_cols(&u, padding, &mut *rng))
        .transpose()?;
    let vt = vectors
        .vt
        .map(|vt| augmented_orthonormal_rows(&vt, padding, &mut *rng))
        .transpose()?;

    let (singular_values, u, vt) = sort_triplets(&partition.singular_values, u, vt);
    Ok(SvdsResult {
        u,
        singular_values,
        vt,
        rank,
        iterations: pairs.iterations,
    })
}
