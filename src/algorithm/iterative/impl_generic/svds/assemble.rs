//! Recovery of singular vectors from Gram eigenvectors and canonical ordering

use std::cmp::Ordering;

use crate::dtype::{Element, RealElement};
use crate::error::Result;
use crate::matrix::DenseMatrix;
use crate::operator::LinearOperator;

use super::super::super::types::ReturnVectors;
use super::gram::{GramSide, SelectedOperator};

/// Singular vectors tied to reliable eigenpairs, before augmentation
pub struct ReliableVectors<T: Element> {
    /// Left singular vectors `[rows, rank]`
    pub u: Option<DenseMatrix<T>>,
    /// Right singular vectors `[rank, cols]`
    pub vt: Option<DenseMatrix<T>>,
}

/// Turn reliable Gram eigenvectors into singular vectors
///
/// The eigenvectors are singular vectors on the Gram side directly. The other
/// side is `X @ v / s`, and is skipped when `mode` does not want it.
pub fn reliable_singular_vectors<T, O>(
    selected: &SelectedOperator<'_, T, O>,
    eigenvectors: DenseMatrix<T>,
    singular_values: &[T::Real],
    mode: ReturnVectors,
) -> Result<ReliableVectors<T>>
where
    T: Element,
    O: LinearOperator<T> + ?Sized,
{
    match selected.side() {
        GramSide::Normal => {
            let u = if mode != ReturnVectors::Vh {
                Some(complementary(selected, &eigenvectors, singular_values)?)
            } else {
                None
            };
            Ok(ReliableVectors {
                u,
                vt: Some(eigenvectors.conj_transpose()),
            })
        }
        GramSide::Adjoint => {
            let vt = if mode != ReturnVectors::U {
                Some(complementary(selected, &eigenvectors, singular_values)?.conj_transpose())
            } else {
                None
            };
            Ok(ReliableVectors {
                u: Some(eigenvectors),
                vt,
            })
        }
    }
}

fn complementary<T, O>(
    selected: &SelectedOperator<'_, T, O>,
    vectors: &DenseMatrix<T>,
    singular_values: &[T::Real],
) -> Result<DenseMatrix<T>>
where
    T: Element,
    O: LinearOperator<T> + ?Sized,
{
    let mut out = selected.x_matmat(vectors)?;
    out.div_columns(singular_values)?;
    Ok(out)
}

/// Permutation that sorts values ascending (stable)
pub fn argsort_ascending<R: RealElement>(values: &[R]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].partial_cmp(&values[b]).unwrap_or(Ordering::Equal));
    order
}

/// Sort singular values ascending and permute U columns and Vt rows alike
pub fn sort_triplets<T: Element>(
    singular_values: &[T::Real],
    u: Option<DenseMatrix<T>>,
    vt: Option<DenseMatrix<T>>,
) -> (Vec<T::Real>, Option<DenseMatrix<T>>, Option<DenseMatrix<T>>) {
    let order = argsort_ascending(singular_values);
    let sorted = order.iter().map(|&i| singular_values[i]).collect();
    let u = u.map(|u| u.select_columns(&order));
    let vt = vt.map(|vt| vt.select_rows(&order));
    (sorted, u, vt)
}
