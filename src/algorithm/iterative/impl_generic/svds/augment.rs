//! Orthonormal basis augmentation for degenerate singular directions

use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::matrix::DenseMatrix;

use super::super::super::random::{RandomVectorSource, push_random_orthonormal};

/// Append `extra` random orthonormal columns to a matrix with orthonormal columns
///
/// Each new column is a random vector with its projection onto every earlier
/// column removed (modified Gram-Schmidt) and then normalized. The appended
/// columns complete the basis only; they carry no information about the
/// operator.
pub fn augmented_orthonormal_cols<T, S>(
    x: &DenseMatrix<T>,
    extra: usize,
    rng: &mut S,
) -> Result<DenseMatrix<T>>
where
    T: Element,
    S: RandomVectorSource + ?Sized,
{
    if extra == 0 {
        return Ok(x.clone());
    }
    let n = x.nrows();
    if x.ncols() + extra > n {
        return Err(Error::invalid_argument(
            "extra",
            format!(
                "cannot extend {} orthonormal columns by {extra} in dimension {n}",
                x.ncols()
            ),
        ));
    }

    let mut columns = x.columns();
    for _ in 0..extra {
        push_random_orthonormal(rng, &mut columns, n);
    }
    DenseMatrix::from_columns(&columns, n)
}

/// Append `extra` random orthonormal rows to a matrix with orthonormal rows
///
/// Defined as column augmentation of the transpose.
pub fn augmented_orthonormal_rows<T, S>(
    x: &DenseMatrix<T>,
    extra: usize,
    rng: &mut S,
) -> Result<DenseMatrix<T>>
where
    T: Element,
    S: RandomVectorSource + ?Sized,
{
    if extra == 0 {
        return Ok(x.clone());
    }
    Ok(augmented_orthonormal_cols(&x.transpose(), extra, rng)?.transpose())
}
