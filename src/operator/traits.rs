//! Linear operator trait

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::matrix::DenseMatrix;

/// An abstract linear map `A: T^cols -> T^rows`
///
/// Implementors provide the single-vector primitives; the block primitives
/// default to applying those column by column and may be overridden when a
/// representation has a faster batched product.
///
/// # Contract
///
/// - `matvec` takes a vector of length `cols` and returns one of length `rows`
/// - `rmatvec` applies the adjoint `A^H`: length `rows` in, length `cols` out
/// - `matmat` maps a `[cols, p]` block to a `[rows, p]` block
/// - `rmatmat` maps a `[rows, p]` block to a `[cols, p]` block
pub trait LinearOperator<T: Element> {
    /// Shape as `[rows, cols]`
    fn shape(&self) -> [usize; 2];

    /// Element type the operator computes in
    ///
    /// Defaults to `T::DTYPE`. An operator that stores or evaluates in a
    /// coarser precision than `T` reports that type, so rank detection uses
    /// its precision.
    fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Forward product `A @ x`
    fn matvec(&self, x: &[T]) -> Result<Vec<T>>;

    /// Adjoint product `A^H @ x`
    fn rmatvec(&self, x: &[T]) -> Result<Vec<T>>;

    /// Forward block product `A @ X`
    fn matmat(&self, x: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        let [rows, cols] = self.shape();
        check_block_rows(x, cols)?;
        let columns = x
            .columns()
            .iter()
            .map(|c| self.matvec(c))
            .collect::<Result<Vec<_>>>()?;
        DenseMatrix::from_columns(&columns, rows)
    }

    /// Adjoint block product `A^H @ X`
    fn rmatmat(&self, x: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        let [rows, cols] = self.shape();
        check_block_rows(x, rows)?;
        let columns = x
            .columns()
            .iter()
            .map(|c| self.rmatvec(c))
            .collect::<Result<Vec<_>>>()?;
        DenseMatrix::from_columns(&columns, cols)
    }
}

/// Resolve the working element type of an operator
///
/// The scalar type is a type parameter, so no probe application is needed;
/// the operator's own report takes precedence over `T::DTYPE`.
pub fn resolve_dtype<T: Element, O: LinearOperator<T> + ?Sized>(op: &O) -> DType {
    op.dtype()
}

pub(crate) fn check_block_rows<T: Element>(x: &DenseMatrix<T>, expected: usize) -> Result<()> {
    if x.nrows() != expected {
        return Err(Error::shape_mismatch(&[expected, x.ncols()], &x.shape()));
    }
    Ok(())
}

pub(crate) fn check_vector_len(x_len: usize, expected: usize) -> Result<()> {
    if x_len != expected {
        return Err(Error::shape_mismatch(&[expected], &[x_len]));
    }
    Ok(())
}

impl<T: Element, O: LinearOperator<T> + ?Sized> LinearOperator<T> for &O {
    fn shape(&self) -> [usize; 2] {
        (**self).shape()
    }

    fn dtype(&self) -> DType {
        (**self).dtype()
    }

    fn matvec(&self, x: &[T]) -> Result<Vec<T>> {
        (**self).matvec(x)
    }

    fn rmatvec(&self, x: &[T]) -> Result<Vec<T>> {
        (**self).rmatvec(x)
    }

    fn matmat(&self, x: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        (**self).matmat(x)
    }

    fn rmatmat(&self, x: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        (**self).rmatmat(x)
    }
}

impl<T: Element, O: LinearOperator<T> + ?Sized> LinearOperator<T> for Box<O> {
    fn shape(&self) -> [usize; 2] {
        (**self).shape()
    }

    fn dtype(&self) -> DType {
        (**self).dtype()
    }

    fn matvec(&self, x: &[T]) -> Result<Vec<T>> {
        (**self).matvec(x)
    }

    fn rmatvec(&self, x: &[T]) -> Result<Vec<T>> {
        (**self).rmatvec(x)
    }

    fn matmat(&self, x: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        (**self).matmat(x)
    }

    fn rmatmat(&self, x: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        (**self).rmatmat(x)
    }
}
