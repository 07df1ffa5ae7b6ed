//! LinearOperator adapters for concrete representations

use std::marker::PhantomData;

use super::traits::{LinearOperator, check_block_rows, check_vector_len};
use crate::dtype::Element;
use crate::error::Result;
use crate::matrix::DenseMatrix;

impl<T: Element> LinearOperator<T> for DenseMatrix<T> {
    fn shape(&self) -> [usize; 2] {
        DenseMatrix::shape(self)
    }

    fn matvec(&self, x: &[T]) -> Result<Vec<T>> {
        DenseMatrix::matvec(self, x)
    }

    fn rmatvec(&self, x: &[T]) -> Result<Vec<T>> {
        self.adjoint_matvec(x)
    }

    fn matmat(&self, x: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        check_block_rows(x, self.ncols())?;
        self.matmul(x)
    }

    fn rmatmat(&self, x: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        check_block_rows(x, self.nrows())?;
        self.adjoint_matmul(x)
    }
}

/// Operator defined by a pair of closures
///
/// `forward` computes `A @ x` and `adjoint` computes `A^H @ x`. Both receive
/// input vectors whose length has already been checked against `shape`.
///
/// # Example
///
/// ```
/// use gramsvd::operator::{FnOperator, LinearOperator};
///
/// // 3x2 operator: x -> [x0, x1, x0 + x1]
/// let op = FnOperator::new(
///     [3, 2],
///     |x: &[f64]| vec![x[0], x[1], x[0] + x[1]],
///     |y: &[f64]| vec![y[0] + y[2], y[1] + y[2]],
/// );
/// assert_eq!(op.matvec(&[1.0, 2.0]).unwrap(), vec![1.0, 2.0, 3.0]);
/// ```
pub struct FnOperator<T, F, G> {
    shape: [usize; 2],
    forward: F,
    adjoint: G,
    _marker: PhantomData<fn() -> T>,
}

impl<T, F, G> FnOperator<T, F, G>
where
    T: Element,
    F: Fn(&[T]) -> Vec<T>,
    G: Fn(&[T]) -> Vec<T>,
{
    /// Wrap forward and adjoint closures into an operator of the given shape
    pub fn new(shape: [usize; 2], forward: F, adjoint: G) -> Self {
        Self {
            shape,
            forward,
            adjoint,
            _marker: PhantomData,
        }
    }
}

impl<T, F, G> LinearOperator<T> for FnOperator<T, F, G>
where
    T: Element,
    F: Fn(&[T]) -> Vec<T>,
    G: Fn(&[T]) -> Vec<T>,
{
    fn shape(&self) -> [usize; 2] {
        self.shape
    }

    fn matvec(&self, x: &[T]) -> Result<Vec<T>> {
        let [rows, cols] = self.shape;
        check_vector_len(x.len(), cols)?;
        let y = (self.forward)(x);
        check_vector_len(y.len(), rows)?;
        Ok(y)
    }

    fn rmatvec(&self, x: &[T]) -> Result<Vec<T>> {
        let [rows, cols] = self.shape;
        check_vector_len(x.len(), rows)?;
        let y = (self.adjoint)(x);
        check_vector_len(y.len(), cols)?;
        Ok(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::{Complex128, DType};
    use crate::operator::resolve_dtype;

    #[test]
    fn test_dense_operator_block_products() {
        let a = DenseMatrix::from_slice(&[1.0f64, 0.0, 0.0, 5.0, 0.0, 2.0], [2, 3]);
        let x = DenseMatrix::from_fn(3, 2, |i, j| (i + j) as f64);
        let y = LinearOperator::matmat(&a, &x).unwrap();
        assert_eq!(y.shape(), [2, 2]);
        assert_eq!(y.column(0), a.matvec(&x.column(0)).unwrap());

        let z = LinearOperator::rmatmat(&a, &y).unwrap();
        assert_eq!(z.shape(), [3, 2]);
        assert!(LinearOperator::matmat(&a, &y).is_err());
    }

    #[test]
    fn test_fn_operator_matches_dense() {
        let dense = DenseMatrix::from_slice(
            &[
                Complex128::new(1.0, 1.0),
                Complex128::new(0.0, 2.0),
                Complex128::new(-1.0, 0.0),
                Complex128::new(3.0, -1.0),
            ],
            [2, 2],
        );
        let d = dense.clone();
        let dh = dense.clone();
        let op = FnOperator::new(
            [2, 2],
            move |x: &[Complex128]| d.matvec(x).unwrap(),
            move |y: &[Complex128]| dh.adjoint_matvec(y).unwrap(),
        );
        let x = DenseMatrix::from_fn(2, 3, |i, j| Complex128::new(i as f64, j as f64));
        let via_fn = op.rmatmat(&x).unwrap();
        let via_dense = LinearOperator::rmatmat(&dense, &x).unwrap();
        assert_eq!(via_fn, via_dense);
        assert_eq!(resolve_dtype::<Complex128, _>(&op), DType::Complex128);
    }

    #[test]
    fn test_fn_operator_checks_lengths() {
        let op = FnOperator::new([3, 2], |x: &[f64]| x.to_vec(), |y: &[f64]| y.to_vec());
        assert!(op.matvec(&[1.0, 2.0, 3.0]).is_err());
        // forward closure returns the wrong length
        assert!(op.matvec(&[1.0, 2.0]).is_err());
    }
}
