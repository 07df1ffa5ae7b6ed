//! Operator selection and the implicit Gram operator

use std::marker::PhantomData;

use crate::dtype::{DType, Element};
use crate::error::Result;
use crate::matrix::DenseMatrix;
use crate::operator::LinearOperator;

/// Which Gram product is eigendecomposed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GramSide {
    /// `A^H A` (more rows than columns); eigenvectors are right singular vectors
    Normal,
    /// `A A^H` (rows <= columns); eigenvectors are left singular vectors
    Adjoint,
}

/// An operator with its primitives assigned so that `XH(X(v))` acts on the
/// smaller of its two dimensions
///
/// With `rows > cols`, `X = A` and `XH = A^H`. Otherwise the roles swap.
pub struct SelectedOperator<'a, T: Element, O: LinearOperator<T> + ?Sized> {
    op: &'a O,
    side: GramSide,
    _marker: PhantomData<T>,
}

impl<'a, T: Element, O: LinearOperator<T> + ?Sized> SelectedOperator<'a, T, O> {
    /// Assign the primitives by shape
    pub fn select(op: &'a O) -> Self {
        let [rows, cols] = op.shape();
        let side = if rows > cols {
            GramSide::Normal
        } else {
            GramSide::Adjoint
        };
        Self {
            op,
            side,
            _marker: PhantomData,
        }
    }

    /// Selected Gram side
    pub fn side(&self) -> GramSide {
        self.side
    }

    /// Dimension of the Gram operator, `min(rows, cols)`
    pub fn gram_dim(&self) -> usize {
        let [rows, cols] = self.op.shape();
        rows.min(cols)
    }

    /// Element type of the underlying operator
    pub fn dtype(&self) -> DType {
        self.op.dtype()
    }

    /// `X @ v`
    pub fn x_dot(&self, v: &[T]) -> Result<Vec<T>> {
        match self.side {
            GramSide::Normal => self.op.matvec(v),
            GramSide::Adjoint => self.op.rmatvec(v),
        }
    }

    /// `X @ B`
    pub fn x_matmat(&self, b: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        match self.side {
            GramSide::Normal => self.op.matmat(b),
            GramSide::Adjoint => self.op.rmatmat(b),
        }
    }

    /// `X^H @ v`
    pub fn xh_dot(&self, v: &[T]) -> Result<Vec<T>> {
        match self.side {
            GramSide::Normal => self.op.rmatvec(v),
            GramSide::Adjoint => self.op.matvec(v),
        }
    }

    /// `X^H @ B`
    pub fn xh_matmat(&self, b: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        match self.side {
            GramSide::Normal => self.op.rmatmat(b),
            GramSide::Adjoint => self.op.matmat(b),
        }
    }
}

/// The Hermitian positive semi-definite operator `X^H X` of dimension
/// `min(rows, cols)`, applied without ever being formed
pub struct GramOperator<'a, T: Element, O: LinearOperator<T> + ?Sized> {
    selected: SelectedOperator<'a, T, O>,
}

impl<'a, T: Element, O: LinearOperator<T> + ?Sized> GramOperator<'a, T, O> {
    /// Wrap a selected operator
    pub fn new(selected: SelectedOperator<'a, T, O>) -> Self {
        Self { selected }
    }

    /// The underlying primitive assignment
    pub fn selected(&self) -> &SelectedOperator<'a, T, O> {
        &self.selected
    }
}

impl<T: Element, O: LinearOperator<T> + ?Sized> LinearOperator<T> for GramOperator<'_, T, O> {
    fn shape(&self) -> [usize; 2] {
        let d = self.selected.gram_dim();
        [d, d]
    }

    fn dtype(&self) -> DType {
        self.selected.dtype()
    }

    fn matvec(&self, x: &[T]) -> Result<Vec<T>> {
        self.selected.xh_dot(&self.selected.x_dot(x)?)
    }

    fn rmatvec(&self, x: &[T]) -> Result<Vec<T>> {
        self.matvec(x)
    }

    fn matmat(&self, x: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        self.selected.xh_matmat(&self.selected.x_matmat(x)?)
    }

    fn rmatmat(&self, x: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        self.matmat(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> DenseMatrix<f64> {
        DenseMatrix::from_slice(
            &[1.0, 0.0, 0.0, 5.0, 0.0, 2.0, 0.0, -1.0, 0.0, 0.0, 0.0, 3.0],
            [4, 3],
        )
    }

    #[test]
    fn test_tall_operator_uses_normal_side() {
        let a = example();
        let gram = GramOperator::new(SelectedOperator::select(&a));
        assert_eq!(gram.selected().side(), GramSide::Normal);
        assert_eq!(gram.shape(), [3, 3]);

        // A^T A e_0 = [26, 0, 10]
        assert_eq!(gram.matvec(&[1.0, 0.0, 0.0]).unwrap(), vec![26.0, 0.0, 10.0]);
    }

    #[test]
    fn test_wide_operator_uses_adjoint_side() {
        let a = example().transpose();
        let gram = GramOperator::new(SelectedOperator::select(&a));
        assert_eq!(gram.selected().side(), GramSide::Adjoint);
        assert_eq!(gram.shape(), [3, 3]);
        assert_eq!(gram.matvec(&[1.0, 0.0, 0.0]).unwrap(), vec![26.0, 0.0, 10.0]);

        let block = DenseMatrix::identity(3);
        let g = gram.matmat(&block).unwrap();
        assert_eq!(g.column(0), vec![26.0, 0.0, 10.0]);
        assert_eq!(g.column(2), vec![10.0, 0.0, 13.0]);
    }

    #[test]
    fn test_square_operator_uses_adjoint_side() {
        let a = DenseMatrix::<f64>::identity(2);
        let selected = SelectedOperator::select(&a);
        assert_eq!(selected.side(), GramSide::Adjoint);
        assert_eq!(selected.gram_dim(), 2);
        assert_eq!(selected.dtype(), DType::F64);
    }
}
