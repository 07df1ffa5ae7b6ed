//! Core DenseMatrix type

use crate::dtype::Element;
use crate::error::{Error, Result};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Dense matrix stored contiguously in row-major order
///
/// Element `(i, j)` lives at `data[i * ncols + j]`.
#[derive(Clone, PartialEq)]
pub struct DenseMatrix<T: Element> {
    data: Vec<T>,
    shape: [usize; 2],
}

impl<T: Element> DenseMatrix<T> {
    /// Create a matrix from a row-major slice
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` does not equal `rows * cols`.
    /// For a fallible alternative, use [`Self::try_from_slice`].
    pub fn from_slice(data: &[T], shape: [usize; 2]) -> Self {
        Self::try_from_slice(data, shape).expect("DenseMatrix::from_slice failed")
    }

    /// Create a matrix from a row-major slice (fallible version)
    pub fn try_from_slice(data: &[T], shape: [usize; 2]) -> Result<Self> {
        Self::from_vec(data.to_vec(), shape)
    }

    /// Create a matrix taking ownership of row-major data
    pub fn from_vec(data: Vec<T>, shape: [usize; 2]) -> Result<Self> {
        let expected_len = shape[0] * shape[1];
        if data.len() != expected_len {
            return Err(Error::ShapeMismatch {
                expected: shape.to_vec(),
                got: vec![data.len()],
            });
        }
        Ok(Self { data, shape })
    }

    /// Create a matrix from nested rows
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            if row.len() != ncols {
                return Err(Error::shape_mismatch(&[ncols], &[row.len()]));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            shape: [nrows, ncols],
        })
    }

    /// Create a matrix whose columns are the given vectors, each of length `nrows`
    pub fn from_columns(columns: &[Vec<T>], nrows: usize) -> Result<Self> {
        let ncols = columns.len();
        let mut out = Self::zeros(nrows, ncols);
        for (j, col) in columns.iter().enumerate() {
            out.set_column(j, col)?;
        }
        Ok(out)
    }

    /// Create a matrix by evaluating `f(i, j)` at every position
    pub fn from_fn(nrows: usize, ncols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self {
            data,
            shape: [nrows, ncols],
        }
    }

    /// Create a matrix filled with zeros
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            data: vec![T::zero(); nrows * ncols],
            shape: [nrows, ncols],
        }
    }

    /// Create an `n x n` identity matrix
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Shape as `[rows, cols]`
    #[inline]
    pub fn shape(&self) -> [usize; 2] {
        self.shape
    }

    /// Number of rows
    #[inline]
    pub fn nrows(&self) -> usize {
        self.shape[0]
    }

    /// Number of columns
    #[inline]
    pub fn ncols(&self) -> usize {
        self.shape[1]
    }

    /// Row-major element storage
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable row-major element storage
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the matrix, returning its row-major storage
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Row `i` as a slice
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        let n = self.shape[1];
        &self.data[i * n..(i + 1) * n]
    }

    /// Copy of column `j`
    pub fn column(&self, j: usize) -> Vec<T> {
        (0..self.shape[0]).map(|i| self[(i, j)]).collect()
    }

    /// All columns as owned vectors
    pub fn columns(&self) -> Vec<Vec<T>> {
        (0..self.shape[1]).map(|j| self.column(j)).collect()
    }

    /// Overwrite column `j`
    pub fn set_column(&mut self, j: usize, values: &[T]) -> Result<()> {
        if values.len() != self.shape[0] {
            return Err(Error::shape_mismatch(&[self.shape[0]], &[values.len()]));
        }
        if j >= self.shape[1] {
            return Err(Error::invalid_argument(
                "column",
                format!("index {j} out of bounds for {} columns", self.shape[1]),
            ));
        }
        for (i, &v) in values.iter().enumerate() {
            self[(i, j)] = v;
        }
        Ok(())
    }

    /// New matrix made of the given columns, in the given order
    pub fn select_columns(&self, indices: &[usize]) -> Self {
        Self::from_fn(self.shape[0], indices.len(), |i, j| self[(i, indices[j])])
    }

    /// New matrix made of the given rows, in the given order
    pub fn select_rows(&self, indices: &[usize]) -> Self {
        Self::from_fn(indices.len(), self.shape[1], |i, j| self[(indices[i], j)])
    }

    /// Transpose (no conjugation)
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.shape[1], self.shape[0], |i, j| self[(j, i)])
    }

    /// Conjugate transpose `A^H`
    pub fn conj_transpose(&self) -> Self {
        Self::from_fn(self.shape[1], self.shape[0], |i, j| self[(j, i)].conj())
    }
}

impl<T: Element> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[i * self.shape[1] + j]
    }
}

impl<T: Element> IndexMut<(usize, usize)> for DenseMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.data[i * self.shape[1] + j]
    }
}

impl<T: Element> fmt::Debug for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DenseMatrix")
            .field("shape", &self.shape)
            .field("dtype", &T::DTYPE)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::Complex128;

    #[test]
    fn test_from_slice_shape_check() {
        assert!(DenseMatrix::<f64>::try_from_slice(&[1.0, 2.0, 3.0], [2, 2]).is_err());
        let a = DenseMatrix::from_slice(&[1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0], [2, 3]);
        assert_eq!(a.shape(), [2, 3]);
        assert_eq!(a[(1, 0)], 4.0);
        assert_eq!(a.row(0), &[1.0, 2.0, 3.0]);
        assert_eq!(a.column(2), vec![3.0, 6.0]);
    }

    #[test]
    fn test_column_and_row_selection() {
        let a = DenseMatrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
        let cols = a.select_columns(&[2, 0]);
        assert_eq!(cols.as_slice(), &[2.0, 0.0, 5.0, 3.0, 8.0, 6.0]);
        let rows = a.select_rows(&[1]);
        assert_eq!(rows.as_slice(), &[3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_from_columns_roundtrip() {
        let cols = vec![vec![1.0f64, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]];
        let a = DenseMatrix::from_columns(&cols, 2).unwrap();
        assert_eq!(a.shape(), [2, 3]);
        assert_eq!(a.columns(), cols);
        assert!(DenseMatrix::from_columns(&[vec![1.0f64]], 2).is_err());
    }

    #[test]
    fn test_conj_transpose() {
        let a = DenseMatrix::from_slice(
            &[Complex128::new(1.0, 2.0), Complex128::new(3.0, -1.0)],
            [1, 2],
        );
        let ah = a.conj_transpose();
        assert_eq!(ah.shape(), [2, 1]);
        assert_eq!(ah[(0, 0)], Complex128::new(1.0, -2.0));
        assert_eq!(ah[(1, 0)], Complex128::new(3.0, 1.0));
        assert_eq!(a.transpose()[(1, 0)], Complex128::new(3.0, -1.0));
    }
}
