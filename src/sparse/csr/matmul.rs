//! CSR matrix products: spmv, adjoint spmv, and the LinearOperator adapter

use super::CsrData;
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::matrix::DenseMatrix;
use crate::operator::LinearOperator;

impl<T: Element> CsrData<T> {
    /// Sparse matrix-vector multiplication: y = A * x
    ///
    /// # Algorithm
    ///
    /// For each row i:
    /// ```text
    /// y[i] = sum(values[j] * x[col_indices[j]]) for j in row_ptrs[i]..row_ptrs[i+1]
    /// ```
    pub fn spmv(&self, x: &[T]) -> Result<Vec<T>> {
        let [nrows, ncols] = self.shape;
        if x.len() != ncols {
            return Err(Error::shape_mismatch(&[ncols], &[x.len()]));
        }
        Ok((0..nrows)
            .map(|i| {
                self.row_entries(i)
                    .fold(T::zero(), |acc, (j, v)| acc + v * x[j])
            })
            .collect())
    }

    /// Adjoint sparse matrix-vector multiplication: y = A^H * x
    ///
    /// Scatters each row's contribution, so the conjugate transpose is
    /// never materialized.
    pub fn spmv_adjoint(&self, x: &[T]) -> Result<Vec<T>> {
        let [nrows, ncols] = self.shape;
        if x.len() != nrows {
            return Err(Error::shape_mismatch(&[nrows], &[x.len()]));
        }
        let mut y = vec![T::zero(); ncols];
        for (i, &xi) in x.iter().enumerate() {
            for (j, v) in self.row_entries(i) {
                y[j] += v.conj() * xi;
            }
        }
        Ok(y)
    }

    /// Sparse-dense matrix multiplication: Y = A * X
    pub fn spmm(&self, x: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        let [nrows, ncols] = self.shape;
        if x.nrows() != ncols {
            return Err(Error::shape_mismatch(&[ncols, x.ncols()], &x.shape()));
        }
        let p = x.ncols();
        let mut out = DenseMatrix::zeros(nrows, p);
        for i in 0..nrows {
            for (j, v) in self.row_entries(i) {
                let x_row = x.row(j);
                for c in 0..p {
                    out[(i, c)] += v * x_row[c];
                }
            }
        }
        Ok(out)
    }

    /// Adjoint sparse-dense matrix multiplication: Y = A^H * X
    pub fn spmm_adjoint(&self, x: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        let [nrows, ncols] = self.shape;
        if x.nrows() != nrows {
            return Err(Error::shape_mismatch(&[nrows, x.ncols()], &x.shape()));
        }
        let p = x.ncols();
        let mut out = DenseMatrix::zeros(ncols, p);
        for i in 0..nrows {
            let x_row = x.row(i);
            for (j, v) in self.row_entries(i) {
                let v = v.conj();
                for c in 0..p {
                    out[(j, c)] += v * x_row[c];
                }
            }
        }
        Ok(out)
    }
}

impl<T: Element> LinearOperator<T> for CsrData<T> {
    fn shape(&self) -> [usize; 2] {
        self.shape
    }

    fn matvec(&self, x: &[T]) -> Result<Vec<T>> {
        self.spmv(x)
    }

    fn rmatvec(&self, x: &[T]) -> Result<Vec<T>> {
        self.spmv_adjoint(x)
    }

    fn matmat(&self, x: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        self.spmm(x)
    }

    fn rmatmat(&self, x: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        self.spmm_adjoint(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::Complex128;

    fn example() -> CsrData<f64> {
        // [[1, 0, 0], [5, 0, 2], [0, -1, 0], [0, 0, 3]]
        CsrData::from_triplets(
            &[0, 1, 1, 2, 3],
            &[0, 0, 2, 1, 2],
            &[1.0, 5.0, 2.0, -1.0, 3.0],
            [4, 3],
        )
        .unwrap()
    }

    #[test]
    fn test_spmv_matches_dense() {
        let csr = example();
        let dense = csr.to_dense();
        let x = [0.5, -2.0, 3.0];
        assert_eq!(csr.spmv(&x).unwrap(), dense.matvec(&x).unwrap());
        let y = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(
            csr.spmv_adjoint(&y).unwrap(),
            dense.adjoint_matvec(&y).unwrap()
        );
        assert!(csr.spmv(&y).is_err());
    }

    #[test]
    fn test_spmm_matches_dense() {
        let csr = example();
        let dense = csr.to_dense();
        let x = DenseMatrix::from_fn(3, 2, |i, j| (i as f64) - (j as f64));
        assert_eq!(csr.spmm(&x).unwrap(), dense.matmul(&x).unwrap());
        let y = DenseMatrix::from_fn(4, 2, |i, j| (i * j) as f64 + 1.0);
        assert_eq!(
            csr.spmm_adjoint(&y).unwrap(),
            dense.adjoint_matmul(&y).unwrap()
        );
    }

    #[test]
    fn test_complex_adjoint_conjugates() {
        let csr = CsrData::from_triplets(&[0], &[1], &[Complex128::new(0.0, 1.0)], [1, 2]).unwrap();
        let y = csr.spmv_adjoint(&[Complex128::ONE]).unwrap();
        assert_eq!(y, vec![Complex128::ZERO, Complex128::new(0.0, -1.0)]);
    }
}
