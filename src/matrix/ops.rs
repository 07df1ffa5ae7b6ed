//! Dense products used by the operator adapter and result assembly

use super::DenseMatrix;
use crate::dtype::{Element, RealElement};
use crate::error::{Error, Result};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Below this many output elements the products stay single-threaded
#[cfg(feature = "rayon")]
const PARALLEL_THRESHOLD: usize = 4096;

impl<T: Element> DenseMatrix<T> {
    /// Matrix-vector product `A @ x`
    pub fn matvec(&self, x: &[T]) -> Result<Vec<T>> {
        let [m, n] = self.shape();
        if x.len() != n {
            return Err(Error::shape_mismatch(&[n], &[x.len()]));
        }
        Ok((0..m)
            .map(|i| {
                self.row(i)
                    .iter()
                    .zip(x)
                    .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
            })
            .collect())
    }

    /// Adjoint matrix-vector product `A^H @ x`, without forming `A^H`
    pub fn adjoint_matvec(&self, x: &[T]) -> Result<Vec<T>> {
        let [m, n] = self.shape();
        if x.len() != m {
            return Err(Error::shape_mismatch(&[m], &[x.len()]));
        }
        let mut out = vec![T::zero(); n];
        for (i, &xi) in x.iter().enumerate() {
            for (o, &a) in out.iter_mut().zip(self.row(i)) {
                *o += a.conj() * xi;
            }
        }
        Ok(out)
    }

    /// Matrix product `A @ B`
    pub fn matmul(&self, other: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        let [m, k] = self.shape();
        let [k2, n] = other.shape();
        if k != k2 {
            return Err(Error::shape_mismatch(&[k, n], &[k2, n]));
        }
        let mut out = DenseMatrix::zeros(m, n);
        if n == 0 {
            return Ok(out);
        }

        let row_kernel = |(i, out_row): (usize, &mut [T])| {
            for (p, &a) in self.row(i).iter().enumerate() {
                for (o, &b) in out_row.iter_mut().zip(other.row(p)) {
                    *o += a * b;
                }
            }
        };

        #[cfg(feature = "rayon")]
        {
            if m * n >= PARALLEL_THRESHOLD {
                out.as_mut_slice()
                    .par_chunks_mut(n)
                    .enumerate()
                    .for_each(&row_kernel);
                return Ok(out);
            }
        }

        out.as_mut_slice()
            .chunks_mut(n)
            .enumerate()
            .for_each(&row_kernel);
        Ok(out)
    }

    /// Adjoint product `A^H @ B`, without forming `A^H`
    pub fn adjoint_matmul(&self, other: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        let [m, k] = self.shape();
        let [m2, n] = other.shape();
        if m != m2 {
            return Err(Error::shape_mismatch(&[m, n], &[m2, n]));
        }
        let mut out = DenseMatrix::zeros(k, n);
        for i in 0..m {
            let b_row = other.row(i);
            for (p, &a) in self.row(i).iter().enumerate() {
                let a = a.conj();
                for j in 0..n {
                    out[(p, j)] += a * b_row[j];
                }
            }
        }
        Ok(out)
    }

    /// Divide column `j` by `divisors[j]`
    pub fn div_columns(&mut self, divisors: &[T::Real]) -> Result<()> {
        let n = self.ncols();
        if divisors.len() != n {
            return Err(Error::shape_mismatch(&[n], &[divisors.len()]));
        }
        if n == 0 {
            return Ok(());
        }
        let one = T::Real::one();
        let inv: Vec<T::Real> = divisors.iter().map(|&d| one / d).collect();
        for row in self.as_mut_slice().chunks_mut(n) {
            for (v, &s) in row.iter_mut().zip(&inv) {
                *v = v.scale(s);
            }
        }
        Ok(())
    }

    /// Frobenius norm
    pub fn frobenius_norm(&self) -> T::Real {
        self.as_slice()
            .iter()
            .fold(T::Real::zero(), |acc, v| acc + v.abs_sq())
            .sqrt()
    }
}
