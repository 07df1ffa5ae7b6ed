//! CSR construction from COO triplets and conversion to dense

use super::CsrData;
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::matrix::DenseMatrix;

impl<T: Element> CsrData<T> {
    /// Build a CSR matrix from COO triplets
    ///
    /// Entries are sorted by (row, col); duplicate coordinates are summed.
    pub fn from_triplets(
        rows: &[usize],
        cols: &[usize],
        values: &[T],
        shape: [usize; 2],
    ) -> Result<Self> {
        let [nrows, ncols] = shape;
        if rows.len() != values.len() || cols.len() != values.len() {
            return Err(Error::shape_mismatch(
                &[values.len(), values.len()],
                &[rows.len(), cols.len()],
            ));
        }
        if let Some(&r) = rows.iter().find(|&&r| r >= nrows) {
            return Err(Error::invalid_argument(
                "rows",
                format!("index {r} out of bounds for {nrows} rows"),
            ));
        }
        if let Some(&c) = cols.iter().find(|&&c| c >= ncols) {
            return Err(Error::invalid_argument(
                "cols",
                format!("index {c} out of bounds for {ncols} columns"),
            ));
        }

        let mut order: Vec<usize> = (0..values.len()).collect();
        order.sort_by_key(|&i| (rows[i], cols[i]));

        let mut row_ptrs = vec![0usize; nrows + 1];
        let mut col_indices: Vec<usize> = Vec::with_capacity(values.len());
        let mut data: Vec<T> = Vec::with_capacity(values.len());
        let mut last: Option<(usize, usize)> = None;

        for i in order {
            let key = (rows[i], cols[i]);
            if last == Some(key) {
                if let Some(v) = data.last_mut() {
                    *v += values[i];
                }
                continue;
            }
            row_ptrs[key.0 + 1] += 1;
            col_indices.push(key.1);
            data.push(values[i]);
            last = Some(key);
        }

        // Prefix sum of per-row counts
        for r in 0..nrows {
            row_ptrs[r + 1] += row_ptrs[r];
        }

        Self::new(row_ptrs, col_indices, data, shape)
    }

    /// Build a CSR matrix from a dense matrix, dropping exact zeros
    pub fn from_dense(dense: &DenseMatrix<T>) -> Self {
        let [nrows, ncols] = dense.shape();
        let mut row_ptrs = Vec::with_capacity(nrows + 1);
        let mut col_indices = Vec::new();
        let mut values = Vec::new();
        row_ptrs.push(0);
        for i in 0..nrows {
            for (j, &v) in dense.row(i).iter().enumerate() {
                if v != T::zero() {
                    col_indices.push(j);
                    values.push(v);
                }
            }
            row_ptrs.push(values.len());
        }
        Self {
            row_ptrs,
            col_indices,
            values,
            shape: [nrows, ncols],
        }
    }

    /// Expand to a dense matrix
    pub fn to_dense(&self) -> DenseMatrix<T> {
        let [nrows, ncols] = self.shape;
        let mut out = DenseMatrix::zeros(nrows, ncols);
        for i in 0..nrows {
            for (j, v) in self.row_entries(i) {
                out[(i, j)] += v;
            }
        }
        out
    }
}
