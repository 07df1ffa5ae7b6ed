//! Core CSR implementation: struct, creation, getters

use crate::dtype::Element;
use crate::error::{Error, Result};

/// CSR (Compressed Sparse Row) sparse matrix data
#[derive(Debug, Clone, PartialEq)]
pub struct CsrData<T: Element> {
    pub(crate) row_ptrs: Vec<usize>,
    pub(crate) col_indices: Vec<usize>,
    pub(crate) values: Vec<T>,
    pub(crate) shape: [usize; 2],
}

impl<T: Element> CsrData<T> {
    /// Create a new CSR matrix from components
    ///
    /// # Arguments
    ///
    /// * `row_ptrs` - Row pointers (length: nrows + 1)
    /// * `col_indices` - Column indices for each non-zero
    /// * `values` - Values at each position
    /// * `shape` - Matrix shape [nrows, ncols]
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - row_ptrs length != nrows + 1
    /// - col_indices and values have different lengths
    /// - row_ptrs is not non-decreasing or does not end at nnz
    /// - a column index is out of bounds
    pub fn new(
        row_ptrs: Vec<usize>,
        col_indices: Vec<usize>,
        values: Vec<T>,
        shape: [usize; 2],
    ) -> Result<Self> {
        let [nrows, ncols] = shape;
        let nnz = values.len();

        if row_ptrs.len() != nrows + 1 {
            return Err(Error::shape_mismatch(&[nrows + 1], &[row_ptrs.len()]));
        }

        if col_indices.len() != nnz {
            return Err(Error::shape_mismatch(&[nnz], &[col_indices.len()]));
        }

        if row_ptrs[0] != 0 || row_ptrs[nrows] != nnz {
            return Err(Error::invalid_argument(
                "row_ptrs",
                format!(
                    "must start at 0 and end at nnz={nnz}, got [{}, .., {}]",
                    row_ptrs[0], row_ptrs[nrows]
                ),
            ));
        }

        if row_ptrs.windows(2).any(|w| w[0] > w[1]) {
            return Err(Error::invalid_argument(
                "row_ptrs",
                "must be non-decreasing",
            ));
        }

        if let Some(&bad) = col_indices.iter().find(|&&c| c >= ncols) {
            return Err(Error::invalid_argument(
                "col_indices",
                format!("index {bad} out of bounds for {ncols} columns"),
            ));
        }

        Ok(Self {
            row_ptrs,
            col_indices,
            values,
            shape,
        })
    }

    /// Shape as `[nrows, ncols]`
    #[inline]
    pub fn shape(&self) -> [usize; 2] {
        self.shape
    }

    /// Number of stored entries
    #[inline]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Row pointers (length nrows + 1)
    #[inline]
    pub fn row_ptrs(&self) -> &[usize] {
        &self.row_ptrs
    }

    /// Column index of each stored entry
    #[inline]
    pub fn col_indices(&self) -> &[usize] {
        &self.col_indices
    }

    /// Stored values
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Iterate `(col, value)` over the stored entries of row `i`
    pub(crate) fn row_entries(&self, i: usize) -> impl Iterator<Item = (usize, T)> + '_ {
        let range = self.row_ptrs[i]..self.row_ptrs[i + 1];
        self.col_indices[range.clone()]
            .iter()
            .copied()
            .zip(self.values[range].iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_structure() {
        assert!(CsrData::new(vec![0, 1, 2], vec![0, 1], vec![1.0f64, 2.0], [2, 2]).is_ok());
        // wrong row_ptrs length
        assert!(CsrData::new(vec![0, 2], vec![0, 1], vec![1.0f64, 2.0], [2, 2]).is_err());
        // values/col_indices mismatch
        assert!(CsrData::new(vec![0, 1, 2], vec![0], vec![1.0f64, 2.0], [2, 2]).is_err());
        // decreasing row_ptrs
        assert!(CsrData::new(vec![0, 2, 1, 2], vec![0, 1], vec![1.0f64, 2.0], [3, 2]).is_err());
        // column out of bounds
        assert!(CsrData::new(vec![0, 1, 2], vec![0, 2], vec![1.0f64, 2.0], [2, 2]).is_err());
    }

    #[test]
    fn test_row_entries() {
        let csr = CsrData::new(vec![0, 2, 2, 3], vec![0, 2, 1], vec![1.0f64, 2.0, 3.0], [3, 3])
            .unwrap();
        assert_eq!(csr.row_entries(0).collect::<Vec<_>>(), vec![(0, 1.0), (2, 2.0)]);
        assert_eq!(csr.row_entries(1).count(), 0);
        assert_eq!(csr.row_entries(2).collect::<Vec<_>>(), vec![(1, 3.0)]);
    }
}
