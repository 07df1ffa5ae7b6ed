//! Sparse matrix support for gramsvd
//!
//! Provides a compressed sparse row (CSR) matrix that plugs into the SVD
//! reduction as a [`LinearOperator`](crate::operator::LinearOperator).
//!
//! # Usage
//!
//! ```
//! use gramsvd::sparse::CsrData;
//!
//! // 4x3 matrix from COO triplets
//! let rows = [0, 1, 1, 2, 3];
//! let cols = [0, 0, 2, 1, 2];
//! let values = [1.0f64, 5.0, 2.0, -1.0, 3.0];
//! let csr = CsrData::from_triplets(&rows, &cols, &values, [4, 3]).unwrap();
//!
//! assert_eq!(csr.nnz(), 5);
//! assert_eq!(csr.spmv(&[1.0, 1.0, 1.0]).unwrap(), vec![1.0, 7.0, -1.0, 3.0]);
//! ```

mod csr;

pub use csr::CsrData;
