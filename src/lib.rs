//! # gramsvd
//!
//! **Partial singular value decomposition of large linear operators.**
//!
//! gramsvd computes `k` singular triplets of a dense matrix, a sparse matrix
//! or any implicit operator by eigendecomposing the Gram operator `A^H A` or
//! `A A^H` (whichever is smaller) without ever forming it.
//!
//! ## Features
//!
//! - **Operators**: dense row-major matrices, CSR matrices, user closures
//! - **Element types**: f32, f64, Complex64, Complex128
//! - **Eigensolvers**: thick-restart Lanczos and LOBPCG, or any [`EigenSource`](algorithm::EigenSource)
//! - **Rank deficiency**: eigenvalues at the noise floor become exact zero
//!   singular values with random orthonormal completion vectors
//! - **Reproducible**: all randomness comes from a seeded ChaCha8 generator
//!
//! ## Quick Start
//!
//! ```
//! use gramsvd::prelude::*;
//!
//! let a = DenseMatrix::from_rows(&[
//!     vec![1.0, 0.0, 0.0],
//!     vec![5.0, 0.0, 2.0],
//!     vec![0.0, -1.0, 0.0],
//!     vec![0.0, 0.0, 3.0],
//! ])?;
//!
//! let result = svds(&a, 2, &SvdsOptions::default())?;
//! let u = result.u.unwrap();
//! let vt = result.vt.unwrap();
//! assert_eq!(u.shape(), [4, 2]);
//! assert_eq!(vt.shape(), [2, 3]);
//! # Ok::<(), gramsvd::Error>(())
//! ```
//!
//! ## Numerical Stability
//!
//! Squaring the operator squares its condition number. Singular values below
//! roughly `sqrt(factor * eps) * s_max` (factor 1e6 in double precision, 1e3
//! in single precision) cannot be resolved and are reported as zero. Use a
//! direct SVD when small singular values of an ill-conditioned operator
//! matter.
//!
//! ## Feature Flags
//!
//! - `rayon` (default): Multi-threaded dense products
//! - `sparse` (default): CSR operator adapter

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod dtype;
pub mod error;
pub mod matrix;
pub mod operator;
#[cfg(feature = "sparse")]
pub mod sparse;

pub use algorithm::iterative::{svds, svds_with};
pub use error::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::iterative::{
        EigenSource, Lanczos, Lobpcg, RandomVectorSource, ReturnVectors, SvdsOptions, SvdsResult,
        SvdsSolver, WhichSingularValues, seeded_rng, svds, svds_with,
    };
    pub use crate::dtype::{Complex64, Complex128, DType, Element, RealElement};
    pub use crate::error::{Error, Result};
    pub use crate::matrix::DenseMatrix;
    pub use crate::operator::{FnOperator, LinearOperator};

    #[cfg(feature = "sparse")]
    pub use crate::sparse::CsrData;
}
