//! Dense row-major matrices
//!
//! `DenseMatrix` is the container used for eigenvector blocks, singular
//! vector outputs and the dense operator adapter. It is deliberately small:
//! shape, element access, column/row selection and the handful of products
//! the SVD reduction needs.

mod core;
mod ops;

pub use core::DenseMatrix;
