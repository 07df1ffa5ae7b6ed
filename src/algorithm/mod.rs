//! Algorithms built on the operator abstraction
//!
//! # Available Algorithms
//!
//! - [`iterative`] - Hermitian eigensolvers (Lanczos, LOBPCG) and the
//!   Gram-operator partial SVD

pub mod iterative;

pub use iterative::{
    EigenSource, ReturnVectors, SvdsOptions, SvdsResult, SvdsSolver, WhichSingularValues, svds,
    svds_with,
};
