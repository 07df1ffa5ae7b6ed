//! Types for the eigensolvers and the partial SVD

mod eigen;
mod svd;

pub use eigen::{EigenPairs, EigenRequest, WhichEigenvalues};
pub use svd::{ReturnVectors, SvdsOptions, SvdsResult, SvdsSolver, WhichSingularValues};
