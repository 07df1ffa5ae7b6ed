//! Generic implementations of the eigensolvers and the partial SVD
//!
//! Everything here is written against [`LinearOperator`](crate::operator::LinearOperator)
//! and [`Element`](crate::dtype::Element), so the same code serves real and
//! complex, single and double precision operators of any representation.

mod dense_eig;
mod lanczos_eig;
mod lobpcg;
pub mod svds;

pub use dense_eig::{hermitian_eig, select_eigenvalues};
pub use lanczos_eig::lanczos_eig_impl;
pub use lobpcg::lobpcg_impl;
pub use svds::svds_impl;
