//! Linear operator abstraction
//!
//! The SVD reduction never looks inside the operator it decomposes. It only
//! needs a shape, an element type, and four apply primitives: forward and
//! adjoint, each for a single vector and for a block of columns. Dense
//! matrices, CSR matrices and user closures all expose the same interface
//! through [`LinearOperator`].

mod adapters;
mod traits;

pub use adapters::FnOperator;
pub use traits::{LinearOperator, resolve_dtype};
