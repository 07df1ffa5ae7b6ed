//! CSR (Compressed Sparse Row) format

mod conversion;
mod core;
mod matmul;

pub use core::CsrData;
