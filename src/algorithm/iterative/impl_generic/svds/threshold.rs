//! Degeneracy classification of Gram eigenvalues
//!
//! Mirrors pseudo-inverse rank detection: eigenvalues within a fixed multiple
//! of machine epsilon of the largest one are treated as noise and are never
//! turned into singular vectors directly.

use crate::dtype::{DType, RealElement};

/// Cutoff scale for single precision element types
const SINGLE_PRECISION_FACTOR: f64 = 1e3;

/// Cutoff scale for double precision element types
const DOUBLE_PRECISION_FACTOR: f64 = 1e6;

/// Eigenvalues split into reliable and degenerate parts
#[derive(Debug, Clone)]
pub struct Partition<R> {
    /// Length-k singular values: sqrt of the reliable eigenvalues first (in
    /// solver order), then exact zeros
    pub singular_values: Vec<R>,
    /// Indices of the reliable eigenpairs, in solver order
    pub reliable: Vec<usize>,
    /// Eigenvalue cutoff that was applied
    pub cutoff: R,
}

impl<R> Partition<R> {
    /// Number of reliable eigenpairs
    pub fn rank(&self) -> usize {
        self.reliable.len()
    }

    /// Number of padding entries
    pub fn degenerate(&self) -> usize {
        self.singular_values.len() - self.reliable.len()
    }
}

/// Cutoff multiplier for an element type
pub fn precision_factor(dtype: DType) -> f64 {
    match dtype.precision_char() {
        'f' => SINGLE_PRECISION_FACTOR,
        _ => DOUBLE_PRECISION_FACTOR,
    }
}

/// Clamp negative round-off to zero
///
/// The Gram operator is positive semi-definite, so any negative eigenvalue
/// is an artifact.
pub fn clamp_eigenvalues<R: RealElement>(eigenvalues: &[R]) -> Vec<R> {
    eigenvalues.iter().map(|&v| v.max_value(R::zero())).collect()
}

/// Clamp, compute `cutoff = factor * eps * max(eigenvalues)` and partition
///
/// `factor` and `eps` follow the operator's reported element type, which may
/// be coarser than the scalar type it is applied in.
pub fn partition_eigenvalues<R: RealElement>(eigenvalues: &[R], dtype: DType) -> Partition<R> {
    let clamped = clamp_eigenvalues(eigenvalues);
    let largest = clamped.iter().fold(R::zero(), |acc, &v| acc.max_value(v));
    let cutoff = R::from_f64(precision_factor(dtype) * dtype.machine_epsilon()) * largest;

    let reliable: Vec<usize> = (0..clamped.len()).filter(|&i| clamped[i] > cutoff).collect();
    let mut singular_values = vec![R::zero(); clamped.len()];
    for (slot, &i) in singular_values.iter_mut().zip(&reliable) {
        *slot = clamped[i].sqrt();
    }

    Partition {
        singular_values,
        reliable,
        cutoff,
    }
}
