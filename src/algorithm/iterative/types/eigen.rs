//! Types for the Hermitian eigensolvers (Lanczos and LOBPCG)

use std::str::FromStr;

use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::matrix::DenseMatrix;

use super::super::random::DEFAULT_SEED;

/// Which eigenvalues to compute
///
/// Hermitian operators have real spectra, so both magnitude and algebraic
/// orderings are meaningful. For positive semi-definite operators they agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WhichEigenvalues {
    /// Largest eigenvalues by magnitude ("LM")
    #[default]
    LargestMagnitude,
    /// Smallest eigenvalues by magnitude ("SM")
    SmallestMagnitude,
    /// Algebraically largest eigenvalues ("LA")
    LargestAlgebraic,
    /// Algebraically smallest eigenvalues ("SA")
    SmallestAlgebraic,
}

impl WhichEigenvalues {
    /// Returns true for the "largest" end of the spectrum
    pub fn is_largest(self) -> bool {
        matches!(self, Self::LargestMagnitude | Self::LargestAlgebraic)
    }
}

impl FromStr for WhichEigenvalues {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "LM" => Ok(Self::LargestMagnitude),
            "SM" => Ok(Self::SmallestMagnitude),
            "LA" => Ok(Self::LargestAlgebraic),
            "SA" => Ok(Self::SmallestAlgebraic),
            other => Err(Error::InvalidSelector(other.to_string())),
        }
    }
}

/// A request for `k` eigenpairs of a Hermitian operator
#[derive(Debug, Clone)]
pub struct EigenRequest<T: Element> {
    /// Number of eigenpairs
    pub k: usize,
    /// Convergence tolerance in the operator's own units (0 = solver default)
    pub tol: f64,
    /// Iteration bound (None = solver default)
    pub max_iter: Option<usize>,
    /// Krylov subspace dimension for Lanczos (None = min(n, max(2k + 1, 20)))
    pub ncv: Option<usize>,
    /// Which end of the spectrum to compute
    pub which: WhichEigenvalues,
    /// Starting vector (Lanczos) or single-column initial block (LOBPCG, k = 1)
    pub v0: Option<Vec<T>>,
    /// Seed for any random starting data
    pub seed: u64,
}

impl<T: Element> EigenRequest<T> {
    /// Request `k` eigenpairs with default settings
    pub fn new(k: usize) -> Self {
        Self {
            k,
            tol: 0.0,
            max_iter: None,
            ncv: None,
            which: WhichEigenvalues::default(),
            v0: None,
            seed: DEFAULT_SEED,
        }
    }
}

/// Eigenpairs returned by a Hermitian eigensolver
#[derive(Debug, Clone)]
pub struct EigenPairs<T: Element> {
    /// Real eigenvalues, ordered according to `which` (most wanted first)
    pub eigenvalues: Vec<T::Real>,
    /// Orthonormal eigenvectors as columns of an `[n, k]` matrix
    pub eigenvectors: DenseMatrix<T>,
    /// Number of iterations (restarts for Lanczos, block steps for LOBPCG)
    pub iterations: usize,
    /// Number of converged eigenpairs
    pub nconv: usize,
}
