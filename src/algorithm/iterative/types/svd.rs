//! Types for the partial SVD (Gram-operator eigendecomposition)

use std::str::FromStr;

use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::matrix::DenseMatrix;

use super::super::random::DEFAULT_SEED;
use super::eigen::WhichEigenvalues;

/// Which singular values to compute
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WhichSingularValues {
    /// Largest singular values
    #[default]
    Largest,
    /// Smallest singular values
    Smallest,
}

impl WhichSingularValues {
    /// Eigenvalue selector on the Gram operator
    ///
    /// Gram eigenvalues are the squared singular values, so magnitude
    /// ordering carries over directly.
    pub fn to_eigen(self) -> WhichEigenvalues {
        match self {
            Self::Largest => WhichEigenvalues::LargestMagnitude,
            Self::Smallest => WhichEigenvalues::SmallestMagnitude,
        }
    }
}

impl FromStr for WhichSingularValues {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "LM" | "largest" => Ok(Self::Largest),
            "SM" | "smallest" => Ok(Self::Smallest),
            other => Err(Error::InvalidSelector(other.to_string())),
        }
    }
}

/// Eigensolver backend used on the Gram operator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SvdsSolver {
    /// Thick-restart Lanczos ("arpack")
    #[default]
    Lanczos,
    /// Block preconditioned eigensolver
    Lobpcg,
}

impl SvdsSolver {
    /// Backend name as accepted by the parser
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lanczos => "arpack",
            Self::Lobpcg => "lobpcg",
        }
    }
}

impl FromStr for SvdsSolver {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "arpack" | "lanczos" => Ok(Self::Lanczos),
            "lobpcg" => Ok(Self::Lobpcg),
            other => Err(Error::InvalidBackend(other.to_string())),
        }
    }
}

/// Which singular vectors to return
///
/// `U` and `Vh` only skip the side that needs an extra operator application.
/// The side read directly off the Gram eigenvectors is always returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReturnVectors {
    /// Both U and Vt
    #[default]
    Both,
    /// Skip computing Vt when it would cost an operator application
    U,
    /// Skip computing U when it would cost an operator application
    Vh,
    /// Singular values only
    None,
}

impl ReturnVectors {
    /// Returns true if any singular vectors are wanted
    pub fn wants_vectors(self) -> bool {
        self != Self::None
    }
}

impl FromStr for ReturnVectors {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "both" | "true" => Ok(Self::Both),
            "u" => Ok(Self::U),
            "vh" => Ok(Self::Vh),
            "none" | "false" => Ok(Self::None),
            other => Err(Error::invalid_argument(
                "return_vectors",
                format!("expected one of 'both', 'u', 'vh', 'none', got '{other}'"),
            )),
        }
    }
}

/// Configuration options for [`svds`](crate::algorithm::iterative::svds)
#[derive(Debug, Clone)]
pub struct SvdsOptions<T: Element> {
    /// Krylov subspace dimension for the Lanczos backend (default: min(n, max(2k + 1, 20)))
    pub ncv: Option<usize>,
    /// Relative accuracy for singular values (0 = machine precision)
    ///
    /// Squared before it reaches the eigensolver, since Gram eigenvalues are
    /// squared singular values.
    pub tol: f64,
    /// Which singular values to compute (default: Largest)
    pub which: WhichSingularValues,
    /// Starting vector of length min(rows, cols)
    pub v0: Option<Vec<T>>,
    /// Iteration bound passed to the eigensolver (None = backend default)
    pub max_iter: Option<usize>,
    /// Which singular vectors to return (default: Both)
    pub return_vectors: ReturnVectors,
    /// Eigensolver backend (default: Lanczos)
    pub solver: SvdsSolver,
    /// Seed for random starting data and basis augmentation (default: 52)
    pub seed: u64,
}

impl<T: Element> Default for SvdsOptions<T> {
    fn default() -> Self {
        Self {
            ncv: None,
            tol: 0.0,
            which: WhichSingularValues::default(),
            v0: None,
            max_iter: None,
            return_vectors: ReturnVectors::default(),
            solver: SvdsSolver::default(),
            seed: DEFAULT_SEED,
        }
    }
}

/// Result of a partial SVD
///
/// Triplets are ordered by ascending singular value. Entries beyond `rank`
/// in the unsorted solver order are padding: their singular values are
/// exactly zero and their vectors are arbitrary orthonormal complements.
#[derive(Debug, Clone)]
pub struct SvdsResult<T: Element> {
    /// Left singular vectors U [rows, k]
    pub u: Option<DenseMatrix<T>>,
    /// Singular values [k] (sorted ascending)
    pub singular_values: Vec<T::Real>,
    /// Right singular vectors Vt [k, cols]
    pub vt: Option<DenseMatrix<T>>,
    /// Number of singular values above the degeneracy cutoff
    pub rank: usize,
    /// Iterations reported by the eigensolver
    pub iterations: usize,
}
