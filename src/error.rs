//! Error types for gramsvd

use crate::dtype::DType;
use thiserror::Error;

/// Result type alias using gramsvd's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while computing a partial SVD
#[derive(Error, Debug)]
pub enum Error {
    /// Shape mismatch between an operator and its operand
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Extremal selector is not one of largest/smallest
    #[error("which must be either 'LM' or 'SM', got '{0}'")]
    InvalidSelector(String),

    /// Requested number of singular values is out of range
    #[error("k must be between 1 and min(A.shape) - 1, got k={k}, min(A.shape)={min_dim}")]
    InvalidCount {
        /// Requested count
        k: usize,
        /// Smaller operator dimension
        min_dim: usize,
    },

    /// Eigensolver backend name not recognized
    #[error("solver must be either 'arpack' or 'lobpcg', got '{0}'")]
    InvalidBackend(String),

    /// The eigensolver exhausted its iteration bound
    #[error("{solver} did not converge after {iterations} iterations ({nconv} of {k} eigenpairs converged)")]
    NotConverged {
        /// Backend that failed
        solver: &'static str,
        /// Iterations performed
        iterations: usize,
        /// Number of converged eigenpairs
        nconv: usize,
        /// Number of requested eigenpairs
        k: usize,
    },

    /// Unsupported dtype for an operation
    #[error("Unsupported dtype {dtype:?} for operation '{op}'")]
    UnsupportedDType {
        /// The unsupported dtype
        dtype: DType,
        /// The operation name
        op: &'static str,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// Returns true if this error is a convergence failure from an eigensolver
    pub fn is_convergence_failure(&self) -> bool {
        matches!(self, Self::NotConverged { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::InvalidCount { k: 0, min_dim: 3 };
        assert!(err.to_string().contains("k=0"));

        let err = Error::shape_mismatch(&[3], &[4]);
        assert_eq!(err.to_string(), "Shape mismatch: expected [3], got [4]");

        let err = Error::NotConverged {
            solver: "lanczos",
            iterations: 10,
            nconv: 1,
            k: 2,
        };
        assert!(err.is_convergence_failure());
        assert!(err.to_string().starts_with("lanczos did not converge"));
    }
}
