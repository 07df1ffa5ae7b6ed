//! Injectable source of random vectors
//!
//! Random starting blocks and basis augmentation draw from a
//! [`RandomVectorSource`] passed in by the caller, so a fixed generator and
//! seed make every call reproducible. Any `rand::Rng` is a source.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::helpers::{extend_orthonormal, normalize};
use crate::dtype::Element;

/// Seed used when the caller does not supply one
pub const DEFAULT_SEED: u64 = 52;

/// Capability to draw random vectors of a given length and element type
pub trait RandomVectorSource {
    /// Vector of `n` independent standard normal entries
    ///
    /// For complex element types the real and imaginary parts are drawn
    /// independently.
    fn random_vector<T: Element>(&mut self, n: usize) -> Vec<T>;

    /// Random vector of unit norm
    fn random_unit_vector<T: Element>(&mut self, n: usize) -> Vec<T> {
        loop {
            let mut v = self.random_vector::<T>(n);
            if n == 0 || normalize(&mut v).is_some() {
                return v;
            }
        }
    }
}

impl<R: Rng + ?Sized> RandomVectorSource for R {
    fn random_vector<T: Element>(&mut self, n: usize) -> Vec<T> {
        (0..n).map(|_| T::sample_standard_normal(self)).collect()
    }
}

/// Append a random unit vector orthogonal to an orthonormal basis
///
/// Returns `false` without drawing when the basis already spans `n` dimensions.
/// Otherwise draws until a sample has a numerically independent component,
/// which happens with probability one on the first draw.
pub fn push_random_orthonormal<T, S>(source: &mut S, basis: &mut Vec<Vec<T>>, n: usize) -> bool
where
    T: Element,
    S: RandomVectorSource + ?Sized,
{
    if basis.len() >= n {
        return false;
    }
    while extend_orthonormal(basis, [source.random_vector::<T>(n)]) == 0 {}
    true
}

/// Deterministic generator for a seed
///
/// ChaCha8 output is stable across platforms and rand releases, unlike `StdRng`.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
