//! WASM-compatible random number generator.
//!
//! Uses the `rand` crate with `SmallRng` (xoshiro256++) which is fast and
//! works with WASM. Entropy is sourced from `getrandom` (browser crypto API).
//!
//! `TourRng` implements `RngCore`, so it can be handed to any function that
//! takes a `Rng`, including [`crate::tour::generate_tour`].

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

/// A seedable RNG wrapper for WASM.
///
/// Can be seeded for deterministic replay, or created from system entropy.
pub struct TourRng {
    inner: SmallRng,
}

impl TourRng {
    /// Create from system entropy (browser crypto.getRandomValues or OS).
    pub fn new() -> Self {
        Self {
            inner: SmallRng::from_os_rng(),
        }
    }

    /// Create with a specific seed for deterministic behavior.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is given, entropy-backed otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::new(),
        }
    }
}

impl Default for TourRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for TourRng {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.inner.fill_bytes(dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_seeded_deterministic() {
        let mut rng1 = TourRng::from_seed(42);
        let mut rng2 = TourRng::from_seed(42);
        for _ in 0..100 {
            assert_eq!(rng1.random_range(0..1000), rng2.random_range(0..1000));
        }
    }

    #[test]
    fn test_optional_seed_matches_explicit_seed() {
        let mut a = TourRng::from_optional_seed(Some(7));
        let mut b = TourRng::from_seed(7);
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn test_range_bounds() {
        let mut rng = TourRng::from_seed(123);
        for _ in 0..1000 {
            let v: usize = rng.random_range(0..10);
            assert!(v < 10);
        }
    }
}
