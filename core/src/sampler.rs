use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use rand::prelude::*;
use rand::rngs::SmallRng;

use crate::*;

/// Seedable source of the random picks a board is made of.
#[derive(Clone, Debug)]
pub struct Sampler {
    rng: SmallRng,
}

impl Sampler {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Uniform integer in `[0, max]`.
    pub fn random_int(&mut self, max: i64) -> Result<u64> {
        if max < 0 {
            return Err(TriviaError::InvalidArgument("upper bound must not be negative"));
        }
        Ok(self.rng.random_range(0..=max) as u64)
    }

    /// `n` distinct integers in `[0, max]`, in the order they were drawn.
    ///
    /// Draws with rejection, so the expected number of draws grows quickly as `n` approaches
    /// `max + 1`.
    pub fn random_unique_ints(&mut self, n: usize, max: i64) -> Result<Vec<u64>> {
        if n as i128 > max as i128 + 1 {
            return Err(TriviaError::InvalidArgument(
                "not enough distinct values in range",
            ));
        }

        let mut seen = BTreeSet::new();
        let mut picked = Vec::with_capacity(n);
        while picked.len() < n {
            let value = self.random_int(max)?;
            if seen.insert(value) {
                picked.push(value);
            }
        }
        Ok(picked)
    }
}
