use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;

/// Source of indices for picking one message out of several.
pub trait RandomSource {
    /// Return an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Picks from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Reproducible picks from a seeded PCG generator.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: Mcg128Xsl64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mcg128Xsl64::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Always picks the same index, clamped to the list length.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedChoice(pub usize);

impl RandomSource for FixedChoice {
    fn pick(&mut self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}
