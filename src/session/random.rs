//! Uniform random index sources
//!
//! Everything that draws at random goes through `RandomSource`, so tests and
//! reproducible sessions can pin the outcome.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A source of uniformly distributed indices
pub trait RandomSource {
    /// Return an index in `0..len`
    ///
    /// Callers never pass `len == 0`.
    fn index(&mut self, len: usize) -> usize;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn index(&mut self, len: usize) -> usize {
        (**self).index(len)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn index(&mut self, len: usize) -> usize {
        (**self).index(len)
    }
}

/// Adapter turning any `rand` generator into a `RandomSource`
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn index(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

/// Thread-local generator, the default for interactive sessions
pub type ThreadRandom = RngSource<ThreadRng>;

/// Deterministic generator for reproducible sessions
pub type SeededRandom = RngSource<StdRng>;

impl ThreadRandom {
    #[must_use]
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl SeededRandom {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

/// Build the session's random source: seeded when a seed is given
#[must_use]
pub fn from_seed(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(SeededRandom::seeded(seed)),
        None => Box::new(ThreadRandom::thread()),
    }
}

/// Always returns the same index, clamped to the range
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedIndex(pub usize);

impl RandomSource for FixedIndex {
    fn index(&mut self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}
