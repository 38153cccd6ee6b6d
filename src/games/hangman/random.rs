use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_core::RngCore;

/// Source of catalog indices for `new_game`.
pub trait RandomSource {
    /// Pick an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform picks from any rand generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

/// Always picks the same index (clamped into range).
#[derive(Debug, Clone, Copy)]
pub struct FixedSource(pub usize);

impl RandomSource for FixedSource {
    fn pick(&mut self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}

/// Cycles through a list of indices, wrapping each into range.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    picks: Vec<usize>,
    next: usize,
}

impl SequenceSource {
    pub fn new(picks: Vec<usize>) -> Self {
        Self { picks, next: 0 }
    }
}

impl RandomSource for SequenceSource {
    fn pick(&mut self, len: usize) -> usize {
        if self.picks.is_empty() {
            return 0;
        }
        let value = self.picks[self.next % self.picks.len()];
        self.next += 1;
        value % len
    }
}
