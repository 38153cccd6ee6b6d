use std::collections::BTreeSet;

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use rand_core::RngCore;

use super::snapshot::Snapshot;

pub const ALPHABET: std::ops::RangeInclusive<char> = 'A'..='Z';

/// Chooses which letters the `HalfLettersDisabled` hint greys out.
pub trait DisablePolicy: Send {
    /// Pick `count` letters out of `eligible` (sorted, never in the word).
    fn choose(&mut self, eligible: &[char], count: usize) -> BTreeSet<char>;
}

/// First eligible letters in alphabet order.
#[derive(Debug, Default, Clone, Copy)]
pub struct Alphabetical;

impl DisablePolicy for Alphabetical {
    fn choose(&mut self, eligible: &[char], count: usize) -> BTreeSet<char> {
        eligible.iter().take(count).copied().collect()
    }
}

/// A random subset of eligible letters.
#[derive(Debug, Clone)]
pub struct Shuffled<R>(R);

impl Shuffled<StdRng> {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_os_rng()),
        }
    }
}

impl<R: RngCore + Send> DisablePolicy for Shuffled<R> {
    fn choose(&mut self, eligible: &[char], count: usize) -> BTreeSet<char> {
        let mut pool = eligible.to_vec();
        pool.shuffle(&mut self.0);
        pool.into_iter().take(count).collect()
    }
}

/// Half of the not-yet-guessed letters, drawn only from letters absent from
/// the word so the hint never hides a correct answer.
pub fn half_disabled<F>(snapshot: &Snapshot, in_word: F, policy: &mut dyn DisablePolicy) -> BTreeSet<char>
where
    F: Fn(char) -> bool,
{
    let unguessed: Vec<char> = ALPHABET
        .filter(|c| !snapshot.guessed_letters.contains(c))
        .collect();
    let eligible: Vec<char> = unguessed.iter().copied().filter(|&c| !in_word(c)).collect();
    let count = (unguessed.len() / 2).min(eligible.len());
    policy.choose(&eligible, count)
}
