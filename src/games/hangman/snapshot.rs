use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::engine::{HintTier, Outcome};

pub const PLACEHOLDER: char = '_';
pub const SEPARATOR: &str = " ";

/// Read-only view of a round, rebuilt after every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub selected_index: usize,
    pub masked_word: String,
    pub remaining_attempts: u8,
    pub outcome: Outcome,
    pub hint_tier: HintTier,
    /// Present once the first hint tier is reached.
    pub hint: Option<String>,
    pub guessed_letters: BTreeSet<char>,
    /// Present once the round is over.
    pub revealed_word: Option<String>,
}

impl Snapshot {
    /// `MOBILE` with `{O, E}` guessed renders as `_ O _ _ _ E`.
    pub fn mask(word: &str, guessed: &BTreeSet<char>) -> String {
        word.chars()
            .map(|c| if guessed.contains(&c) { c } else { PLACEHOLDER })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }

    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::Playing
    }
}
