use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::dataset::{is_letters, Catalog};
use super::error::RestoreError;
use super::persist::SavedSession;
use super::random::RandomSource;
use super::snapshot::Snapshot;

/// Attempt budget at the start of every round.
pub const MAX_ATTEMPTS: u8 = 6;

pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Playing,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum HintTier {
    #[default]
    None,
    TextRevealed,
    HalfLettersDisabled,
    VowelsRevealed,
}

/// What advancing out of a tier requires.
struct TierRule {
    next: HintTier,
    cost: u8,
}

impl HintTier {
    fn rule(self) -> Option<TierRule> {
        match self {
            HintTier::None => Some(TierRule { next: HintTier::TextRevealed, cost: 0 }),
            HintTier::TextRevealed => Some(TierRule { next: HintTier::HalfLettersDisabled, cost: 1 }),
            HintTier::HalfLettersDisabled => Some(TierRule { next: HintTier::VowelsRevealed, cost: 1 }),
            HintTier::VowelsRevealed => None,
        }
    }
}

/// Result of `guess_letter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guess {
    Hit(char),
    Miss(char),
    /// Round over, or not a letter. Nothing changed.
    Ignored,
}

/// Result of `use_hint`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintStep {
    Advanced(HintTier),
    /// Round over, terminal tier, or no attempt cushion. Nothing changed.
    Ignored,
}

/// State of the current round.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Session {
    selected_index: usize,
    word: String,
    hint: String,
    guessed: BTreeSet<char>,
    remaining_attempts: u8,
    outcome: Outcome,
    hint_tier: HintTier,
}

impl Session {
    fn is_complete(&self) -> bool {
        self.word.chars().all(|c| self.guessed.contains(&c))
    }

    // Won is checked first so a final correct letter beats an empty budget.
    fn evaluate(&mut self) {
        if self.is_complete() {
            self.outcome = Outcome::Won;
        } else if self.remaining_attempts == 0 {
            self.outcome = Outcome::Lost;
        }
    }
}

type Hook = Box<dyn FnMut(&Snapshot) + Send>;

/// The hangman state machine. Owns the round exclusively; callers issue
/// intents and read snapshots.
pub struct HangmanEngine<R: RandomSource> {
    catalog: Catalog,
    random: R,
    session: Session,
    hooks: Vec<Hook>,
}

impl<R: RandomSource> HangmanEngine<R> {
    /// Builds the engine and starts the first round.
    pub fn new(catalog: Catalog, random: R) -> Self {
        let entry = catalog.get(0).map(|e| (e.word().to_string(), e.hint().to_string()));
        let (word, hint) = entry.unwrap_or_default();
        let mut engine = Self {
            catalog,
            random,
            session: Session {
                selected_index: 0,
                word,
                hint,
                guessed: BTreeSet::new(),
                remaining_attempts: MAX_ATTEMPTS,
                outcome: Outcome::Playing,
                hint_tier: HintTier::None,
            },
            hooks: Vec::new(),
        };
        engine.new_game();
        engine
    }

    /// Rebuilds the engine around a persisted round.
    pub fn restore(catalog: Catalog, random: R, saved: SavedSession) -> Result<Self, RestoreError> {
        let word = saved.word.ok_or(RestoreError::MissingField("word"))?.to_ascii_uppercase();
        let hint = saved.hint.ok_or(RestoreError::MissingField("hint"))?;
        if !is_letters(&word) {
            return Err(RestoreError::InvalidWord(word));
        }
        let selected_index = saved
            .selected_index
            .filter(|&index| index < catalog.len())
            .or_else(|| catalog.position(&word))
            .unwrap_or(0);
        let guessed = saved
            .guessed_letters
            .unwrap_or_default()
            .into_iter()
            .map(|c| c.to_ascii_uppercase())
            .filter(char::is_ascii_uppercase)
            .collect();

        let mut session = Session {
            selected_index,
            word,
            hint,
            guessed,
            remaining_attempts: saved.remaining_attempts.unwrap_or(MAX_ATTEMPTS).min(MAX_ATTEMPTS),
            outcome: saved.outcome.unwrap_or_default(),
            hint_tier: saved.hint_tier.unwrap_or_default(),
        };
        // A round saved mid-play must still satisfy the win/loss rules.
        if session.outcome == Outcome::Playing {
            session.evaluate();
        }
        info!(
            index = session.selected_index,
            outcome = ?session.outcome,
            tier = ?session.hint_tier,
            "restored round"
        );
        Ok(Self {
            catalog,
            random,
            session,
            hooks: Vec::new(),
        })
    }

    /// Registers a hook that runs with a fresh snapshot after every change.
    pub fn subscribe<F>(&mut self, hook: F)
    where
        F: FnMut(&Snapshot) + Send + 'static,
    {
        self.hooks.push(Box::new(hook));
    }

    /// Replaces the round with a fresh one on a random catalog entry.
    pub fn new_game(&mut self) {
        let index = self.random.pick(self.catalog.len());
        let Some(entry) = self.catalog.get(index) else {
            // RandomSource broke its contract; keep the current round.
            return;
        };
        self.session = Session {
            selected_index: index,
            word: entry.word().to_string(),
            hint: entry.hint().to_string(),
            guessed: BTreeSet::new(),
            remaining_attempts: MAX_ATTEMPTS,
            outcome: Outcome::Playing,
            hint_tier: HintTier::None,
        };
        info!(index, "new round");
        trace!(word = %self.session.word, "secret word");
        self.notify();
    }

    /// Guesses one letter. Input is uppercased first.
    ///
    /// A letter missing from the word costs an attempt on every call, even
    /// if it was guessed before. Keeping repeat guesses away is up to the
    /// caller.
    pub fn guess_letter(&mut self, letter: char) -> Guess {
        let letter = letter.to_ascii_uppercase();
        if self.session.outcome != Outcome::Playing || !letter.is_ascii_uppercase() {
            debug!(%letter, "guess ignored");
            return Guess::Ignored;
        }

        let session = &mut self.session;
        session.guessed.insert(letter);
        let hit = session.word.contains(letter);
        if !hit {
            session.remaining_attempts = session.remaining_attempts.saturating_sub(1);
        }
        session.evaluate();
        debug!(%letter, hit, remaining = session.remaining_attempts, "guess");
        self.log_outcome();
        self.notify();

        if hit {
            Guess::Hit(letter)
        } else {
            Guess::Miss(letter)
        }
    }

    /// Advances the hint tier by one step when the tier's rule allows it.
    pub fn use_hint(&mut self) -> HintStep {
        let session = &mut self.session;
        if session.outcome != Outcome::Playing {
            return HintStep::Ignored;
        }
        let Some(rule) = session.hint_tier.rule() else {
            return HintStep::Ignored;
        };
        // A paid tier needs a cushion so the charge never lands on zero.
        if rule.cost > 0 && session.remaining_attempts <= rule.cost {
            debug!(tier = ?session.hint_tier, remaining = session.remaining_attempts, "hint blocked");
            return HintStep::Ignored;
        }

        session.remaining_attempts -= rule.cost;
        session.hint_tier = rule.next;
        if rule.next == HintTier::VowelsRevealed {
            let vowels: Vec<char> = session.word.chars().filter(|c| VOWELS.contains(c)).collect();
            session.guessed.extend(vowels);
        }
        session.evaluate();
        debug!(tier = ?rule.next, remaining = session.remaining_attempts, "hint advanced");
        self.log_outcome();
        self.notify();
        HintStep::Advanced(rule.next)
    }

    pub fn snapshot(&self) -> Snapshot {
        let s = &self.session;
        Snapshot {
            selected_index: s.selected_index,
            masked_word: Snapshot::mask(&s.word, &s.guessed),
            remaining_attempts: s.remaining_attempts,
            outcome: s.outcome,
            hint_tier: s.hint_tier,
            hint: (s.hint_tier != HintTier::None).then(|| s.hint.clone()),
            guessed_letters: s.guessed.clone(),
            revealed_word: (s.outcome != Outcome::Playing).then(|| s.word.clone()),
        }
    }

    /// The persisted form of the current round.
    pub fn save(&self) -> SavedSession {
        let s = &self.session;
        SavedSession {
            selected_index: Some(s.selected_index),
            word: Some(s.word.clone()),
            hint: Some(s.hint.clone()),
            guessed_letters: Some(s.guessed.iter().copied().collect()),
            remaining_attempts: Some(s.remaining_attempts),
            outcome: Some(s.outcome),
            hint_tier: Some(s.hint_tier),
        }
    }

    /// Letters of the secret word, for presentation policies that must avoid them.
    pub fn contains(&self, letter: char) -> bool {
        self.session.word.contains(letter.to_ascii_uppercase())
    }

    fn log_outcome(&self) {
        match self.session.outcome {
            Outcome::Playing => {}
            outcome => info!(?outcome, remaining = self.session.remaining_attempts, "round finished"),
        }
    }

    fn notify(&mut self) {
        if self.hooks.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for hook in &mut self.hooks {
            hook(&snapshot);
        }
    }
}
