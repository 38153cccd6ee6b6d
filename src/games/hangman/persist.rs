use serde::{Deserialize, Serialize};

use super::engine::{HintTier, Outcome};

/// Flat record written to the save file.
///
/// Every field is optional on the wire; see `HangmanEngine::restore` for how
/// gaps are filled or rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SavedSession {
    pub selected_index: Option<usize>,
    pub word: Option<String>,
    pub hint: Option<String>,
    pub guessed_letters: Option<Vec<char>>,
    pub remaining_attempts: Option<u8>,
    pub outcome: Option<Outcome>,
    pub hint_tier: Option<HintTier>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hangman::dataset::Catalog;
    use crate::games::hangman::engine::{HangmanEngine, MAX_ATTEMPTS};
    use crate::games::hangman::error::RestoreError;
    use crate::games::hangman::random::FixedSource;
    use pretty_assertions::assert_eq;

    fn restore(json: &str) -> Result<HangmanEngine<FixedSource>, RestoreError> {
        let saved: SavedSession = serde_json::from_str(json).unwrap();
        HangmanEngine::restore(Catalog::builtin(), FixedSource(0), saved)
    }

    #[test]
    fn missing_word_or_hint_is_rejected() {
        assert_eq!(
            restore(r#"{"hint": "x"}"#).err(),
            Some(RestoreError::MissingField("word"))
        );
        assert_eq!(
            restore(r#"{"word": "MOBILE"}"#).err(),
            Some(RestoreError::MissingField("hint"))
        );
    }

    #[test]
    fn bad_word_is_rejected() {
        assert!(matches!(
            restore(r#"{"word": "MO BILE", "hint": "x"}"#),
            Err(RestoreError::InvalidWord(_))
        ));
    }

    #[test]
    fn missing_enums_fall_back_to_defaults() {
        let snap = restore(r#"{"word": "mobile", "hint": "Relating to portable devices"}"#)
            .unwrap()
            .snapshot();
        assert_eq!(snap.outcome, Outcome::Playing);
        assert_eq!(snap.hint_tier, HintTier::None);
        assert_eq!(snap.remaining_attempts, MAX_ATTEMPTS);
        assert_eq!(snap.selected_index, 4);
        assert!(snap.guessed_letters.is_empty());
    }

    #[test]
    fn fully_guessed_word_restores_as_won() {
        let snap = restore(r#"{"word": "KOTLIN", "hint": "x", "guessedLetters": ["K", "O", "T", "L", "I", "N"]}"#)
            .unwrap()
            .snapshot();
        assert_eq!(snap.outcome, Outcome::Won);
        assert_eq!(snap.revealed_word.as_deref(), Some("KOTLIN"));
    }

    #[test]
    fn empty_budget_restores_as_lost() {
        let mut engine = restore(r#"{"word": "KOTLIN", "hint": "x", "remainingAttempts": 0}"#).unwrap();
        assert_eq!(engine.snapshot().outcome, Outcome::Lost);
        engine.guess_letter('K');
        assert!(engine.snapshot().guessed_letters.is_empty());
    }

    #[test]
    fn junk_letters_and_out_of_range_index_are_dropped() {
        let snap = restore(
            r#"{"word": "KOTLIN", "hint": "x", "guessedLetters": ["1", "!", "k"], "selectedIndex": 99}"#,
        )
        .unwrap()
        .snapshot();
        assert_eq!(snap.guessed_letters, ['K'].into_iter().collect());
        assert_eq!(snap.selected_index, 0);
        assert_eq!(snap.outcome, Outcome::Playing);
    }

    #[test]
    fn wire_layout() {
        let saved = SavedSession {
            selected_index: Some(1),
            word: Some("COMPOSE".into()),
            hint: Some("A declarative UI toolkit".into()),
            guessed_letters: Some(vec!['C', 'Z']),
            remaining_attempts: Some(5),
            outcome: Some(Outcome::Playing),
            hint_tier: Some(HintTier::TextRevealed),
        };
        let value = serde_json::to_value(&saved).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "selectedIndex": 1,
                "word": "COMPOSE",
                "hint": "A declarative UI toolkit",
                "guessedLetters": ["C", "Z"],
                "remainingAttempts": 5,
                "outcome": "Playing",
                "hintTier": "TextRevealed",
            })
        );
    }
}
