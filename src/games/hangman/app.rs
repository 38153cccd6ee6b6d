use std::collections::BTreeSet;
use std::sync::mpsc::{channel, Receiver};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::core::game::{Command, Context, Game};

use super::engine::{Guess, HangmanEngine, HintStep, HintTier};
use super::persist::SavedSession;
use super::policy::{half_disabled, DisablePolicy};
use super::random::RandomSource;
use super::renderer::{HangmanRenderer, Screen};
use super::snapshot::Snapshot;

/// Terminal front end for the hangman engine. Holds the UI guards the engine
/// leaves to its caller: no repeat guesses, no hint without a cushion.
pub struct HangmanApp<R: RandomSource> {
    engine: HangmanEngine<R>,
    changes: Receiver<Snapshot>,
    view: Snapshot,
    disabled: BTreeSet<char>,
    policy: Box<dyn DisablePolicy>,
    message: String,
}

impl<R: RandomSource> HangmanApp<R> {
    pub fn new(mut engine: HangmanEngine<R>, policy: Box<dyn DisablePolicy>) -> Self {
        let (tx, changes) = channel();
        engine.subscribe(move |snapshot| {
            let _ = tx.send(snapshot.clone());
        });
        let view = engine.snapshot();
        let mut app = Self {
            engine,
            changes,
            view,
            disabled: BTreeSet::new(),
            policy,
            message: "Welcome to Hangman!".to_string(),
        };
        // Restored straight into a later tier.
        if app.view.hint_tier >= HintTier::HalfLettersDisabled {
            app.disable_half();
        }
        app
    }

    pub fn view(&self) -> &Snapshot {
        &self.view
    }

    pub fn disabled(&self) -> &BTreeSet<char> {
        &self.disabled
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn letter_enabled(&self, letter: char) -> bool {
        !self.view.is_over()
            && !self.view.guessed_letters.contains(&letter)
            && !self.disabled.contains(&letter)
    }

    pub fn hint_enabled(&self) -> bool {
        !self.view.is_over()
            && self.view.hint_tier != HintTier::VowelsRevealed
            && self.view.remaining_attempts > 1
    }

    pub fn guess(&mut self, letter: char) {
        let letter = letter.to_ascii_uppercase();
        if !self.letter_enabled(letter) {
            debug!(%letter, "letter not available");
            return;
        }
        self.message = match self.engine.guess_letter(letter) {
            Guess::Hit(c) => format!("Good guess! '{c}' is in the word."),
            Guess::Miss(c) => format!("Sorry, '{c}' is not in the word."),
            Guess::Ignored => return,
        };
        self.sync();
    }

    pub fn hint(&mut self) {
        if !self.hint_enabled() {
            return;
        }
        self.message = match self.engine.use_hint() {
            HintStep::Advanced(HintTier::TextRevealed) => "Hint revealed.".to_string(),
            HintStep::Advanced(_) => "Hint used. It cost you an attempt.".to_string(),
            HintStep::Ignored | HintStep::Advanced(HintTier::None) => return,
        };
        self.sync();
    }

    pub fn new_game(&mut self) {
        self.engine.new_game();
        self.message = "New word. Good luck!".to_string();
        self.sync();
    }

    /// Pulls the latest snapshot published by the engine.
    fn sync(&mut self) {
        let Some(latest) = self.changes.try_iter().last() else {
            return;
        };
        let previous = std::mem::replace(&mut self.view, latest);
        if self.view.hint_tier < HintTier::HalfLettersDisabled {
            self.disabled.clear();
        } else if previous.hint_tier < HintTier::HalfLettersDisabled {
            self.disable_half();
        }
    }

    fn disable_half(&mut self) {
        let engine = &self.engine;
        self.disabled = half_disabled(&self.view, |c| engine.contains(c), self.policy.as_mut());
        debug!(count = self.disabled.len(), "letters disabled by hint");
    }
}

impl<R: RandomSource> Game for HangmanApp<R> {
    type Saved = SavedSession;

    fn handle_input(&mut self, event: KeyEvent, ctx: &Context) {
        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        match event.code {
            KeyCode::Esc => ctx.send(Command::Quit),
            KeyCode::Char('s') if ctrl => {
                ctx.send(Command::Save);
                self.message = "Game saved.".to_string();
            }
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Enter if self.view.is_over() => self.new_game(),
            KeyCode::Char('?') => self.hint(),
            KeyCode::Char(c) if c.is_ascii_alphabetic() && !ctrl => self.guess(c),
            _ => {}
        }
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        HangmanRenderer::render(
            frame,
            &Screen {
                view: &self.view,
                disabled: &self.disabled,
                message: &self.message,
                hint_enabled: self.hint_enabled(),
            },
        );
    }

    fn saved(&self) -> SavedSession {
        self.engine.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hangman::dataset::{Catalog, WordEntry};
    use crate::games::hangman::policy::Alphabetical;
    use crate::games::hangman::random::FixedSource;

    fn app(word: &str) -> HangmanApp<FixedSource> {
        let catalog = Catalog::new(vec![WordEntry::new(word, "hint").unwrap()]).unwrap();
        HangmanApp::new(HangmanEngine::new(catalog, FixedSource(0)), Box::new(Alphabetical))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn repeat_guesses_are_not_forwarded() {
        let mut app = app("MOBILE");
        app.guess('z');
        app.guess('Z');
        assert_eq!(app.view().remaining_attempts, 5);
        assert_eq!(app.message(), "Sorry, 'Z' is not in the word.");
    }

    #[test]
    fn half_tier_disables_letters_and_new_game_clears_them() {
        let mut app = app("MOBILE");
        app.hint();
        assert!(app.disabled().is_empty());
        app.hint();
        assert_eq!(app.view().hint_tier, HintTier::HalfLettersDisabled);
        assert_eq!(app.disabled().len(), 13);
        assert!(!app.letter_enabled('A'));

        let before = app.view().remaining_attempts;
        app.guess('A');
        assert_eq!(app.view().remaining_attempts, before);

        app.new_game();
        assert!(app.disabled().is_empty());
    }

    #[test]
    fn hint_key_is_blocked_without_cushion() {
        let mut app = app("MOBILE");
        for c in ['Q', 'W', 'X', 'Z', 'Y'] {
            app.guess(c);
        }
        assert_eq!(app.view().remaining_attempts, 1);
        assert!(!app.hint_enabled());
        app.hint();
        assert_eq!(app.view().hint_tier, HintTier::None);
    }

    #[test]
    fn keys_map_to_intents() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let ctx = Context::new(tx);
        let mut app = app("MOBILE");

        app.handle_input(key(KeyCode::Char('m')), &ctx);
        assert!(app.view().guessed_letters.contains(&'M'));
        app.handle_input(key(KeyCode::Char('?')), &ctx);
        assert_eq!(app.view().hint_tier, HintTier::TextRevealed);
        app.handle_input(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL), &ctx);
        assert_eq!(rx.try_recv().ok(), Some(Command::Save));
        app.handle_input(key(KeyCode::Esc), &ctx);
        assert_eq!(rx.try_recv().ok(), Some(Command::Quit));
    }

    #[test]
    fn enter_starts_a_new_round_only_when_over() {
        let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
        let ctx = Context::new(tx);
        let mut app = app("A");

        app.handle_input(key(KeyCode::Char('Z')), &ctx);
        app.handle_input(key(KeyCode::Enter), &ctx);
        assert_eq!(app.view().remaining_attempts, 5);

        app.handle_input(key(KeyCode::Char('A')), &ctx);
        assert!(app.view().is_over());
        app.handle_input(key(KeyCode::Enter), &ctx);
        assert!(!app.view().is_over());
        assert_eq!(app.view().remaining_attempts, 6);
    }
}
