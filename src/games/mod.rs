pub mod hangman;

/// Metadata about a game
#[derive(Clone, Debug)]
pub struct GameInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const HANGMAN: GameInfo = GameInfo {
    id: "hangman",
    name: "Hangman",
    description: "Guess the word letter by letter, with hints that cost attempts",
};
