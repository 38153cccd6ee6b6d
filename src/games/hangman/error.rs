use thiserror::Error;

/// Fatal configuration problems. An engine can't be built while one of these stands.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HangmanError {
    #[error("word catalog is empty")]
    EmptyCatalog,
    #[error("catalog word {word:?} must be ascii letters only")]
    InvalidWord { word: String },
}

/// Reasons a persisted session is rejected on restore.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RestoreError {
    #[error("saved session is missing `{0}`")]
    MissingField(&'static str),
    #[error("saved word {0:?} must be ascii letters only")]
    InvalidWord(String),
}
