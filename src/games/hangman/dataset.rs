use super::error::HangmanError;

/// A secret word and the text shown when the first hint tier is reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: String,
    hint: String,
}

impl WordEntry {
    /// Words are stored uppercase. Anything other than ascii letters is rejected.
    pub fn new(word: &str, hint: &str) -> Result<Self, HangmanError> {
        let word = word.to_ascii_uppercase();
        if !is_letters(&word) {
            return Err(HangmanError::InvalidWord { word });
        }
        Ok(Self { word, hint: hint.to_string() })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }
}

pub(crate) fn is_letters(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_uppercase())
}

const BUILTIN: [(&str, &str); 5] = [
    ("KOTLIN", "A modern programming language"),
    ("COMPOSE", "A declarative UI toolkit"),
    ("ANDROID", "A mobile operating system"),
    ("JETPACK", "A suite of libraries for Android development"),
    ("MOBILE", "Relating to portable devices"),
];

/// Fixed, non-empty list of word entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<WordEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<WordEntry>) -> Result<Self, HangmanError> {
        if entries.is_empty() {
            return Err(HangmanError::EmptyCatalog);
        }
        Ok(Self { entries })
    }

    /// The catalog shipped with the game.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(word, hint)| WordEntry {
                word: word.to_string(),
                hint: hint.to_string(),
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // A Catalog always has at least one entry.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> Option<&WordEntry> {
        self.entries.get(index)
    }

    pub fn position(&self, word: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.word == word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.iter()
    }
}
