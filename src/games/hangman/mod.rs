/// Hangman: a pure state machine plus its terminal front end
pub mod app;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod persist;
pub mod policy;
pub mod random;
pub mod renderer;
pub mod snapshot;

pub use app::HangmanApp;
pub use dataset::{Catalog, WordEntry};
pub use engine::{Guess, HangmanEngine, HintStep, HintTier, Outcome, MAX_ATTEMPTS};
pub use error::{HangmanError, RestoreError};
pub use persist::SavedSession;
pub use policy::{Alphabetical, DisablePolicy, Shuffled};
pub use random::{FixedSource, RandomSource, RngSource, SequenceSource};
pub use snapshot::Snapshot;
