use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};

use crate::games::hangman::{Alphabetical, DisablePolicy, Shuffled};

#[derive(Parser, Debug)]
#[command(name = "hangterm")]
#[command(about = "🎩 Hangman in the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Seed for word selection (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where the current round is saved
    #[arg(long, default_value = "hangterm-save.json")]
    pub save_file: PathBuf,

    /// Ignore any saved round and start fresh
    #[arg(long)]
    pub fresh: bool,

    /// Seconds between autosaves, 0 to disable
    #[arg(long, default_value_t = 30)]
    pub autosave_secs: u64,

    /// How the "half the letters" hint picks letters
    #[arg(long, value_enum, default_value_t = PolicyKind::Alphabetical)]
    pub disable_policy: PolicyKind,

    /// Write logs to this file (logging is off otherwise)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the word catalog size
    List,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    Alphabetical,
    Random,
}

impl Cli {
    pub fn autosave(&self) -> Duration {
        Duration::from_secs(self.autosave_secs)
    }

    pub fn policy(&self) -> Box<dyn DisablePolicy> {
        match self.disable_policy {
            PolicyKind::Alphabetical => Box::new(Alphabetical),
            PolicyKind::Random => Box::new(Shuffled::from_seed(self.seed)),
        }
    }
}
