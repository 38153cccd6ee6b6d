pub mod core {
	pub mod game;
	pub mod runner;
	pub mod store;
}

pub mod cli;
pub mod games;
pub mod logging;

// Re-export for convenience
pub use crate::core::game::{Command, Context, Game};
