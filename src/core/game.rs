/// Core game interface for terminal games driven by the runner
use crossterm::event::KeyEvent;
use serde::Serialize;
use tokio::sync::mpsc::UnboundedSender;

/// Requests a game makes of the runner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Save,
    Quit,
}

/// Handed to the game on every callback so it can talk back to the runner
#[derive(Clone)]
pub struct Context {
    pub(crate) tx: UnboundedSender<Command>,
}

impl Context {
    pub fn new(tx: UnboundedSender<Command>) -> Self {
        Self { tx }
    }

    pub fn send(&self, cmd: Command) {
        // Only fails once the runner has stopped listening.
        let _ = self.tx.send(cmd);
    }
}

/// Main game trait. The runner owns the terminal and the save file; the game
/// owns its state.
pub trait Game {
    /// What gets written to the save file
    type Saved: Serialize;

    fn handle_input(&mut self, event: KeyEvent, ctx: &Context);

    fn render(&self, frame: &mut ratatui::Frame);

    fn saved(&self) -> Self::Saved;
}
