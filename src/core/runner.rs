use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use ratatui::DefaultTerminal;
use tracing::{info, warn};

use crate::core::game::{Command, Context, Game};
use crate::core::store::SaveFile;

// Autosave period stand-in when autosave is off; the branch ignores it.
const IDLE_TICK: Duration = Duration::from_secs(3600);

pub struct Runner<G: Game> {
    game: G,
    store: SaveFile,
    autosave: Option<Duration>,
}

impl<G: Game> Runner<G> {
    pub fn new(game: G, store: SaveFile) -> Self {
        Self { game, store, autosave: None }
    }

    /// Periodic saves. A zero period turns them off.
    pub fn with_autosave(mut self, period: Duration) -> Self {
        self.autosave = (!period.is_zero()).then_some(period);
        self
    }

    pub fn save(&self) -> Result<()> {
        self.store.save(&self.game.saved())
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<G> {
        let (outbox_tx, mut outbox_rx) = tokio::sync::mpsc::unbounded_channel::<Command>();
        let ctx = Context::new(outbox_tx);
        let mut events = EventStream::new();

        let mut autosave = tokio::time::interval(self.autosave.unwrap_or(IDLE_TICK));
        // The first tick fires immediately; swallow it.
        autosave.tick().await;

        info!(save = %self.store.path().display(), "runner started");
        loop {
            terminal.draw(|f| self.game.render(f))?;

            tokio::select! {
                // 1. INPUT: key presses go straight to the game
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        self.game.handle_input(key, &ctx);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                },

                // 2. COMMANDS: whatever the game asked for via ctx.send()
                Some(cmd) = outbox_rx.recv() => match cmd {
                    Command::Save => {
                        if let Err(e) = self.save() {
                            warn!(error = ?e, "save failed");
                        }
                    }
                    Command::Quit => break,
                },

                // 3. AUTOSAVE
                _ = autosave.tick() => {
                    if self.autosave.is_some() {
                        if let Err(e) = self.save() {
                            warn!(error = ?e, "autosave failed");
                        }
                    }
                }
            }
        }

        self.save()?;
        info!("runner stopped");
        Ok(self.game)
    }
}
