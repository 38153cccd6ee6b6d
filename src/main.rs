use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use hangterm::cli::{Cli, Commands};
use hangterm::core::runner::Runner;
use hangterm::core::store::SaveFile;
use hangterm::games::hangman::{Catalog, HangmanApp, HangmanEngine, RngSource, SavedSession};
use hangterm::games::HANGMAN;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    hangterm::logging::init(cli.log_file.as_deref())?;

    let catalog = Catalog::builtin();
    if cli.command == Some(Commands::List) {
        println!("🎮 {} - {}", HANGMAN.name, HANGMAN.description);
        println!("   {} words in the catalog", catalog.len());
        return Ok(());
    }

    let random = match cli.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };

    // Pick up the saved round if there is a usable one
    let store = SaveFile::new(cli.save_file.clone());
    let saved = if cli.fresh {
        None
    } else {
        store.load::<SavedSession>().unwrap_or_else(|e| {
            warn!(error = ?e, "discarding unreadable save file");
            None
        })
    };
    let engine = match saved {
        Some(saved) => HangmanEngine::restore(catalog.clone(), random.clone(), saved).unwrap_or_else(|e| {
            warn!(error = %e, "discarding rejected save file");
            HangmanEngine::new(catalog, random)
        }),
        None => HangmanEngine::new(catalog, random),
    };

    let app = HangmanApp::new(engine, cli.policy());
    let runner = Runner::new(app, store).with_autosave(cli.autosave());

    info!(game = HANGMAN.id, "starting");
    let terminal = ratatui::init();
    let result = runner.run(terminal).await;
    ratatui::restore();

    let app = result?;
    info!(outcome = ?app.view().outcome, "exited");
    Ok(())
}
