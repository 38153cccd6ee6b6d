use hangterm::core::store::SaveFile;
use hangterm::games::hangman::{
    Catalog, FixedSource, HangmanEngine, HintTier, Outcome, RestoreError, SavedSession,
};
use pretty_assertions::assert_eq;

fn mid_round() -> HangmanEngine<FixedSource> {
    let mut engine = HangmanEngine::new(Catalog::builtin(), FixedSource(1));
    engine.guess_letter('C');
    engine.guess_letter('Z');
    engine.use_hint();
    engine.use_hint();
    engine
}

#[test]
fn save_and_restore_keeps_the_snapshot() {
    let engine = mid_round();
    let json = serde_json::to_string(&engine.save()).unwrap();
    let saved: SavedSession = serde_json::from_str(&json).unwrap();
    let restored = HangmanEngine::restore(Catalog::builtin(), FixedSource(0), saved).unwrap();
    assert_eq!(restored.snapshot(), engine.snapshot());
    assert_eq!(restored.snapshot().hint_tier, HintTier::HalfLettersDisabled);
}

#[test]
fn finished_round_restores_frozen() {
    let mut engine = HangmanEngine::new(Catalog::builtin(), FixedSource(0));
    for c in "KOTLIN".chars() {
        engine.guess_letter(c);
    }
    let mut restored =
        HangmanEngine::restore(Catalog::builtin(), FixedSource(0), engine.save()).unwrap();
    assert_eq!(restored.snapshot().outcome, Outcome::Won);
    restored.guess_letter('Z');
    assert_eq!(restored.snapshot(), engine.snapshot());
}

#[test]
fn save_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = SaveFile::new(dir.path().join("round.json"));
    let engine = mid_round();
    store.save(&engine.save()).unwrap();

    let saved = store.load::<SavedSession>().unwrap().unwrap();
    let restored = HangmanEngine::restore(Catalog::builtin(), FixedSource(0), saved).unwrap();
    assert_eq!(restored.snapshot(), engine.snapshot());
}

#[test]
fn record_without_hint_is_rejected() {
    let saved: SavedSession = serde_json::from_str(r#"{"word": "KOTLIN", "remainingAttempts": 3}"#).unwrap();
    assert_eq!(
        HangmanEngine::restore(Catalog::builtin(), FixedSource(0), saved).err(),
        Some(RestoreError::MissingField("hint"))
    );
}
