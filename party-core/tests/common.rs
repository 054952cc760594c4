use party_core::{RoundEngine, ThemeDeck};
use party_types::{GameOptions, Player, TurnAdvance, TurnOutcome};

/// Creates an ordered player list from display names
pub fn create_players(names: &[&str]) -> Vec<Player> {
    names.iter().map(|n| Player::new(*n)).collect()
}

/// Creates game options with a 1 minute timer
pub fn create_options(names: &[&str], total_rounds: u32) -> GameOptions {
    GameOptions {
        players: create_players(names),
        round_minutes: 1,
        total_rounds,
    }
}

/// Creates a deterministic deck over a synthetic pool
pub fn create_deck(pool_size: usize, seed: u64) -> ThemeDeck {
    let words = (0..pool_size).map(|i| format!("theme{}", i)).collect();
    ThemeDeck::with_seed(words, seed).unwrap()
}

/// Creates an engine over a 20 word deterministic pool
pub fn create_engine(names: &[&str], total_rounds: u32) -> RoundEngine {
    RoundEngine::new(create_options(names, total_rounds), create_deck(20, 11)).unwrap()
}

/// Plays one full turn: confirm, reveal, then resolve with the given outcome
pub fn play_turn(engine: &mut RoundEngine, outcome: TurnOutcome) -> TurnAdvance {
    engine.confirm_player().unwrap();
    match &outcome {
        TurnOutcome::CorrectGuess { .. } => {
            engine.open_correct_award().unwrap();
        }
        TurnOutcome::NoCorrectGuess => {
            engine.open_no_guess().unwrap();
        }
        TurnOutcome::KatakanaSlip { .. } => {
            engine.open_katakana_award().unwrap();
        }
    }
    engine.resolve_outcome(outcome).unwrap()
}

/// Plays every turn with "nobody guessed" until the engine completes,
/// returning how many turn-advances it took
pub fn play_to_completion(engine: &mut RoundEngine) -> (usize, TurnAdvance) {
    let mut advances = 0;
    loop {
        let advance = play_turn(engine, TurnOutcome::NoCorrectGuess);
        advances += 1;
        if matches!(advance, TurnAdvance::Finished(_)) {
            return (advances, advance);
        }
        assert!(
            advances <= 1000,
            "engine did not complete within 1000 turns"
        );
    }
}
