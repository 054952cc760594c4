mod common;

use common::*;
use party_core::{RankingComputer, TickOutcome, TurnStage};
use party_types::{TurnAdvance, TurnOutcome};

#[test]
fn test_completion_after_exactly_rounds_times_players_turns() {
    for (names, rounds) in [
        (vec!["A", "B"], 1),
        (vec!["A", "B"], 3),
        (vec!["A", "B", "C"], 2),
        (vec!["A", "B", "C", "D", "E"], 4),
    ] {
        let mut engine = create_engine(&names, rounds);
        let (advances, _) = play_to_completion(&mut engine);
        assert_eq!(
            advances,
            names.len() * rounds as usize,
            "{} players x {} rounds",
            names.len(),
            rounds
        );
        assert!(engine.is_finished());
    }
}

#[test]
fn test_completion_fires_exactly_once() {
    let mut engine = create_engine(&["A", "B"], 1);
    let (_, advance) = play_to_completion(&mut engine);
    assert!(matches!(advance, TurnAdvance::Finished(_)));

    // Any further interaction is rejected rather than completing again.
    assert!(engine.confirm_player().is_err());
    assert!(engine.open_no_guess().is_err());
    assert!(engine.resolve_outcome(TurnOutcome::NoCorrectGuess).is_err());
}

#[test]
fn test_scores_accumulate_across_rounds() {
    let mut engine = create_engine(&["A", "B", "C"], 2);

    // Round 0: A describes, B guesses; B describes, C catches a slip;
    // C describes, nobody guesses.
    play_turn(&mut engine, TurnOutcome::CorrectGuess { guesser: 1 });
    play_turn(&mut engine, TurnOutcome::KatakanaSlip { catcher: 2 });
    play_turn(&mut engine, TurnOutcome::NoCorrectGuess);
    assert_eq!(engine.points(), &[0, 0, 1]);
    assert_eq!(engine.current_round(), 1);

    // Round 1: A describes, C guesses; B describes, A guesses; C describes,
    // A guesses, which ends the game.
    play_turn(&mut engine, TurnOutcome::CorrectGuess { guesser: 2 });
    play_turn(&mut engine, TurnOutcome::CorrectGuess { guesser: 0 });
    let advance = {
        engine.confirm_player().unwrap();
        engine.open_correct_award().unwrap();
        engine
            .resolve_outcome(TurnOutcome::CorrectGuess { guesser: 0 })
            .unwrap()
    };

    let TurnAdvance::Finished(summary) = advance else {
        panic!("expected completion");
    };
    assert_eq!(summary.points, vec![2, 0, 2]);
}

#[test]
fn test_timeout_does_not_advance_turn_or_round() {
    let mut engine = create_engine(&["A", "B"], 2);
    let reveal = engine.confirm_player().unwrap();

    for _ in 0..59 {
        let outcome = engine.tick(reveal.timer);
        assert!(matches!(outcome, TickOutcome::Clock { .. }));
    }
    let outcome = engine.tick(reveal.timer);
    assert!(
        matches!(outcome, TickOutcome::Expired(_)),
        "expiry fires exactly once, at zero"
    );
    assert_eq!(engine.current_player(), 0);
    assert_eq!(engine.current_round(), 0);
    assert_eq!(engine.points(), &[0, 0]);
    assert_eq!(engine.stage(), TurnStage::Reveal);
}

#[test]
fn test_theme_never_repeats_within_pool_window() {
    // 6 word pool, plenty of turns: collect consecutive themes and check
    // every aligned window covers the pool before any repeat.
    let mut engine = party_core::RoundEngine::new(create_options(&["A", "B"], 9), create_deck(6, 3))
        .unwrap();

    let mut themes = Vec::new();
    for _ in 0..18 {
        let reveal = engine.confirm_player().unwrap();
        themes.push(reveal.theme.clone());
        engine.open_no_guess().unwrap();
        engine.resolve_outcome(TurnOutcome::NoCorrectGuess).unwrap();
    }

    for window in themes.chunks(6) {
        let unique: std::collections::HashSet<&String> = window.iter().collect();
        assert_eq!(unique.len(), window.len(), "repeat inside {:?}", window);
    }
}

#[test]
fn test_summary_feeds_competition_ranking() {
    let mut engine = create_engine(&["A", "B", "C"], 1);

    // B guesses for A, B guesses for C, nobody guesses for B's own turn.
    play_turn(&mut engine, TurnOutcome::CorrectGuess { guesser: 1 });
    play_turn(&mut engine, TurnOutcome::NoCorrectGuess);
    engine.confirm_player().unwrap();
    engine.open_correct_award().unwrap();
    let advance = engine
        .resolve_outcome(TurnOutcome::CorrectGuess { guesser: 1 })
        .unwrap();

    let TurnAdvance::Finished(summary) = advance else {
        panic!("expected completion");
    };
    assert_eq!(summary.points, vec![0, 2, 0]);

    let groups = RankingComputer::compute(&summary.players, &summary.points);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].rank, 1);
    assert_eq!(groups[0].players[0].name, "B");
    assert_eq!(groups[1].rank, 2);
    assert_eq!(groups[1].players.len(), 2);
}

#[test]
fn test_stale_ticks_from_replaced_runs_are_ignored() {
    let mut engine = create_engine(&["A", "B"], 1);
    let first = engine.confirm_player().unwrap();
    let second = engine.redraw_theme().unwrap();

    // The aborted first run keeps sending; nothing moves.
    assert!(matches!(engine.tick(first.timer), TickOutcome::Stale));
    assert_eq!(engine.remaining_seconds(), Some(second.seconds));

    assert!(matches!(
        engine.tick(second.timer),
        TickOutcome::Clock { remaining } if remaining == second.seconds - 1
    ));
}

#[test]
fn test_manual_redraw_keeps_turn_state() {
    let mut engine = create_engine(&["A", "B"], 1);
    let first = engine.confirm_player().unwrap();
    let second = engine.redraw_theme().unwrap();

    assert_ne!(first.timer, second.timer);
    assert_eq!(engine.current_player(), 0);
    assert_eq!(engine.current_round(), 0);
    assert_eq!(engine.points(), &[0, 0]);
    assert_eq!(engine.current_theme(), Some(second.theme.as_str()));
}
