use anyhow::{Result, anyhow};
use party_types::{GameOptions, Player, RoundSummary, TurnAdvance, TurnOutcome};
use tracing::debug;

use crate::countdown::{Countdown, Tick, TimerHandle};
use crate::theme_deck::ThemeDeck;

/// Where the current turn is within its confirm/reveal/score cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStage {
    /// "Are you <name>?", shown before the theme so the wrong player
    /// cannot see the word.
    Confirm,
    /// The describer sees the theme and the clock is running.
    Reveal,
    /// Picking the player who guessed correctly.
    AwardCorrect,
    /// Confirming that nobody guessed.
    AwardNone,
    /// Picking the player who caught a katakana slip.
    AwardKatakana,
}

/// A freshly revealed theme together with the countdown started for it.
#[derive(Debug, Clone)]
pub struct Reveal {
    pub theme: String,
    pub timer: TimerHandle,
    pub seconds: u32,
}

/// What a countdown tick did to the round.
#[derive(Debug, Clone)]
pub enum TickOutcome {
    /// Tick from a cancelled or replaced run; ignored.
    Stale,
    Clock { remaining: u32 },
    /// The clock hit zero: the same player gets a fresh theme and a
    /// restarted countdown. The turn does not advance.
    Expired(Reveal),
}

/// Turn-taking state machine for one game: rotates describers, applies
/// score deltas, draws themes without repetition and owns the countdown.
///
/// Created when the theme page is shown and discarded when it is left;
/// nothing here survives a game.
pub struct RoundEngine {
    options: GameOptions,
    deck: ThemeDeck,
    current_player: usize,
    current_round: u32,
    points: Vec<i32>,
    stage: TurnStage,
    current_theme: Option<String>,
    countdown: Countdown,
    finished: bool,
}

impl RoundEngine {
    pub fn new(options: GameOptions, deck: ThemeDeck) -> Result<Self> {
        if options.players.len() < 2 {
            return Err(anyhow!(
                "a game needs at least 2 players, got {}",
                options.players.len()
            ));
        }
        if options.total_rounds < 1 {
            return Err(anyhow!("total rounds must be at least 1"));
        }
        if options.round_minutes < 1 {
            return Err(anyhow!("round timer must be at least 1 minute"));
        }

        let points = vec![0; options.players.len()];
        Ok(Self {
            options,
            deck,
            current_player: 0,
            current_round: 0,
            points,
            stage: TurnStage::Confirm,
            current_theme: None,
            countdown: Countdown::new(),
            finished: false,
        })
    }

    /// The describer confirmed their identity: draw a theme and start the
    /// clock.
    pub fn confirm_player(&mut self) -> Result<Reveal> {
        self.expect_stage(TurnStage::Confirm)?;
        Ok(self.reveal_fresh_theme())
    }

    /// Manually swap the theme for a fresh one. Same player, restarted
    /// clock, no score effect.
    pub fn redraw_theme(&mut self) -> Result<Reveal> {
        self.expect_stage(TurnStage::Reveal)?;
        Ok(self.reveal_fresh_theme())
    }

    fn reveal_fresh_theme(&mut self) -> Reveal {
        let theme = self.deck.draw();
        let seconds = self.options.round_seconds();
        let timer = self.countdown.start(seconds);
        self.current_theme = Some(theme.clone());
        self.stage = TurnStage::Reveal;
        Reveal {
            theme,
            timer,
            seconds,
        }
    }

    /// Open the "who guessed it?" pick list. Returns the pickable indices.
    pub fn open_correct_award(&mut self) -> Result<Vec<usize>> {
        self.expect_stage(TurnStage::Reveal)?;
        self.stage = TurnStage::AwardCorrect;
        Ok(self.guesser_candidates())
    }

    /// Open the "nobody guessed" confirmation.
    pub fn open_no_guess(&mut self) -> Result<()> {
        self.expect_stage(TurnStage::Reveal)?;
        self.stage = TurnStage::AwardNone;
        Ok(())
    }

    /// Open the "who caught the slip?" pick list. Returns the pickable
    /// indices.
    pub fn open_katakana_award(&mut self) -> Result<Vec<usize>> {
        self.expect_stage(TurnStage::Reveal)?;
        self.stage = TurnStage::AwardKatakana;
        Ok(self.guesser_candidates())
    }

    /// Cancel button on any award screen: back to the reveal landing.
    pub fn cancel_award(&mut self) -> Result<()> {
        match self.stage {
            TurnStage::AwardCorrect | TurnStage::AwardNone | TurnStage::AwardKatakana => {
                self.stage = TurnStage::Reveal;
                Ok(())
            }
            _ => Err(anyhow!("no award selection to cancel")),
        }
    }

    /// Everyone except the current describer, in player order.
    pub fn guesser_candidates(&self) -> Vec<usize> {
        (0..self.options.players.len())
            .filter(|&i| i != self.current_player)
            .collect()
    }

    /// Apply the score delta for the chosen outcome and advance the turn.
    /// The outcome must match the open award screen.
    pub fn resolve_outcome(&mut self, outcome: TurnOutcome) -> Result<TurnAdvance> {
        if self.finished {
            return Err(anyhow!("game already completed"));
        }

        match (self.stage, &outcome) {
            (TurnStage::AwardCorrect, TurnOutcome::CorrectGuess { guesser }) => {
                self.check_guesser(*guesser)?;
                self.points[*guesser] += 1;
            }
            (TurnStage::AwardNone, TurnOutcome::NoCorrectGuess) => {}
            (TurnStage::AwardKatakana, TurnOutcome::KatakanaSlip { catcher }) => {
                self.check_guesser(*catcher)?;
                self.points[*catcher] += 1;
                self.points[self.current_player] -= 1;
            }
            _ => {
                return Err(anyhow!(
                    "outcome {:?} does not match stage {:?}",
                    outcome,
                    self.stage
                ));
            }
        }

        Ok(self.advance_turn())
    }

    fn check_guesser(&self, index: usize) -> Result<()> {
        if index >= self.options.players.len() {
            return Err(anyhow!("no player at index {}", index));
        }
        if index == self.current_player {
            return Err(anyhow!("the describer cannot be picked as a guesser"));
        }
        Ok(())
    }

    fn advance_turn(&mut self) -> TurnAdvance {
        self.countdown.cancel();
        self.current_theme = None;
        debug!(points = ?self.points, "turn resolved");

        self.current_player += 1;
        if self.current_player == self.options.players.len() {
            self.current_player = 0;
            self.current_round += 1;
            if self.current_round == self.options.total_rounds {
                self.finished = true;
                debug!(rounds = self.current_round, "game completed");
                return TurnAdvance::Finished(self.summary());
            }
        }

        self.stage = TurnStage::Confirm;
        TurnAdvance::NextTurn {
            player: self.current_player,
        }
    }

    fn summary(&self) -> RoundSummary {
        RoundSummary {
            players: self.options.players.clone(),
            points: self.points.clone(),
            options: self.options.clone(),
        }
    }

    /// Deliver one countdown second. Expiry redraws for the same player and
    /// collapses any open award screen back to the reveal landing.
    pub fn tick(&mut self, handle: TimerHandle) -> TickOutcome {
        match self.countdown.tick(handle) {
            Tick::Stale => TickOutcome::Stale,
            Tick::Running(remaining) => TickOutcome::Clock { remaining },
            Tick::Expired => TickOutcome::Expired(self.reveal_fresh_theme()),
        }
    }

    /// Platform back: collapse an open award screen to the reveal landing.
    /// Scores, turn position and the clock are untouched; back on the
    /// confirm or reveal screen does nothing.
    pub fn back(&mut self) {
        if matches!(
            self.stage,
            TurnStage::AwardCorrect | TurnStage::AwardNone | TurnStage::AwardKatakana
        ) {
            self.stage = TurnStage::Reveal;
        }
    }

    /// Revoke the running countdown, if any. Called when the page hosting
    /// the engine goes away.
    pub fn cancel_countdown(&mut self) {
        self.countdown.cancel();
    }

    fn expect_stage(&self, expected: TurnStage) -> Result<()> {
        if self.finished {
            return Err(anyhow!("game already completed"));
        }
        if self.stage != expected {
            return Err(anyhow!(
                "expected stage {:?}, currently {:?}",
                expected,
                self.stage
            ));
        }
        Ok(())
    }

    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    pub fn current_player(&self) -> usize {
        self.current_player
    }

    pub fn current_player_name(&self) -> &Player {
        &self.options.players[self.current_player]
    }

    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn points(&self) -> &[i32] {
        &self.points
    }

    pub fn stage(&self) -> TurnStage {
        self.stage
    }

    pub fn current_theme(&self) -> Option<&str> {
        self.current_theme.as_deref()
    }

    pub fn timer_handle(&self) -> Option<TimerHandle> {
        self.countdown.handle()
    }

    pub fn remaining_seconds(&self) -> Option<u32> {
        self.countdown.remaining()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
