use anyhow::{Result, anyhow};
use party_core::{
    GameEvent, GameEventBus, Reveal, RoundEngine, ThemeDeck, TickOutcome, TimerHandle, TurnStage,
    clock_display,
};
use party_types::{PageKind, PagePayload, Player, TurnAdvance, TurnOutcome, UiAction};
use tracing::{debug, warn};

use super::{Page, Route};

/// Hosts the round engine while a game is in progress. The engine only
/// exists between show and hide; leaving the page discards the whole round
/// state, countdown included.
pub struct ThemePage {
    words: Vec<String>,
    engine: Option<RoundEngine>,
}

impl ThemePage {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            engine: None,
        }
    }

    fn candidates(engine: &RoundEngine, indices: &[usize]) -> Vec<(usize, Player)> {
        indices
            .iter()
            .map(|&i| (i, engine.options().players[i].clone()))
            .collect()
    }

    fn emit_reveal(engine: &RoundEngine, reveal: &Reveal, bus: &mut GameEventBus) {
        bus.publish(GameEvent::ThemeRevealed {
            player: engine.current_player_name().clone(),
            theme: reveal.theme.clone(),
            seconds: reveal.seconds,
        });
        let (minutes, seconds) = clock_display(reveal.seconds);
        bus.publish(GameEvent::ClockTick { minutes, seconds });
    }

    fn after_advance(
        engine: &RoundEngine,
        describer: Player,
        advance: TurnAdvance,
        bus: &mut GameEventBus,
    ) -> Option<Route> {
        bus.publish(GameEvent::TurnEnded {
            player: describer,
            points: engine.points().to_vec(),
        });
        match advance {
            TurnAdvance::NextTurn { .. } => {
                bus.publish(GameEvent::ConfirmPrompt {
                    player: engine.current_player_name().clone(),
                });
                None
            }
            TurnAdvance::Finished(summary) => {
                bus.publish(GameEvent::GameCompleted {
                    summary: summary.clone(),
                });
                Some(Route::new(PageKind::Result, PagePayload::Summary(summary)))
            }
        }
    }
}

impl Page for ThemePage {
    fn kind(&self) -> PageKind {
        PageKind::Theme
    }

    fn on_shown(&mut self, payload: PagePayload, bus: &mut GameEventBus) {
        let PagePayload::Options(options) = payload else {
            warn!("theme page shown without game options");
            return;
        };

        let deck = match ThemeDeck::new(self.words.clone()) {
            Ok(deck) => deck,
            Err(error) => {
                warn!(%error, "cannot build the theme deck");
                return;
            }
        };

        match RoundEngine::new(options.clone(), deck) {
            Ok(engine) => {
                bus.publish(GameEvent::GameStarted { options });
                bus.publish(GameEvent::ConfirmPrompt {
                    player: engine.current_player_name().clone(),
                });
                self.engine = Some(engine);
            }
            Err(error) => warn!(%error, "refusing to start a game"),
        }
    }

    fn on_hidden(&mut self) {
        // Dropping the engine revokes the countdown with it.
        self.engine = None;
    }

    fn handle(&mut self, action: UiAction, bus: &mut GameEventBus) -> Result<Option<Route>> {
        let Some(engine) = self.engine.as_mut() else {
            warn!("theme page has no running game");
            return Ok(None);
        };

        match action {
            UiAction::ConfirmPlayer => {
                let reveal = engine.confirm_player()?;
                Self::emit_reveal(engine, &reveal, bus);
                Ok(None)
            }
            UiAction::RedrawTheme => {
                let reveal = engine.redraw_theme()?;
                Self::emit_reveal(engine, &reveal, bus);
                Ok(None)
            }
            UiAction::BeginCorrectAward => {
                let indices = engine.open_correct_award()?;
                bus.publish(GameEvent::CorrectGuesserChoices {
                    candidates: Self::candidates(engine, &indices),
                });
                Ok(None)
            }
            UiAction::BeginNoGuess => {
                engine.open_no_guess()?;
                bus.publish(GameEvent::NoGuessPrompt);
                Ok(None)
            }
            UiAction::BeginKatakanaAward => {
                let indices = engine.open_katakana_award()?;
                bus.publish(GameEvent::KatakanaCatcherChoices {
                    candidates: Self::candidates(engine, &indices),
                });
                Ok(None)
            }
            UiAction::PickGuesser { index } => {
                let outcome = match engine.stage() {
                    TurnStage::AwardCorrect => TurnOutcome::CorrectGuess { guesser: index },
                    TurnStage::AwardKatakana => TurnOutcome::KatakanaSlip { catcher: index },
                    other => return Err(anyhow!("no pick list open in stage {:?}", other)),
                };
                let describer = engine.current_player_name().clone();
                let advance = engine.resolve_outcome(outcome)?;
                Ok(Self::after_advance(engine, describer, advance, bus))
            }
            UiAction::ConfirmNoGuess => {
                let describer = engine.current_player_name().clone();
                let advance = engine.resolve_outcome(TurnOutcome::NoCorrectGuess)?;
                Ok(Self::after_advance(engine, describer, advance, bus))
            }
            UiAction::CancelAward => {
                engine.cancel_award()?;
                if let Some(theme) = engine.current_theme() {
                    bus.publish(GameEvent::BackToReveal {
                        player: engine.current_player_name().clone(),
                        theme: theme.to_string(),
                    });
                }
                Ok(None)
            }
            other => {
                debug!(?other, "action ignored on theme page");
                Ok(None)
            }
        }
    }

    /// Back collapses an open award screen to the reveal landing; scores,
    /// turn position and the running clock stay untouched.
    fn on_back(&mut self, bus: &mut GameEventBus) -> Option<Route> {
        if let Some(engine) = self.engine.as_mut() {
            engine.back();
            if let Some(theme) = engine.current_theme() {
                bus.publish(GameEvent::BackToReveal {
                    player: engine.current_player_name().clone(),
                    theme: theme.to_string(),
                });
            }
        }
        None
    }

    fn on_tick(&mut self, handle: TimerHandle, bus: &mut GameEventBus) -> Result<Option<Route>> {
        let Some(engine) = self.engine.as_mut() else {
            return Ok(None);
        };

        match engine.tick(handle) {
            TickOutcome::Stale => {}
            TickOutcome::Clock { remaining } => {
                let (minutes, seconds) = clock_display(remaining);
                bus.publish(GameEvent::ClockTick { minutes, seconds });
            }
            TickOutcome::Expired(reveal) => {
                bus.publish(GameEvent::TimeExpired);
                Self::emit_reveal(engine, &reveal, bus);
            }
        }
        Ok(None)
    }

    fn timer_handle(&self) -> Option<TimerHandle> {
        self.engine.as_ref().and_then(|engine| engine.timer_handle())
    }
}
