use party_types::{GameOptions, PageKind, Player, RankGroup, RoundSummary};

/// One-way notifications from the game to whatever renders it. The display
/// layer only ever consumes these; it is never a source of state.
#[derive(Debug, Clone)]
pub enum GameEvent {
    PageShown {
        kind: PageKind,
    },
    WizardStepChanged {
        step: u8,
    },
    PlayerCountChanged {
        count: usize,
    },
    MinutesChanged {
        minutes: u32,
    },
    RoundsChanged {
        rounds: u32,
    },
    GameStarted {
        options: GameOptions,
    },
    /// "Are you <name>?" hand-over screen before the theme is revealed.
    ConfirmPrompt {
        player: Player,
    },
    ThemeRevealed {
        player: Player,
        theme: String,
        seconds: u32,
    },
    ClockTick {
        minutes: u32,
        seconds: u32,
    },
    TimeExpired,
    /// Pick who guessed the theme; candidates are (index, player) pairs.
    CorrectGuesserChoices {
        candidates: Vec<(usize, Player)>,
    },
    /// Pick who caught the katakana slip.
    KatakanaCatcherChoices {
        candidates: Vec<(usize, Player)>,
    },
    NoGuessPrompt,
    /// An award screen was dismissed; the reveal landing is showing again.
    BackToReveal {
        player: Player,
        theme: String,
    },
    TurnEnded {
        player: Player,
        points: Vec<i32>,
    },
    GameCompleted {
        summary: RoundSummary,
    },
    RankingReady {
        groups: Vec<RankGroup>,
    },
}

/// Event handler trait for rendering or recording game events
pub trait GameEventHandler {
    fn handle_event(&mut self, event: GameEvent);
}

/// Simple event bus for distributing game events
pub struct GameEventBus {
    handlers: Vec<Box<dyn GameEventHandler>>,
}

impl GameEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn GameEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn publish(&mut self, event: GameEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(event.clone());
        }
    }
}

impl Default for GameEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct TestHandler {
        seen: Arc<Mutex<Vec<GameEvent>>>,
    }

    impl GameEventHandler for TestHandler {
        fn handle_event(&mut self, event: GameEvent) {
            self.seen.lock().unwrap().push(event);
        }
    }

    #[test]
    fn test_event_bus_fans_out_to_handlers() {
        let mut bus = GameEventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        bus.add_handler(Box::new(TestHandler { seen: seen.clone() }));

        bus.publish(GameEvent::PageShown {
            kind: PageKind::MainMenu,
        });
        bus.publish(GameEvent::TimeExpired);

        let events = seen.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], GameEvent::PageShown { .. }));
        assert!(matches!(events[1], GameEvent::TimeExpired));
    }
}
