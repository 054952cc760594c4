use anyhow::Result;
use party_core::{GameEvent, GameEventBus};
use party_types::{GameOptions, PageKind, PagePayload, Player, UiAction};
use tracing::debug;

use super::{Page, Route};

pub const MIN_PLAYERS: usize = 2;
pub const MIN_MINUTES: u32 = 1;
pub const MIN_ROUNDS: u32 = 1;

/// Two-step settings wizard: step 0 collects the player count and names,
/// step 1 the timer length and round count. Steppers clamp at their
/// minimums and have no upper bound. Entered values survive leaving the
/// page, matching the original form behavior.
pub struct SettingPage {
    step: u8,
    /// Raw field contents; blanks resolve to placeholders only at
    /// submission time.
    name_entries: Vec<String>,
    round_minutes: u32,
    total_rounds: u32,
}

impl SettingPage {
    pub fn new() -> Self {
        Self {
            step: 0,
            name_entries: vec![String::new(); MIN_PLAYERS],
            round_minutes: MIN_MINUTES,
            total_rounds: MIN_ROUNDS,
        }
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn player_count(&self) -> usize {
        self.name_entries.len()
    }

    pub fn round_minutes(&self) -> u32 {
        self.round_minutes
    }

    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    fn adjust_player_count(&mut self, delta: i32, bus: &mut GameEventBus) {
        let next = self.name_entries.len() as i64 + delta as i64;
        if next < MIN_PLAYERS as i64 {
            return;
        }
        // Growing adds blank fields; shrinking drops trailing ones. Earlier
        // entries are preserved either way.
        self.name_entries.resize(next as usize, String::new());
        bus.publish(GameEvent::PlayerCountChanged {
            count: self.name_entries.len(),
        });
    }

    fn adjust_minutes(&mut self, delta: i32, bus: &mut GameEventBus) {
        let next = self.round_minutes as i64 + delta as i64;
        if next < MIN_MINUTES as i64 {
            return;
        }
        self.round_minutes = next as u32;
        bus.publish(GameEvent::MinutesChanged {
            minutes: self.round_minutes,
        });
    }

    fn adjust_rounds(&mut self, delta: i32, bus: &mut GameEventBus) {
        let next = self.total_rounds as i64 + delta as i64;
        if next < MIN_ROUNDS as i64 {
            return;
        }
        self.total_rounds = next as u32;
        bus.publish(GameEvent::RoundsChanged {
            rounds: self.total_rounds,
        });
    }

    /// Resolve the name fields as they stand right now; blanks become
    /// "Player N".
    fn resolve_players(&self) -> Vec<Player> {
        self.name_entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let trimmed = entry.trim();
                if trimmed.is_empty() {
                    Player::placeholder(i)
                } else {
                    Player::new(trimmed)
                }
            })
            .collect()
    }

    fn publish_state(&self, bus: &mut GameEventBus) {
        bus.publish(GameEvent::WizardStepChanged { step: self.step });
        bus.publish(GameEvent::PlayerCountChanged {
            count: self.name_entries.len(),
        });
        bus.publish(GameEvent::MinutesChanged {
            minutes: self.round_minutes,
        });
        bus.publish(GameEvent::RoundsChanged {
            rounds: self.total_rounds,
        });
    }
}

impl Default for SettingPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for SettingPage {
    fn kind(&self) -> PageKind {
        PageKind::Setting
    }

    fn on_shown(&mut self, _payload: PagePayload, bus: &mut GameEventBus) {
        self.publish_state(bus);
    }

    fn handle(&mut self, action: UiAction, bus: &mut GameEventBus) -> Result<Option<Route>> {
        match (self.step, action) {
            (0, UiAction::AdjustPlayerCount { delta }) => {
                self.adjust_player_count(delta, bus);
                Ok(None)
            }
            (0, UiAction::SetPlayerName { index, name }) => {
                if let Some(entry) = self.name_entries.get_mut(index) {
                    *entry = name;
                }
                Ok(None)
            }
            (0, UiAction::Next) => {
                self.step = 1;
                bus.publish(GameEvent::WizardStepChanged { step: 1 });
                Ok(None)
            }
            (1, UiAction::AdjustMinutes { delta }) => {
                self.adjust_minutes(delta, bus);
                Ok(None)
            }
            (1, UiAction::AdjustRounds { delta }) => {
                self.adjust_rounds(delta, bus);
                Ok(None)
            }
            (1, UiAction::Next) => {
                let options = GameOptions {
                    players: self.resolve_players(),
                    round_minutes: self.round_minutes,
                    total_rounds: self.total_rounds,
                };
                Ok(Some(Route::new(
                    PageKind::Theme,
                    PagePayload::Options(options),
                )))
            }
            (_, other) => {
                debug!(?other, step = self.step, "action ignored on setting page");
                Ok(None)
            }
        }
    }

    /// Back rewinds the wizard to step 0; it never leaves the page.
    fn on_back(&mut self, bus: &mut GameEventBus) -> Option<Route> {
        self.step = 0;
        bus.publish(GameEvent::WizardStepChanged { step: 0 });
        None
    }
}
