use serde::{Deserialize, Serialize};

/// A participant, identified by display name only. Position in the ordered
/// player list is the identity the engine works with; duplicate names are
/// allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Fallback name for a blank entry, 1-based like the input fields.
    pub fn placeholder(index: usize) -> Self {
        Self {
            name: format!("Player {}", index + 1),
        }
    }
}

/// Everything the setting wizard collects. Immutable once handed to the
/// theme page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOptions {
    pub players: Vec<Player>,
    /// Turn timer length, minute granularity.
    pub round_minutes: u32,
    /// A round is one full pass where every player describes once.
    pub total_rounds: u32,
}

impl GameOptions {
    pub fn round_seconds(&self) -> u32 {
        self.round_minutes * 60
    }
}

/// Frozen end-of-game snapshot handed from the theme page to the result
/// page. `points` is parallel to `players`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub players: Vec<Player>,
    pub points: Vec<i32>,
    pub options: GameOptions,
}

/// How a single describe-and-score turn ended. Indices refer to the ordered
/// player list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Someone guessed the theme: that guesser gains a point.
    CorrectGuess { guesser: usize },
    /// Nobody guessed before the describer gave up: no score change.
    NoCorrectGuess,
    /// The describer used a katakana word and loses a point; the player who
    /// caught the slip gains one.
    KatakanaSlip { catcher: usize },
}

/// Result of advancing past a resolved turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnAdvance {
    NextTurn { player: usize },
    Finished(RoundSummary),
}

/// One line of the final standings: every player sharing a score, under a
/// shared competition rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankGroup {
    pub rank: u32,
    pub points: i32,
    pub players: Vec<Player>,
}
