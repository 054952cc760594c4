use serde::{Deserialize, Serialize};

/// Input vocabulary the frontend feeds into the controller. Each variant
/// corresponds to a control on one of the pages; actions that do not belong
/// to the active page are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiAction {
    // main menu
    StartGame,

    // setting wizard
    AdjustPlayerCount { delta: i32 },
    SetPlayerName { index: usize, name: String },
    AdjustMinutes { delta: i32 },
    AdjustRounds { delta: i32 },
    /// Advance the wizard: step 0 -> step 1, step 1 -> start the game.
    Next,

    // theme page
    /// "Yes, I am <name>" on the hand-over confirmation screen.
    ConfirmPlayer,
    /// Swap the current theme for a fresh one, same player, clock restarts.
    RedrawTheme,
    BeginCorrectAward,
    BeginNoGuess,
    BeginKatakanaAward,
    PickGuesser { index: usize },
    ConfirmNoGuess,
    CancelAward,

    // result page
    Continue,
}
