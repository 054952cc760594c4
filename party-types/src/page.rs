use serde::{Deserialize, Serialize};

use crate::{GameOptions, RoundSummary};

/// The four top-level screens of the app shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageKind {
    MainMenu,
    Setting,
    Theme,
    Result,
}

impl PageKind {
    pub fn index(self) -> usize {
        match self {
            PageKind::MainMenu => 0,
            PageKind::Setting => 1,
            PageKind::Theme => 2,
            PageKind::Result => 3,
        }
    }
}

/// Payload carried by a page transition. The shape differs per edge:
/// MainMenu -> Setting is empty, Setting -> Theme carries the game options,
/// Theme -> Result carries the frozen score snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PagePayload {
    Empty,
    Options(GameOptions),
    Summary(RoundSummary),
}
