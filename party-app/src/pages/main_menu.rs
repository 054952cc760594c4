use anyhow::Result;
use party_core::GameEventBus;
use party_types::{PageKind, PagePayload, UiAction};
use tracing::debug;

use super::{Page, Route};

/// Title screen. A single start control; a payload handed back from the
/// result page is accepted and ignored.
#[derive(Debug, Default)]
pub struct MainMenuPage;

impl MainMenuPage {
    pub fn new() -> Self {
        Self
    }
}

impl Page for MainMenuPage {
    fn kind(&self) -> PageKind {
        PageKind::MainMenu
    }

    fn on_shown(&mut self, _payload: PagePayload, _bus: &mut GameEventBus) {}

    fn handle(&mut self, action: UiAction, _bus: &mut GameEventBus) -> Result<Option<Route>> {
        match action {
            UiAction::StartGame => Ok(Some(Route::empty(PageKind::Setting))),
            other => {
                debug!(?other, "action ignored on main menu");
                Ok(None)
            }
        }
    }
}
