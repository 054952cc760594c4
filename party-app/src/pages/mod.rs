mod main_menu;
mod result;
mod setting;
mod theme;

pub use main_menu::MainMenuPage;
pub use result::ResultPage;
pub use setting::SettingPage;
pub use theme::ThemePage;

use anyhow::Result;
use party_core::{GameEventBus, TimerHandle};
use party_types::{PageKind, PagePayload, UiAction};

/// A transition requested by a page; the controller executes it.
#[derive(Debug, Clone)]
pub struct Route {
    pub to: PageKind,
    pub payload: PagePayload,
}

impl Route {
    pub fn new(to: PageKind, payload: PagePayload) -> Self {
        Self { to, payload }
    }

    pub fn empty(to: PageKind) -> Self {
        Self::new(to, PagePayload::Empty)
    }
}

/// One visual state of the app. Variants own their sub-state; the
/// controller owns visibility and performs the transitions pages request.
pub trait Page {
    fn kind(&self) -> PageKind;

    /// The page became visible with a transition payload.
    fn on_shown(&mut self, payload: PagePayload, bus: &mut GameEventBus);

    /// The page was hidden; per-visit state is dropped here.
    fn on_hidden(&mut self) {}

    /// A frontend action reached the page. Actions that belong to another
    /// page are ignored.
    fn handle(&mut self, action: UiAction, bus: &mut GameEventBus) -> Result<Option<Route>>;

    /// The platform back signal, already intercepted by the controller.
    /// Default: back means nothing here.
    fn on_back(&mut self, bus: &mut GameEventBus) -> Option<Route> {
        let _ = bus;
        None
    }

    /// One countdown second. Only the theme page cares.
    fn on_tick(&mut self, handle: TimerHandle, bus: &mut GameEventBus) -> Result<Option<Route>> {
        let _ = (handle, bus);
        Ok(None)
    }

    /// Handle of the countdown run the page wants driven, if any.
    fn timer_handle(&self) -> Option<TimerHandle> {
        None
    }
}
