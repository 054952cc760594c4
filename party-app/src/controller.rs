use anyhow::Result;
use party_core::{GameEvent, GameEventBus, GameEventHandler, TimerHandle};
use party_types::{PageKind, PagePayload, UiAction};
use tracing::{debug, warn};

use crate::navigation::NavigationGateway;
use crate::pages::{MainMenuPage, Page, ResultPage, Route, SettingPage, ThemePage};

/// Top-level state machine: owns the four pages, mediates every transition
/// and absorbs the platform back signal so the shell is never actually
/// left.
pub struct GameController {
    pages: Vec<Box<dyn Page>>,
    active: Option<PageKind>,
    bus: GameEventBus,
    gateway: Box<dyn NavigationGateway>,
}

impl GameController {
    /// Build the app shell over a loaded word pool. Pages are indexed by
    /// `PageKind`, in declaration order.
    pub fn new(words: Vec<String>, gateway: Box<dyn NavigationGateway>) -> Self {
        let pages: Vec<Box<dyn Page>> = vec![
            Box::new(MainMenuPage::new()),
            Box::new(SettingPage::new()),
            Box::new(ThemePage::new(words)),
            Box::new(ResultPage::new()),
        ];
        debug_assert!(
            pages
                .iter()
                .enumerate()
                .all(|(i, page)| page.kind().index() == i)
        );

        Self {
            pages,
            active: None,
            bus: GameEventBus::new(),
            gateway,
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn GameEventHandler>) {
        self.bus.add_handler(handler);
    }

    /// Show the entry screen.
    pub fn start(&mut self) {
        self.switch_to(PageKind::MainMenu, PagePayload::Empty);
    }

    /// Hide the active page, then show `kind` with `payload`. Calling this
    /// with the already-active page simply shows it again.
    pub fn switch_to(&mut self, kind: PageKind, payload: PagePayload) {
        if let Some(current) = self.active {
            self.pages[current.index()].on_hidden();
        }
        self.active = Some(kind);
        self.bus.publish(GameEvent::PageShown { kind });
        self.pages[kind.index()].on_shown(payload, &mut self.bus);
    }

    /// Route a frontend action to the active page and take whatever
    /// transition it requests.
    pub fn dispatch(&mut self, action: UiAction) -> Result<()> {
        let Some(kind) = self.active else {
            warn!(?action, "action dropped, no active page");
            return Ok(());
        };
        let route = self.pages[kind.index()].handle(action, &mut self.bus)?;
        self.apply(route);
        Ok(())
    }

    /// Platform back signal: first suppress the actual navigation, then let
    /// the active page decide what back means. No-op when nothing is
    /// active.
    pub fn handle_back(&mut self) {
        self.gateway.suppress_exit();
        let Some(kind) = self.active else {
            return;
        };
        let route = self.pages[kind.index()].on_back(&mut self.bus);
        self.apply(route);
    }

    /// Deliver one countdown second to the active page.
    pub fn handle_tick(&mut self, handle: TimerHandle) -> Result<()> {
        let Some(kind) = self.active else {
            return Ok(());
        };
        let route = self.pages[kind.index()].on_tick(handle, &mut self.bus)?;
        self.apply(route);
        Ok(())
    }

    fn apply(&mut self, route: Option<Route>) {
        if let Some(route) = route {
            debug!(to = ?route.to, "page transition");
            self.switch_to(route.to, route.payload);
        }
    }

    pub fn active_page(&self) -> Option<PageKind> {
        self.active
    }

    /// Countdown run the shell should be driving right now, if any.
    pub fn active_timer(&self) -> Option<TimerHandle> {
        self.active
            .and_then(|kind| self.pages[kind.index()].timer_handle())
    }
}
