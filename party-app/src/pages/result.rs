use anyhow::Result;
use party_core::{GameEvent, GameEventBus, RankingComputer};
use party_types::{PageKind, PagePayload, RoundSummary, UiAction};
use tracing::{debug, warn};

use super::{Page, Route};

/// Final standings screen. The ranking is computed once per activation and
/// not persisted anywhere.
#[derive(Debug, Default)]
pub struct ResultPage {
    summary: Option<RoundSummary>,
}

impl ResultPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue and back share one exit: hand the game options back to the
    /// controller, which routes to the main menu. The menu ignores the
    /// payload.
    fn leave(&self) -> Option<Route> {
        let payload = match &self.summary {
            Some(summary) => PagePayload::Options(summary.options.clone()),
            None => PagePayload::Empty,
        };
        Some(Route::new(PageKind::MainMenu, payload))
    }
}

impl Page for ResultPage {
    fn kind(&self) -> PageKind {
        PageKind::Result
    }

    fn on_shown(&mut self, payload: PagePayload, bus: &mut GameEventBus) {
        let PagePayload::Summary(summary) = payload else {
            warn!("result page shown without a score snapshot");
            return;
        };

        let groups = RankingComputer::compute(&summary.players, &summary.points);
        bus.publish(GameEvent::RankingReady { groups });
        self.summary = Some(summary);
    }

    fn on_hidden(&mut self) {
        self.summary = None;
    }

    fn handle(&mut self, action: UiAction, _bus: &mut GameEventBus) -> Result<Option<Route>> {
        match action {
            UiAction::Continue => Ok(self.leave()),
            other => {
                debug!(?other, "action ignored on result page");
                Ok(None)
            }
        }
    }

    fn on_back(&mut self, _bus: &mut GameEventBus) -> Option<Route> {
        self.leave()
    }
}
