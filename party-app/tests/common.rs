use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use party_app::controller::GameController;
use party_app::navigation::NavigationGateway;
use party_core::{GameEvent, GameEventHandler};
use party_types::UiAction;

/// Event collector for observing the one-way display channel in tests
#[derive(Clone, Default)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<GameEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    pub fn has_event(&self, check: impl Fn(&GameEvent) -> bool) -> bool {
        self.events.lock().unwrap().iter().any(check)
    }
}

impl GameEventHandler for EventCollector {
    fn handle_event(&mut self, event: GameEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Gateway that counts how often the platform exit was suppressed
#[derive(Clone, Default)]
pub struct CountingGateway {
    suppressed: Arc<AtomicUsize>,
}

impl CountingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn suppress_count(&self) -> usize {
        self.suppressed.load(Ordering::SeqCst)
    }
}

impl NavigationGateway for CountingGateway {
    fn suppress_exit(&mut self) {
        self.suppressed.fetch_add(1, Ordering::SeqCst);
    }
}

/// Small word pool for controller tests
pub fn test_words() -> Vec<String> {
    (0..10).map(|i| format!("theme{}", i)).collect()
}

/// Controller wired with a collector and a counting gateway
pub fn create_controller() -> (GameController, EventCollector, CountingGateway) {
    let collector = EventCollector::new();
    let gateway = CountingGateway::new();
    let mut controller = GameController::new(test_words(), Box::new(gateway.clone()));
    controller.add_handler(Box::new(collector.clone()));
    (controller, collector, gateway)
}

/// Drives the wizard through with defaults: 2 players, 1 minute, 1 round
pub fn start_default_game(controller: &mut GameController) {
    controller.start();
    controller.dispatch(UiAction::StartGame).unwrap();
    controller.dispatch(UiAction::Next).unwrap();
    controller.dispatch(UiAction::Next).unwrap();
}

/// Resolves the current turn with "nobody guessed"
pub fn resolve_turn_nobody(controller: &mut GameController) {
    controller.dispatch(UiAction::ConfirmPlayer).unwrap();
    controller.dispatch(UiAction::BeginNoGuess).unwrap();
    controller.dispatch(UiAction::ConfirmNoGuess).unwrap();
}
