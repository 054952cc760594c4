use std::time::Duration;

use party_core::TimerHandle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{debug, warn};

use crate::console::{self, ConsoleCommand};
use crate::controller::GameController;

/// Everything that can wake the single game loop.
#[derive(Debug)]
pub enum LoopEvent {
    /// A raw input line from the frontend.
    Input(String),
    /// The platform back signal.
    Back,
    /// One second from the countdown driver, tagged with its run.
    Tick(TimerHandle),
}

/// Owns the spawned countdown task. The previous task is always aborted
/// before a replacement is spawned; a late tick from an aborted task still
/// carries the revoked handle and the engine discards it as stale.
#[derive(Default)]
pub struct TurnTicker {
    task: Option<JoinHandle<()>>,
    driving: Option<TimerHandle>,
}

impl TurnTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile the spawned task with the countdown the game wants driven.
    pub fn sync(&mut self, wanted: Option<TimerHandle>, tx: &mpsc::Sender<LoopEvent>) {
        if wanted == self.driving {
            return;
        }

        self.cancel();
        if let Some(handle) = wanted {
            let tx = tx.clone();
            self.task = Some(tokio::spawn(async move {
                let mut ticker = interval(Duration::from_secs(1));
                // The first interval tick completes immediately; skip it so
                // the first delivered second is a real second.
                ticker.tick().await;
                loop {
                    ticker.tick().await;
                    if tx.send(LoopEvent::Tick(handle)).await.is_err() {
                        break;
                    }
                }
            }));
            self.driving = Some(handle);
        }
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.driving = None;
    }
}

/// Single cooperative loop: frontend lines, back signals and countdown
/// ticks arrive on one channel and are handled strictly in arrival order.
pub async fn run(
    mut controller: GameController,
    mut rx: mpsc::Receiver<LoopEvent>,
    tx: mpsc::Sender<LoopEvent>,
) {
    let mut ticker = TurnTicker::new();
    controller.start();
    ticker.sync(controller.active_timer(), &tx);

    while let Some(event) = rx.recv().await {
        match event {
            LoopEvent::Input(line) => match console::parse_command(&line) {
                Some(ConsoleCommand::Action(action)) => {
                    if let Err(error) = controller.dispatch(action) {
                        warn!(%error, "action rejected");
                    }
                }
                Some(ConsoleCommand::Back) => controller.handle_back(),
                Some(ConsoleCommand::Quit) => break,
                None => debug!(line = %line, "unrecognized input"),
            },
            LoopEvent::Back => controller.handle_back(),
            LoopEvent::Tick(handle) => {
                if let Err(error) = controller.handle_tick(handle) {
                    warn!(%error, "tick rejected");
                }
            }
        }
        ticker.sync(controller.active_timer(), &tx);
    }

    ticker.cancel();
}
