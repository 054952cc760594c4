use std::process;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tokio::sync::mpsc;
use tracing::{error, info};

use party_app::config::Config;
use party_app::console::ConsolePresenter;
use party_app::controller::GameController;
use party_app::loader::CorpusLoader;
use party_app::navigation::ConsoleGateway;
use party_app::runtime::{self, LoopEvent};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting katakana-ban shell...");

    let config = Config::new();
    let loader = CorpusLoader::from_config(&config);

    // A corpus failure blocks game start with a visible error instead of
    // hanging on the fetch.
    let words = match loader.load().await {
        Ok(words) => words,
        Err(e) => {
            error!("Failed to load the word corpus: {}", e);
            error!(
                "Set WORD_SOURCES to one or more files or URLs containing corpus JSON \
                 (an array of {{\"words\": [...]}} groups)."
            );
            process::exit(1);
        }
    };

    let mut controller = GameController::new(words, Box::new(ConsoleGateway));
    controller.add_handler(Box::new(ConsolePresenter));

    let (tx, rx) = mpsc::channel(64);

    // Frontend input: stdin lines.
    let input_tx = tx.clone();
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if input_tx.send(LoopEvent::Input(line)).await.is_err() {
                break;
            }
        }
    });

    // Ctrl+C plays the platform back signal; it is intercepted and never
    // exits the shell. Use "quit" to leave.
    let back_tx = tx.clone();
    tokio::spawn(async move {
        loop {
            if signal::ctrl_c().await.is_err() {
                break;
            }
            if back_tx.send(LoopEvent::Back).await.is_err() {
                break;
            }
        }
    });

    runtime::run(controller, rx, tx).await;
    info!("Shell closed.");
}
