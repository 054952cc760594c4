use party_core::{GameEvent, GameEventHandler};
use party_types::{PageKind, Player, UiAction};

/// What a parsed input line asks the shell to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Action(UiAction),
    Back,
    Quit,
}

/// Map one input line to a command. Player numbers are 1-based on the
/// console, matching what the presenter prints. Unknown input is `None`.
pub fn parse_command(line: &str) -> Option<ConsoleCommand> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let action = match word {
        "start" => UiAction::StartGame,
        "players" => UiAction::AdjustPlayerCount {
            delta: parse_delta(rest)?,
        },
        "name" => {
            let (index, name) = rest.split_once(char::is_whitespace)?;
            UiAction::SetPlayerName {
                index: index.parse::<usize>().ok()?.checked_sub(1)?,
                name: name.trim().to_string(),
            }
        }
        "time" => UiAction::AdjustMinutes {
            delta: parse_delta(rest)?,
        },
        "rounds" => UiAction::AdjustRounds {
            delta: parse_delta(rest)?,
        },
        "next" => UiAction::Next,
        "yes" => UiAction::ConfirmPlayer,
        "redraw" => UiAction::RedrawTheme,
        "correct" => UiAction::BeginCorrectAward,
        "nobody" => UiAction::BeginNoGuess,
        "katakana" => UiAction::BeginKatakanaAward,
        "pick" => UiAction::PickGuesser {
            index: rest.parse::<usize>().ok()?.checked_sub(1)?,
        },
        "ok" => UiAction::ConfirmNoGuess,
        "cancel" => UiAction::CancelAward,
        "continue" => UiAction::Continue,
        "back" => return Some(ConsoleCommand::Back),
        "quit" | "exit" => return Some(ConsoleCommand::Quit),
        _ => return None,
    };
    Some(ConsoleCommand::Action(action))
}

fn parse_delta(rest: &str) -> Option<i32> {
    match rest {
        "+" | "up" => Some(1),
        "-" | "down" => Some(-1),
        _ => None,
    }
}

/// Prints game events to stdout. Strictly one-way: the game never reads
/// anything back out of the display.
#[derive(Debug, Default)]
pub struct ConsolePresenter;

impl ConsolePresenter {
    fn print_candidates(candidates: &[(usize, Player)]) {
        for (index, player) in candidates {
            println!("  pick {}: {}", index + 1, player.name);
        }
    }
}

impl GameEventHandler for ConsolePresenter {
    fn handle_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::PageShown { kind } => match kind {
                PageKind::MainMenu => {
                    println!();
                    println!("=== Katakana-ban ===");
                    println!("type \"start\" to set up a game");
                }
                PageKind::Setting => println!("--- game setup ---"),
                PageKind::Theme => println!("--- game on ---"),
                PageKind::Result => println!("--- final standings ---"),
            },
            GameEvent::WizardStepChanged { step } => {
                if step == 0 {
                    println!("step 1/2: players  (players +/-, name <n> <name>, next)");
                } else {
                    println!("step 2/2: timer and rounds  (time +/-, rounds +/-, next)");
                }
            }
            GameEvent::PlayerCountChanged { count } => println!("players: {}", count),
            GameEvent::MinutesChanged { minutes } => println!("timer: {} min", minutes),
            GameEvent::RoundsChanged { rounds } => println!("rounds: {}", rounds),
            GameEvent::GameStarted { options } => {
                let names: Vec<&str> =
                    options.players.iter().map(|p| p.name.as_str()).collect();
                println!(
                    "{} rounds, {} min per turn: {}",
                    options.total_rounds,
                    options.round_minutes,
                    names.join(", ")
                );
            }
            GameEvent::ConfirmPrompt { player } => {
                println!("pass the device. are you {}? (yes)", player.name);
            }
            GameEvent::ThemeRevealed {
                player,
                theme,
                seconds,
            } => {
                println!();
                println!("theme: {}", theme);
                println!(
                    "{}, describe it without katakana words! ({}s on the clock)",
                    player.name, seconds
                );
                println!("(correct / nobody / katakana / redraw)");
            }
            GameEvent::ClockTick { minutes, seconds } => {
                println!("  {} : {:02}", minutes, seconds);
            }
            GameEvent::TimeExpired => {
                println!("time's up! drawing a new theme for the same player.");
            }
            GameEvent::CorrectGuesserChoices { candidates } => {
                println!("who guessed it?");
                Self::print_candidates(&candidates);
            }
            GameEvent::KatakanaCatcherChoices { candidates } => {
                println!("who caught the slip?");
                Self::print_candidates(&candidates);
            }
            GameEvent::NoGuessPrompt => {
                println!("nobody guessed. confirm with \"ok\" or \"cancel\"");
            }
            GameEvent::BackToReveal { player, theme } => {
                println!("back to the theme: {} ({} describing)", theme, player.name);
            }
            GameEvent::TurnEnded { player, points } => {
                println!("{}'s turn is over. points: {:?}", player.name, points);
            }
            GameEvent::GameCompleted { .. } => println!("that was the last turn!"),
            GameEvent::RankingReady { groups } => {
                for group in groups {
                    for player in group.players {
                        println!(
                            "  #{}  {}  {} points",
                            group.rank, player.name, group.points
                        );
                    }
                }
                println!("type \"continue\" for the menu");
            }
        }
    }
}
