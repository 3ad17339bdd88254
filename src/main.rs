use colored::{ColoredString, Colorize};
use log::{error, info, warn};
use std::io::{self, BufRead};
use twenty48::{
    board::Board, direction::Direction, GameCommand, GameSettings, GameUpdate, Session,
};

enum Line {
    Command(GameCommand),
    Quit,
}

fn main() {
    colog::init();

    let mut json = false;
    let mut settings = GameSettings::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--config" => {
                let Some(path) = args.next() else {
                    error!("--config needs a path");
                    return;
                };
                settings = match GameSettings::load(&path) {
                    Ok(settings) => settings,
                    Err(e) => {
                        error!("{}: {}", path, e);
                        return;
                    }
                };
            }
            other => warn!("ignoring unknown argument {}", other),
        }
    }

    let mut session = match Session::new(settings, rand::rng()) {
        Ok(session) => session,
        Err(e) => {
            error!("{}", e);
            return;
        }
    };

    let start = GameUpdate::Played {
        board: *session.game().board(),
        score: 0,
        best_score: session.best_score(),
        events: Vec::new(),
    };
    print_update(&start, json);

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("{}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_line(&line) {
            Ok(Line::Command(command)) => command,
            Ok(Line::Quit) => break,
            Err(reason) => {
                print_update(&GameUpdate::Rejected { reason }, json);
                continue;
            }
        };

        let update = match command {
            GameCommand::Input { direction } => match session.play(direction) {
                Ok(events) => GameUpdate::Played {
                    board: *session.game().board(),
                    score: session.game().score(),
                    best_score: session.best_score(),
                    events,
                },
                Err(e) => GameUpdate::Rejected {
                    reason: e.to_string(),
                },
            },
            GameCommand::Restart => {
                session.restart();
                GameUpdate::Played {
                    board: *session.game().board(),
                    score: 0,
                    best_score: session.best_score(),
                    events: Vec::new(),
                }
            }
        };
        print_update(&update, json);
    }

    info!("best score {}", session.best_score());
}

fn parse_line(line: &str) -> Result<Line, String> {
    let line = line.trim();
    if line.starts_with('{') || line.starts_with('"') {
        return serde_json::from_str(line)
            .map(Line::Command)
            .map_err(|e| format!("invalid command: {}", e));
    }

    match line.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Ok(Line::Quit),
        "n" | "new" | "restart" => Ok(Line::Command(GameCommand::Restart)),
        other => other
            .parse::<Direction>()
            .map(|direction| Line::Command(GameCommand::Input { direction }))
            .map_err(|e| e.to_string()),
    }
}

fn print_update(update: &GameUpdate, json: bool) {
    if json {
        match serde_json::to_string(update) {
            Ok(text) => println!("{}", text),
            Err(e) => error!("{}", e),
        }
        return;
    }

    match update {
        GameUpdate::Played {
            board,
            score,
            best_score,
            events,
        } => {
            for event in events {
                info!("{:?}", event);
            }
            println!("score {}  best {}", score, best_score);
            print_board(board);
        }
        GameUpdate::Rejected { reason } => warn!("{}", reason),
    }
}

fn print_board(board: &Board) {
    for row in board.rows() {
        let line: Vec<String> = row.iter().map(|&value| tile(value).to_string()).collect();
        println!("{}", line.join(" "));
    }
}

fn tile(value: u32) -> ColoredString {
    if value == 0 {
        return format!("{:^6}", ".").as_str().dimmed();
    }

    let text = format!("{:^6}", value);
    let text = text.as_str();
    match value {
        2 | 4 => text.white(),
        8 | 16 => text.yellow(),
        32 | 64 => text.red(),
        128 | 256 => text.magenta(),
        512 | 1024 => text.cyan(),
        _ => text.green().bold(),
    }
}
