use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use chess_core::chess::config::GameConfig;
use chess_core::core::square::{BoardDims, Square};
use chess_core::game::{Game, GameResult, MoveOutcome};

/// Two-player chess in the terminal.
#[derive(Parser, Debug)]
#[command(name = "play", version)]
struct Args {
    /// JSON game config (board size, side to move first).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Space-separated moves to play instead of reading stdin, e.g. "e2e4 e7e5".
    #[arg(long)]
    moves: Option<String>,

    /// Print board snapshots as JSON instead of diagrams.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };
    let mut game = Game::new(config).context("setting up the board")?;

    match &args.moves {
        Some(script) => {
            for mv in script.split_whitespace() {
                let (from, to) = parse_move(mv, game.config().dims)?;
                let outcome = game.attempt_move(from, to);
                println!("{mv}: {}", describe(outcome));
                if outcome != MoveOutcome::Applied && outcome != MoveOutcome::RejectedSelfCheck {
                    bail!("move {mv} could not be played");
                }
            }
            show(&game, args.json)?;
        }
        None => interactive(&mut game, args.json)?,
    }

    report(&game);
    Ok(())
}

fn interactive(game: &mut Game, json: bool) -> Result<()> {
    print_help();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while game.result() == GameResult::InProgress {
        show(game, json)?;
        let checkers = game.checkers();
        let check = if checkers.is_empty() {
            String::new()
        } else {
            let from: Vec<String> = checkers.iter().map(|s| s.to_string()).collect();
            format!(" (check from {})", from.join(" "))
        };
        print!("{} to move{check} > ", game.current_turn());
        io::stdout().flush().ok();

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let cmd = line.trim();
        if cmd.is_empty() {
            continue;
        }

        match cmd {
            "help" => {
                print_help();
                continue;
            }
            "exit" | "quit" | "q!" => break,
            _ => {}
        }

        if let Some(name) = cmd.strip_prefix("show ") {
            match Square::parse(name, game.config().dims) {
                Ok(sq) => match game.select_square(sq) {
                    Some(moves) => println!(
                        "{sq}: {}",
                        moves.iter().map(|m| m.to_string()).collect::<Vec<_>>().join(" ")
                    ),
                    None => println!("No {} piece on {sq}.", game.current_turn()),
                },
                Err(e) => println!("{e}"),
            }
            continue;
        }

        match parse_move(cmd, game.config().dims) {
            Ok((from, to)) => println!("{}", describe(game.attempt_move(from, to))),
            Err(e) => println!("{e}. Type 'help' for commands."),
        }
    }

    Ok(())
}

/// `e2e4`, `e2 e4` or `e2-e4`.
fn parse_move(text: &str, dims: BoardDims) -> Result<(Square, Square)> {
    let compact: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    let split = compact
        .char_indices()
        .skip(1)
        .find(|(_, c)| c.is_ascii_alphabetic())
        .map(|(i, _)| i)
        .with_context(|| format!("'{text}' is not a move"))?;
    let (a, b) = compact.split_at(split);
    Ok((Square::parse(a, dims)?, Square::parse(b, dims)?))
}

fn describe(outcome: MoveOutcome) -> &'static str {
    match outcome {
        MoveOutcome::Applied => "ok",
        MoveOutcome::RejectedSelfCheck => "illegal: your king would be in check",
        MoveOutcome::NotAPiece => "no piece of yours there",
        MoveOutcome::Unreachable => "that piece cannot go there",
        MoveOutcome::GameOver => "the game is over",
    }
}

fn show(game: &Game, json: bool) -> Result<()> {
    if json {
        let value = serde_json::json!({
            "turn": game.current_turn(),
            "result": game.result(),
            "board": game.snapshot(),
        });
        println!("{}", serde_json::to_string(&value)?);
    } else {
        print!("{}", game.snapshot());
    }
    Ok(())
}

fn report(game: &Game) {
    match game.result() {
        GameResult::Checkmate { winner } => println!("Checkmate. {winner} wins."),
        GameResult::InProgress => println!("Game not finished."),
    }
}

fn print_help() {
    println!("Moves: e2e4 (or e2 e4). 'show e2' highlights a piece's moves.");
    println!("Commands: help, quit");
}
