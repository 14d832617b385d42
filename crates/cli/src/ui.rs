//! Line-oriented interactive loop.

use anyhow::Result;
use colored::Colorize;
use num_format::{Locale, ToFormattedString};
use reversi_engine::level::{Level, Policy};
use reversi_engine::types::Depth;
use reversi_engine::{Decision, Player, SearchPlayer, Stone, create_player, get_level};
use rustyline::{DefaultEditor, error::ReadlineError};

use crate::Mode;
use crate::game::CliGame;

/// Session settings that survive `new`.
struct Session {
    level: Level,
    mode: Mode,
    seed: Option<u64>,
    dark: Box<dyn Player>,
    light: Box<dyn Player>,
}

impl Session {
    fn new(level: Level, mode: Mode, seed: Option<u64>) -> Result<Self> {
        Ok(Self {
            level,
            mode,
            seed,
            dark: create_player(&level, Stone::Dark, seed)?,
            light: create_player(&level, Stone::Light, seed.map(|s| s.wrapping_add(1)))?,
        })
    }

    fn set_level(&mut self, level: Level) -> Result<()> {
        *self = Session::new(level, self.mode, self.seed)?;
        Ok(())
    }

    fn player(&mut self, color: Stone) -> &mut dyn Player {
        match color {
            Stone::Dark => self.dark.as_mut(),
            _ => self.light.as_mut(),
        }
    }
}

/// Runs the interactive loop until `quit` or end of input.
pub fn ui_loop(level: Level, mode: Mode, seed: Option<u64>) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut game = CliGame::new();
    let mut session = Session::new(level, mode, seed)?;

    loop {
        game.print();
        println!();

        let side = game.side_to_move();
        if session.mode.is_computer(side) && !game.is_game_over() {
            let decision = game.request(session.player(side))?;
            println!("Computer ({side}) plays {}\n", decision.to_string().bold());
            continue;
        }
        if game.must_pass() {
            println!("{}", "No legal move: type `pass`.".bright_red());
        }

        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        let _ = rl.add_history_entry(&line);
        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else {
            continue;
        };
        println!();

        match cmd {
            "new" | "n" => game = CliGame::new(),
            "undo" | "u" => {
                // Take back the computer's reply too so it is the human's turn again.
                if game.undo() {
                    while session.mode.is_computer(game.side_to_move()) && game.undo() {}
                } else {
                    println!("Cannot undo.");
                }
            }
            "level" | "l" => match parts.next() {
                Some(name) => match get_level(name) {
                    Ok(level) => {
                        session.set_level(level)?;
                        println!("Level changed to: {level}");
                    }
                    Err(err) => println!("{err}"),
                },
                None => println!("Current level: {}", session.level),
            },
            "mode" | "m" => match parts.next().map(str::parse::<Mode>) {
                Some(Ok(mode)) => {
                    session.mode = mode;
                    println!("Mode changed to: {mode}");
                }
                Some(Err(err)) => println!("{err}"),
                None => {
                    println!("Current mode: {}", session.mode);
                    Mode::print_help();
                }
            },
            "hint" | "h" => hint(&game, &session.level)?,
            "moves" => println!("{}", game.transcript()),
            "help" | "?" => print_help(),
            "quit" | "q" => break,
            _ => match cmd.parse::<Decision>() {
                Ok(decision) => {
                    if let Err(err) = game.apply(decision) {
                        println!("{err}\n");
                    }
                }
                Err(_) => println!("Unknown command: {cmd}\n"),
            },
        }
    }
    Ok(())
}

/// Shows what the current level would play for the side to move.
fn hint(game: &CliGame, level: &Level) -> Result<()> {
    if game.is_game_over() {
        println!("The game is over.");
        return Ok(());
    }
    let Policy::Search(strategy) = level.policy else {
        println!("Level {level} does not search.");
        return Ok(());
    };
    let player = SearchPlayer::new(game.side_to_move(), strategy, level.finale_empties)?;
    let result = player.think(game.board())?;
    println!("depth | score | nodes ");
    println!("----------------------");
    let depth = if result.depth == Depth::MAX {
        "end".to_string()
    } else {
        result.depth.to_string()
    };
    println!(
        "{depth} | {} | {}\n",
        result.score,
        result.n_nodes.to_formatted_string(&Locale::en)
    );
    println!("Hint: {}\n", result.decision.to_string().bold());
    Ok(())
}

fn print_help() {
    println!("<square>       play a move, e.g. d3");
    println!("pass           pass when no move is legal");
    println!("undo, u        take back the last move");
    println!("new, n         start a new game");
    println!("level, l <lv>  change the computer level");
    println!("mode, m <m>    change who plays which color");
    println!("hint, h        ask the current level for a move");
    println!("moves          print the moves played");
    println!("quit, q        leave");
}
