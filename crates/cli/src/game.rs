//! Game record for the interactive CLI.
//!
//! Wraps the engine's [`Game`] and adds the last move and colored terminal
//! display.

use colored::Colorize;
use reversi_engine::{Board, Decision, Game, Player, Square, Stone};

/// A game being played at the terminal.
pub struct CliGame {
    core: Game,
    /// Last decision per history entry, for highlighting.
    decisions: Vec<Decision>,
}

impl Default for CliGame {
    fn default() -> Self {
        Self::new()
    }
}

impl CliGame {
    /// Creates a new game in the initial position.
    pub fn new() -> Self {
        Self {
            core: Game::new(),
            decisions: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        self.core.board()
    }

    pub fn side_to_move(&self) -> Stone {
        self.core.next()
    }

    pub fn is_game_over(&self) -> bool {
        self.core.is_over()
    }

    /// Whether the side to move has to pass.
    pub fn must_pass(&self) -> bool {
        !self.is_game_over() && self.core.is_legal(Decision::Pass)
    }

    /// Plays a decision typed by the user.
    pub fn apply(&mut self, decision: Decision) -> reversi_engine::Result<()> {
        self.core.apply(decision)?;
        self.decisions.push(decision);
        Ok(())
    }

    /// Lets `player` move for the side to move.
    pub fn request(&mut self, player: &mut dyn Player) -> reversi_engine::Result<Decision> {
        let decision = self.core.request(player)?;
        self.decisions.push(decision);
        Ok(decision)
    }

    /// Undoes the last move if possible.
    ///
    /// # Returns
    /// `true` if a move was successfully undone, `false` if no moves to undo
    pub fn undo(&mut self) -> bool {
        if self.core.undo() {
            self.decisions.pop();
            true
        } else {
            false
        }
    }

    /// The last placement, `None` after a pass or at the start.
    pub fn last_move(&self) -> Option<Square> {
        self.decisions.last().and_then(|d| d.square())
    }

    /// Returns the disc count for both players as `(dark, light)`.
    pub fn get_score(&self) -> (u32, u32) {
        (self.core.count(Stone::Dark), self.core.count(Stone::Light))
    }

    /// Moves played so far, `pass` included.
    pub fn transcript(&self) -> String {
        self.decisions
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Prints a colored representation of the board to the terminal.
    pub fn print(&self) {
        let board = self.core.board();
        let side_to_move = self.core.next();
        let last_move = self.last_move();
        let game_over = self.is_game_over();

        println!("      a   b   c   d   e   f   g   h");
        println!("    ┌───┬───┬───┬───┬───┬───┬───┬───┐");

        for y in 0..8 {
            print!("  {} │", y + 1);

            for x in 0..8 {
                let sq = Square::new(x, y);
                let is_legal = !game_over && board.is_legal(sq, side_to_move);
                let is_last_move = Some(sq) == last_move;

                let symbol = match board.at(sq) {
                    Stone::Dark if is_last_move => " X ".on_bright_black().bright_green(),
                    Stone::Light if is_last_move => " O ".on_bright_black().bright_yellow(),
                    Stone::Dark => " X ".bright_green(),
                    Stone::Light => " O ".bright_yellow(),
                    Stone::None if is_legal => " · ".bright_cyan(),
                    Stone::None => "   ".black(),
                };
                print!("{symbol}│");
            }

            let (dark_count, light_count) = self.get_score();
            match y {
                2 if !game_over => {
                    let player_info = match side_to_move {
                        Stone::Dark => "Dark's turn (X)".bright_green(),
                        _ => "Light's turn (O)".bright_yellow(),
                    };
                    println!("   {player_info}");
                }
                3 => println!("   Dark:  {}", format!("{dark_count:2}").bright_green()),
                4 => println!("   Light: {}", format!("{light_count:2}").bright_yellow()),
                6 if game_over => match self.core.winner() {
                    Stone::Dark => println!("   {}", "Dark wins!".bright_green()),
                    Stone::Light => println!("   {}", "Light wins!".bright_yellow()),
                    Stone::None => println!("   {}", "Draw".bright_cyan()),
                },
                7 if game_over => println!("   {}", "*** Game Over ***".bright_red()),
                _ => println!(),
            }

            if y < 7 {
                println!("    ├───┼───┼───┼───┼───┼───┼───┼───┤");
            }
        }

        println!("    └───┴───┴───┴───┴───┴───┴───┴───┘");
    }
}
