//! A game in progress with undo history.

use crate::board::Board;
use crate::decision::Decision;
use crate::error::{Error, Result, require_color};
use crate::player::Player;
use crate::stone::Stone;

/// The live record of a game.
///
/// Tracks the board, the color to move and the positions before each applied
/// decision so moves can be taken back. Decisions are validated before they
/// touch anything, so a rejected decision leaves the game as it was.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    next: Stone,
    /// Positions before each applied decision: (board, color to move).
    history: Vec<(Board, Stone)>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game in the initial position with dark to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            next: Stone::Dark,
            history: Vec::new(),
        }
    }

    /// Creates a game from an existing position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyColor`] if `next` is `Stone::None`.
    pub fn from_board(board: Board, next: Stone) -> Result<Self> {
        Ok(Self {
            board,
            next: require_color(next, "next")?,
            history: Vec::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The color to move.
    pub fn next(&self) -> Stone {
        self.next
    }

    /// Number of decisions that can be taken back.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn is_over(&self) -> bool {
        self.board.is_end_game()
    }

    /// Number of cells holding `stone`.
    pub fn count(&self, stone: Stone) -> u32 {
        self.board.count_stone(stone)
    }

    /// The color with more stones, `Stone::None` on a tie.
    pub fn winner(&self) -> Stone {
        let dark = self.count(Stone::Dark);
        let light = self.count(Stone::Light);
        match dark.cmp(&light) {
            std::cmp::Ordering::Greater => Stone::Dark,
            std::cmp::Ordering::Less => Stone::Light,
            std::cmp::Ordering::Equal => Stone::None,
        }
    }

    /// Whether `decision` may be played by the side to move.
    ///
    /// A placement must flip something; a pass is only allowed when no
    /// placement is. Nothing is legal once the game is over.
    pub fn is_legal(&self, decision: Decision) -> bool {
        if self.is_over() {
            return false;
        }
        match decision {
            Decision::Place(sq) => self.board.is_legal(sq, self.next),
            Decision::Pass => !self.board.has_legal_moves(self.next),
        }
    }

    /// Plays `decision` for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalMove`] without changing the game if the
    /// decision is not legal.
    pub fn apply(&mut self, decision: Decision) -> Result<()> {
        if !self.is_legal(decision) {
            return Err(Error::IllegalMove {
                decision,
                color: self.next,
            });
        }
        self.history.push((self.board, self.next));
        if let Decision::Place(sq) = decision {
            self.board.place(sq, self.next);
        }
        self.next = self.next.opposite();
        Ok(())
    }

    /// Asks `player` for its decision and plays it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WrongTurn`] if `player` does not move for the side to
    /// move, and otherwise any error from the player or from [`Game::apply`].
    pub fn request(&mut self, player: &mut dyn Player) -> Result<Decision> {
        if player.color() != self.next {
            return Err(Error::WrongTurn {
                expected: self.next,
                actual: player.color(),
            });
        }
        let decision = player.play(&self.board)?;
        self.apply(decision)?;
        Ok(decision)
    }

    /// Takes back the last decision.
    ///
    /// # Returns
    ///
    /// `true` if a decision was taken back, `false` if the history was empty.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some((board, next)) => {
                self.board = board;
                self.next = next;
                true
            }
            None => false,
        }
    }
}
