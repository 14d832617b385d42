//! Search node for Reversi positions.
//!
//! A `GameState` pairs a board with the side the search is computing a move
//! for (the perspective) and the side to move. Transitions copy the board, so
//! a state is never changed by exploring its successors.

use crate::board::Board;
use crate::constants::{BOARD_SIZE, BOARD_SQUARES};
use crate::decision::Decision;
use crate::error::{Result, require_color};
use crate::eval::Evaluator;
use crate::search::SearchState;
use crate::square::Square;
use crate::stone::Stone;
use crate::types::Score;

/// Canonical decision order: each ring's corners first, then its remaining
/// cells paired symmetrically, from the outer ring inward.
static SPIRAL_ORDER: [Square; BOARD_SQUARES] = spiral_order();

const fn spiral_order() -> [Square; BOARD_SQUARES] {
    const HALF: usize = BOARD_SIZE / 2;
    const LAST: usize = BOARD_SIZE - 1;

    let mut order = [Square::TOP_LEFT; BOARD_SQUARES];
    let mut n = 0;
    let mut j = 0;
    while j < HALF {
        let ring = [(j, j), (LAST - j, j), (j, LAST - j), (LAST - j, LAST - j)];
        let mut k = 0;
        while k < ring.len() {
            order[n] = Square::new(ring[k].0, ring[k].1);
            n += 1;
            k += 1;
        }

        let mut i = j + 1;
        while i < HALF {
            let side = [
                (i, j),
                (LAST - i, j),
                (i, LAST - j),
                (LAST - i, LAST - j),
                (j, i),
                (j, LAST - i),
                (LAST - j, i),
                (LAST - j, LAST - i),
            ];
            let mut k = 0;
            while k < side.len() {
                order[n] = Square::new(side[k].0, side[k].1);
                n += 1;
                k += 1;
            }
            i += 1;
        }
        j += 1;
    }
    assert!(n == BOARD_SQUARES);
    order
}

/// A Reversi position seen from one player's side.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    evaluator: Evaluator,
    /// The side the search maximizes for.
    player: Stone,
    /// The side to move.
    next: Stone,
    /// Evaluate by plain stone count instead of positional weights.
    finale_mode: bool,
}

impl GameState {
    /// Creates a search node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyColor`](crate::Error::EmptyColor) if `player` or
    /// `next` is `Stone::None`.
    pub fn new(
        board: &Board,
        evaluator: Evaluator,
        player: Stone,
        next: Stone,
        finale_mode: bool,
    ) -> Result<GameState> {
        Ok(GameState {
            board: *board,
            evaluator,
            player: require_color(player, "player")?,
            next: require_color(next, "next")?,
            finale_mode,
        })
    }

    /// The initial position with dark to move, seen from dark.
    pub fn start(evaluator: Evaluator) -> GameState {
        GameState {
            board: Board::new(),
            evaluator,
            player: Stone::Dark,
            next: Stone::Dark,
            finale_mode: false,
        }
    }

    /// Returns a reference to the board position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side the evaluation is computed for.
    pub fn player(&self) -> Stone {
        self.player
    }

    /// The side to move.
    pub fn next(&self) -> Stone {
        self.next
    }

    pub fn is_finale_mode(&self) -> bool {
        self.finale_mode
    }

    /// Legal decisions for the side to move in canonical spiral order.
    ///
    /// The iterator is lazy and can be recreated at will. When no placement is
    /// legal it yields exactly one [`Decision::Pass`].
    pub fn legal_decisions(&self) -> impl Iterator<Item = Decision> + '_ {
        let mut placements = SPIRAL_ORDER
            .iter()
            .copied()
            .filter(|&sq| self.board.is_legal(sq, self.next))
            .map(Decision::Place)
            .peekable();
        let pass = placements.peek().is_none().then_some(Decision::Pass);
        placements.chain(pass)
    }

    /// Returns the successor state after `decision` by the side to move.
    ///
    /// A pass only hands the move over. Placements are not re-validated.
    pub fn apply(&self, decision: &Decision) -> GameState {
        let mut next = self.clone();
        if let Decision::Place(sq) = *decision {
            next.board.place(sq, self.next);
        }
        next.next = self.next.opposite();
        next
    }

    /// Static evaluation from the perspective side.
    pub fn evaluation(&self) -> Score {
        self.evaluator
            .evaluate(&self.board, self.player, self.finale_mode)
    }

    pub fn is_terminal(&self) -> bool {
        self.board.is_end_game()
    }

    /// Number of cells holding `stone`.
    pub fn count_stone(&self, stone: Stone) -> u32 {
        self.board.count_stone(stone)
    }

    /// Picks the best corner placement available to the side to move.
    ///
    /// Corners are tried in priority order and compared by the evaluation of
    /// the resulting state; the first of equally good corners wins.
    ///
    /// # Returns
    ///
    /// `None` if no corner is legal.
    pub fn next_corner_decision(&self) -> Option<Decision> {
        let mut best: Option<(Decision, Score)> = None;
        for sq in Square::CORNERS {
            if !self.board.is_legal(sq, self.next) {
                continue;
            }
            let decision = Decision::Place(sq);
            let score = self.apply(&decision).evaluation();
            if best.is_none_or(|(_, best_score)| best_score < score) {
                best = Some((decision, score));
            }
        }
        best.map(|(decision, _)| decision)
    }
}

impl SearchState for GameState {
    type Decision = Decision;

    fn legal_decisions(&self) -> impl Iterator<Item = Decision> + '_ {
        GameState::legal_decisions(self)
    }

    fn apply(&self, decision: &Decision) -> Self {
        GameState::apply(self, decision)
    }

    fn evaluation(&self) -> Score {
        GameState::evaluation(self)
    }

    fn is_terminal(&self) -> bool {
        GameState::is_terminal(self)
    }

    fn is_player_turn(&self) -> bool {
        self.next == self.player
    }
}
