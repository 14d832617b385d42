//! Stone confidence classification.
//!
//! Each occupied cell is examined along four axes (horizontal, vertical and
//! the two diagonals). For the two halves `a` and `b` of an axis two flags are
//! computed by walking outward from the cell:
//!
//! * `W` (wall): the edge is reached with no empty cell in between.
//! * `S` (opponent): an opposing stone is met before an empty cell or the
//!   edge, stepping only over own stones.
//!
//! | condition                                  | axis result |
//! |--------------------------------------------|-------------|
//! | `W_a && W_b`                               | safe        |
//! | `W_a && !W_b && !S_a`                      | safe        |
//! | `W_b && !W_a && !S_b`                      | safe        |
//! | `S_a && !S_b && !W_b`                      | uncertain   |
//! | `S_b && !S_a && !W_a`                      | uncertain   |
//! | otherwise                                  | interim     |
//!
//! The first uncertain axis decides the result. A cell whose axes are all safe
//! is definite.
//!
//! The judgement only looks at the current occupancy of the four lines. A
//! walled half holding own stones counts as safe even though those stones
//! may later be flipped along another line, which reopens the axis.

use crate::board::{Board, ray};
use crate::square::Square;
use crate::stone::Stone;

/// How permanent an occupied cell is, from least to most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Confidence {
    /// The cell is empty.
    Unset,
    /// The stone may be flipped by the very next move.
    Uncertain,
    /// Not flippable right now but not provably permanent.
    Interim,
    /// Cannot be flipped along any line given the current occupancy.
    Definite,
}

/// One representative direction per axis; the opposite half is its negation.
const AXES: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Outcome of a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Safe,
    Uncertain,
    Interim,
}

/// Classifies the stone on `sq`.
pub(crate) fn judge(board: &Board, sq: Square) -> Confidence {
    let own = board.at(sq);
    if !own.is_color() {
        return Confidence::Unset;
    }

    let mut confidence = Confidence::Definite;
    for (dx, dy) in AXES {
        match classify_axis(board, sq, own, (dx, dy), (-dx, -dy)) {
            Axis::Safe => {}
            Axis::Uncertain => return Confidence::Uncertain,
            Axis::Interim => confidence = Confidence::Interim,
        }
    }
    confidence
}

fn classify_axis(
    board: &Board,
    sq: Square,
    own: Stone,
    a: (isize, isize),
    b: (isize, isize),
) -> Axis {
    let (wall_a, wall_b) = (walled(board, sq, a), walled(board, sq, b));
    let (opp_a, opp_b) = (
        opponent_beyond(board, sq, own, a),
        opponent_beyond(board, sq, own, b),
    );

    if (wall_a && wall_b) || (wall_a && !wall_b && !opp_a) || (wall_b && !wall_a && !opp_b) {
        Axis::Safe
    } else if (opp_a && !opp_b && !wall_b) || (opp_b && !opp_a && !wall_a) {
        Axis::Uncertain
    } else {
        Axis::Interim
    }
}

/// The edge is reached from `sq` in `dir` without crossing an empty cell.
fn walled(board: &Board, sq: Square, dir: (isize, isize)) -> bool {
    ray(sq, dir).all(|s| board.at(s).is_color())
}

/// An opposing stone follows the run of `own` stones next to `sq` in `dir`.
fn opponent_beyond(board: &Board, sq: Square, own: Stone, dir: (isize, isize)) -> bool {
    ray(sq, dir)
        .map(|s| board.at(s))
        .find(|&stone| stone != own)
        .is_some_and(|stone| stone == own.opposite())
}
