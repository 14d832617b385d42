//! Static position evaluation.
//!
//! Every occupied cell contributes a positional weight chosen by the
//! [`Confidence`] of its stone: the same corner is worth a lot once it is
//! definite and little while it may still be flipped. A side that leads on
//! material with no flippable stone of its own receives a decisive bonus so
//! that search steers toward settled positions without reading them out.

use crate::board::Board;
use crate::constants::{BOARD_SIZE, DECIDED_LEAD_BONUS, SCORE_MAX, SCORE_MIN};
use crate::square::Square;
use crate::stability::Confidence;
use crate::stone::Stone;
use crate::types::Score;

/// An 8x8 weight table indexed `[y][x]`.
pub type WeightTable = [[Score; BOARD_SIZE]; BOARD_SIZE];

/// Weights for stones that may be flipped next move.
#[rustfmt::skip]
pub static UNCERTAIN_WEIGHTS: WeightTable = [
    [   0, -798, -10, -546, -546, -10, -798,    0],
    [-798, -501, -40, -150, -150, -40, -501, -798],
    [ -10,  -40,  26,   49,   49,  26,  -40,  -10],
    [-546, -150,  49,  -50,  -50,  49, -150, -546],
    [-546, -150,  49,  -50,  -50,  49, -150, -546],
    [ -10,  -40,  26,   49,   49,  26,  -40,  -10],
    [-798, -501, -40, -150, -150, -40, -501, -798],
    [   0, -798, -10, -546, -546, -10, -798,    0],
];

/// Weights for stones that are safe for now.
#[rustfmt::skip]
pub static INTERIM_WEIGHTS: WeightTable = [
    [   0, -532, -224, -111, -111, -224, -532,    0],
    [-532, -494,  -32, -156, -156,  -32, -494, -532],
    [-224,  -32,   27,   49,   49,   27,  -32, -224],
    [-111, -156,   49,   22,   22,   49, -156, -111],
    [-111, -156,   49,   22,   22,   49, -156, -111],
    [-224,  -32,   27,   49,   49,   27,  -32, -224],
    [-532, -494,  -32, -156, -156,  -32, -494, -532],
    [   0, -532, -224, -111, -111, -224, -532,    0],
];

/// Weights for stones that can never be flipped.
#[rustfmt::skip]
pub static DEFINITE_WEIGHTS: WeightTable = [
    [2500, 767, 607, 642, 642, 607, 767, 2500],
    [ 767, 344, 284, 103, 103, 284, 344,  767],
    [ 607, 284, 114, 182, 182, 114, 284,  607],
    [ 642, 103, 182, 202, 202, 182, 103,  642],
    [ 642, 103, 182, 202, 202, 182, 103,  642],
    [ 607, 284, 114, 182, 182, 114, 284,  607],
    [ 767, 344, 284, 103, 103, 284, 344,  767],
    [2500, 767, 607, 642, 642, 607, 767, 2500],
];

/// Confidence-weighted positional evaluator.
///
/// Stateless apart from its tables, so it is `Copy` and shared freely between
/// search nodes.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    uncertain: &'static WeightTable,
    interim: &'static WeightTable,
    definite: &'static WeightTable,
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::with_tables(&UNCERTAIN_WEIGHTS, &INTERIM_WEIGHTS, &DEFINITE_WEIGHTS)
    }
}

impl Evaluator {
    pub fn new() -> Evaluator {
        Default::default()
    }

    /// Creates an evaluator with custom weight tables.
    pub fn with_tables(
        uncertain: &'static WeightTable,
        interim: &'static WeightTable,
        definite: &'static WeightTable,
    ) -> Evaluator {
        Evaluator {
            uncertain,
            interim,
            definite,
        }
    }

    /// Weight of a stone on `sq` with the given confidence.
    #[inline]
    fn weight(&self, sq: Square, confidence: Confidence) -> Score {
        let table = match confidence {
            Confidence::Unset => return 0,
            Confidence::Uncertain => self.uncertain,
            Confidence::Interim => self.interim,
            Confidence::Definite => self.definite,
        };
        table[sq.y()][sq.x()]
    }

    /// Evaluates `board` from the perspective of `color`.
    ///
    /// In finale mode the score is simply the number of `color` stones.
    /// Otherwise a wiped-out `color` scores [`SCORE_MIN`], a wiped-out opponent
    /// [`SCORE_MAX`], and any other position the signed weight sum plus the
    /// decided-lead bonus or penalty.
    ///
    /// # Panics
    ///
    /// Panics if `color` is `Stone::None`.
    pub fn evaluate(&self, board: &Board, color: Stone, finale_mode: bool) -> Score {
        assert!(color.is_color(), "cannot evaluate for an empty color");

        if finale_mode {
            return board.count_stone(color) as Score;
        }
        if !board.has_stone(color) {
            return SCORE_MIN;
        }
        let opponent = color.opposite();
        if !board.has_stone(opponent) {
            return SCORE_MAX;
        }

        let mut score = 0;
        let (mut own_count, mut opp_count) = (0u32, 0u32);
        let (mut own_uncertain, mut opp_uncertain) = (false, false);

        for sq in Square::iter() {
            let stone = board.at(sq);
            if !stone.is_color() {
                continue;
            }
            let confidence = board.judge_reliability(sq.x(), sq.y());
            let weight = self.weight(sq, confidence);
            if stone == color {
                own_count += 1;
                own_uncertain |= confidence == Confidence::Uncertain;
                score += weight;
            } else {
                opp_count += 1;
                opp_uncertain |= confidence == Confidence::Uncertain;
                score -= weight;
            }
        }

        if own_count > opp_count && !own_uncertain {
            score + DECIDED_LEAD_BONUS
        } else if own_count < opp_count && !opp_uncertain {
            score - DECIDED_LEAD_BONUS
        } else {
            score
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn test_tables_are_symmetric() {
        for table in [&UNCERTAIN_WEIGHTS, &INTERIM_WEIGHTS, &DEFINITE_WEIGHTS] {
            for y in 0..BOARD_SIZE {
                for x in 0..BOARD_SIZE {
                    assert_eq!(table[y][x], table[x][y]);
                    assert_eq!(table[y][x], table[BOARD_SIZE - 1 - y][x]);
                    assert_eq!(table[y][x], table[y][BOARD_SIZE - 1 - x]);
                }
            }
        }
    }

    #[test]
    fn test_start_position_is_balanced() {
        let eval = Evaluator::new();
        let board = Board::new();
        assert_eq!(eval.evaluate(&board, Stone::Dark, false), 0);
        assert_eq!(eval.evaluate(&board, Stone::Light, false), 0);
    }

    #[test]
    fn test_finale_mode_counts_stones() {
        let eval = Evaluator::new();
        let mut board = Board::new();
        board.locate(3, 2, Stone::Dark);
        assert_eq!(eval.evaluate(&board, Stone::Dark, true), 4);
        assert_eq!(eval.evaluate(&board, Stone::Light, true), 1);
    }

    #[test]
    fn test_wiped_out_sides() {
        let eval = Evaluator::new();
        let only_dark = board(&format!("X{}", "-".repeat(63)));
        assert_eq!(eval.evaluate(&only_dark, Stone::Light, false), SCORE_MIN);
        assert_eq!(eval.evaluate(&only_dark, Stone::Dark, false), SCORE_MAX);
    }

    #[test]
    fn test_settled_lead_gets_bonus() {
        // Dark owns a full top edge of definite stones; light has one
        // flippable stone below it.
        let b = board(
            "XXXXXXXX
             -O------
             --------
             --------
             --------
             --------
             --------
             --------",
        );
        let eval = Evaluator::new();
        let dark = eval.evaluate(&b, Stone::Dark, false);
        let light = eval.evaluate(&b, Stone::Light, false);
        assert!(dark > DECIDED_LEAD_BONUS / 2);
        assert!(light < -DECIDED_LEAD_BONUS / 2);
        assert_eq!(dark, -light);
    }

    #[test]
    fn test_unsettled_lead_gets_no_bonus() {
        // Dark leads 3 to 1 but light e1 would flip c1 and d1.
        let b = board(
            "-OXX----
             --X-----
             --------
             --------
             --------
             --------
             --------
             --------",
        );
        let eval = Evaluator::new();
        let score = eval.evaluate(&b, Stone::Dark, false);
        assert!(score.abs() < DECIDED_LEAD_BONUS / 2);
    }

    #[test]
    #[should_panic(expected = "cannot evaluate for an empty color")]
    fn test_empty_color_panics() {
        Evaluator::new().evaluate(&Board::new(), Stone::None, false);
    }
}
