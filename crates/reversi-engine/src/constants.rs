//! Global constants

use crate::types::Score;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 8;

/// Number of cells on the board.
pub const BOARD_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Minimum representable evaluation (certain loss).
pub const SCORE_MIN: Score = -1_000_000_000;

/// Maximum representable evaluation (certain win).
pub const SCORE_MAX: Score = 1_000_000_000;

/// Infinity score for search bounds, strictly outside `SCORE_MIN..=SCORE_MAX`.
pub const SCORE_INF: Score = i32::MAX;

/// Bonus added when one side leads and none of its stones can be flipped.
pub const DECIDED_LEAD_BONUS: Score = 1_000_000;

/// Empty-cell count at or below which search tiers switch to exhaustive search.
pub const FINALE_EMPTIES: u32 = 10;
