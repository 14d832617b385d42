use std::fmt;
use std::str::FromStr;

use crate::square::{Square, SquareError};

/// A move: place a stone on a square, or pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decision {
    Place(Square),
    Pass,
}

impl Decision {
    /// Creates a placement at column `x`, row `y`.
    pub const fn place(x: usize, y: usize) -> Decision {
        Decision::Place(Square::new(x, y))
    }

    #[inline]
    pub fn is_pass(self) -> bool {
        self == Decision::Pass
    }

    /// The target square, `None` for a pass.
    #[inline]
    pub fn square(self) -> Option<Square> {
        match self {
            Decision::Place(sq) => Some(sq),
            Decision::Pass => None,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Place(sq) => write!(f, "{sq}"),
            Decision::Pass => f.write_str("pass"),
        }
    }
}

impl FromStr for Decision {
    type Err = SquareError;

    /// Parses `"pass"` (any case) or an algebraic square such as `"d3"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("pass") {
            return Ok(Decision::Pass);
        }
        s.parse().map(Decision::Place)
    }
}
