use std::fmt;
use std::str::FromStr;

use crate::constants::{BOARD_SIZE, BOARD_SQUARES};

/// A cell of the board addressed by column `x` and row `y`.
///
/// Columns are labeled `a`-`h` and rows `1`-`8` in algebraic notation, and the
/// cell index runs row-major:
///
/// ```text
///     a  b  c  d  e  f  g  h
/// 1  00 01 02 03 04 05 06 07
/// 2  08 09 10 11 12 13 14 15
/// 3  16 17 18 19 20 21 22 23
/// 4  24 25 26 27 28 29 30 31
/// 5  32 33 34 35 36 37 38 39
/// 6  40 41 42 43 44 45 46 47
/// 7  48 49 50 51 52 53 54 55
/// 8  56 57 58 59 60 61 62 63
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Top-left corner, `a1`.
    pub const TOP_LEFT: Square = Square::new(0, 0);
    /// Bottom-left corner, `a8`.
    pub const BOTTOM_LEFT: Square = Square::new(0, BOARD_SIZE - 1);
    /// Top-right corner, `h1`.
    pub const TOP_RIGHT: Square = Square::new(BOARD_SIZE - 1, 0);
    /// Bottom-right corner, `h8`.
    pub const BOTTOM_RIGHT: Square = Square::new(BOARD_SIZE - 1, BOARD_SIZE - 1);

    /// The four corners in the order simple policies try them.
    pub const CORNERS: [Square; 4] = [
        Square::TOP_LEFT,
        Square::BOTTOM_LEFT,
        Square::TOP_RIGHT,
        Square::BOTTOM_RIGHT,
    ];

    /// Creates a square from column and row.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside the board.
    #[inline]
    pub const fn new(x: usize, y: usize) -> Square {
        assert!(x < BOARD_SIZE && y < BOARD_SIZE, "coordinates out of range");
        Square((y * BOARD_SIZE + x) as u8)
    }

    /// Creates a square from column and row, returning `None` off the board.
    ///
    /// Signed coordinates let direction scans step past an edge and stop there.
    #[inline]
    pub fn checked(x: isize, y: isize) -> Option<Square> {
        let size = BOARD_SIZE as isize;
        if (0..size).contains(&x) && (0..size).contains(&y) {
            Some(Square::new(x as usize, y as usize))
        } else {
            None
        }
    }

    /// Creates a square from a row-major index.
    ///
    /// # Returns
    ///
    /// `Some(Square)` if `index < 64`, `None` otherwise.
    #[inline]
    pub fn from_index(index: usize) -> Option<Square> {
        (index < BOARD_SQUARES).then_some(Square(index as u8))
    }

    /// Row-major index (0-63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Column, 0 for `a` through 7 for `h`.
    #[inline]
    pub const fn x(self) -> usize {
        self.index() % BOARD_SIZE
    }

    /// Row, 0 for `1` through 7 for `8`.
    #[inline]
    pub const fn y(self) -> usize {
        self.index() / BOARD_SIZE
    }

    /// Returns `true` for the four corner cells.
    pub fn is_corner(self) -> bool {
        Square::CORNERS.contains(&self)
    }

    /// Iterates over all 64 squares in index order, `a1` to `h8`.
    #[inline]
    pub fn iter() -> impl Iterator<Item = Square> {
        (0..BOARD_SQUARES as u8).map(Square)
    }
}

/// Error type for square parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Input is not exactly two characters.
    InvalidFormat,
    /// Column character outside `a`-`h`.
    InvalidFile(char),
    /// Row character outside `1`-`8`.
    InvalidRank(char),
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidFormat => write!(
                f,
                "Invalid square format: must be 2 characters (e.g., 'd3')"
            ),
            SquareError::InvalidFile(c) => write!(f, "Invalid file '{c}': must be a-h or A-H"),
            SquareError::InvalidRank(c) => write!(f, "Invalid rank '{c}': must be 1-8"),
        }
    }
}

impl std::error::Error for SquareError {}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SquareError::InvalidFormat);
        };

        let x = match file.to_ascii_lowercase() {
            c @ 'a'..='h' => c as usize - 'a' as usize,
            _ => return Err(SquareError::InvalidFile(file)),
        };
        let y = match rank {
            c @ '1'..='8' => c as usize - '1' as usize,
            _ => return Err(SquareError::InvalidRank(rank)),
        };
        Ok(Square::new(x, y))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.x() as u8) as char;
        let rank = (b'1' + self.y() as u8) as char;
        write!(f, "{file}{rank}")
    }
}
