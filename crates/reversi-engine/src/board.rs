//! Reversi board representation on an 8x8 grid of stones.

use std::fmt;

use crate::constants::{BOARD_SIZE, BOARD_SQUARES};
use crate::error::{Error, Result};
use crate::square::Square;
use crate::stability::{self, Confidence};
use crate::stone::Stone;

/// The eight scan directions as `(dx, dy)` steps.
pub(crate) const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Yields the squares met when stepping from `sq` in direction `(dx, dy)`,
/// excluding `sq` itself and stopping at the board edge.
pub(crate) fn ray(sq: Square, (dx, dy): (isize, isize)) -> impl Iterator<Item = Square> {
    let (mut x, mut y) = (sq.x() as isize, sq.y() as isize);
    std::iter::from_fn(move || {
        x += dx;
        y += dy;
        Square::checked(x, y)
    })
}

/// A Reversi board.
///
/// Besides the grid, the board keeps the number of occupied cells up to date on
/// every mutation so that [`Board::stone_count`] is O(1). Cells only ever go from
/// empty to occupied; afterwards a stone can change color but never disappears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Stone; BOARD_SQUARES],
    stone_count: u32,
}

impl Default for Board {
    /// Creates a board with the standard starting position.
    ///
    /// The initial position has:
    /// - Light stones on d4 and e5
    /// - Dark stones on e4 and d5
    fn default() -> Self {
        let mut board = Board::empty();
        board.put(Square::new(3, 3), Stone::Light);
        board.put(Square::new(4, 3), Stone::Dark);
        board.put(Square::new(3, 4), Stone::Dark);
        board.put(Square::new(4, 4), Stone::Light);
        board
    }
}

impl Board {
    /// Creates a new `Board` with the initial Reversi setup.
    pub fn new() -> Board {
        Default::default()
    }

    /// Creates a board with no stones.
    pub fn empty() -> Board {
        Board {
            cells: [Stone::None; BOARD_SQUARES],
            stone_count: 0,
        }
    }

    /// Creates a `Board` from a string representation.
    ///
    /// The string holds 64 cells in row-major order from a1 to h8: `X` for
    /// dark, `O` for light, `-` or `.` for empty. Whitespace is ignored so
    /// fixtures can be laid out one row per line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBoardString`] on an unknown character or if the
    /// string does not describe exactly 64 cells.
    pub fn from_string(board_string: &str) -> Result<Board> {
        let mut board = Board::empty();
        let mut n_cells = 0;
        for c in board_string.chars().filter(|c| !c.is_whitespace()) {
            let stone = Stone::from_char(c).ok_or_else(|| Error::InvalidBoardString {
                reason: format!("unexpected character '{c}'"),
            })?;
            let Some(sq) = Square::from_index(n_cells) else {
                return Err(Error::InvalidBoardString {
                    reason: "more than 64 cells".to_string(),
                });
            };
            board.put(sq, stone);
            n_cells += 1;
        }
        if n_cells != BOARD_SQUARES {
            return Err(Error::InvalidBoardString {
                reason: format!("expected 64 cells, got {n_cells}"),
            });
        }
        Ok(board)
    }

    /// Gets the stone at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Stone {
        self.at(Square::new(x, y))
    }

    /// Gets the stone on a square.
    #[inline]
    pub fn at(&self, sq: Square) -> Stone {
        self.cells[sq.index()]
    }

    /// Writes a cell and keeps the occupied count in step.
    fn put(&mut self, sq: Square, stone: Stone) {
        let cell = &mut self.cells[sq.index()];
        match (cell.is_color(), stone.is_color()) {
            (false, true) => self.stone_count += 1,
            (true, false) => self.stone_count -= 1,
            _ => {}
        }
        *cell = stone;
    }

    /// Checks whether placing `color` at `(x, y)` would flip at least one stone.
    ///
    /// # Panics
    ///
    /// Panics if `color` is `Stone::None`.
    pub fn is_locatable(&self, x: usize, y: usize, color: Stone) -> bool {
        self.is_legal(Square::new(x, y), color)
    }

    /// Square-addressed form of [`Board::is_locatable`].
    ///
    /// # Panics
    ///
    /// Panics if `color` is `Stone::None`.
    pub fn is_legal(&self, sq: Square, color: Stone) -> bool {
        assert!(color.is_color(), "legality is undefined for an empty color");
        if self.at(sq) != Stone::None {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&dir| self.brackets(sq, dir, color))
    }

    /// Whether the run starting next to `sq` in `dir` is a non-empty line of
    /// opposing stones closed by a `color` stone.
    fn brackets(&self, sq: Square, dir: (isize, isize), color: Stone) -> bool {
        let mut cells = ray(sq, dir).map(|s| self.at(s));
        if cells.next() != Some(color.opposite()) {
            return false;
        }
        for stone in cells {
            if stone == color {
                return true;
            }
            if stone == Stone::None {
                return false;
            }
        }
        false
    }

    /// Checks if `color` has any legal placement on the board.
    ///
    /// # Panics
    ///
    /// Panics if `color` is `Stone::None`.
    pub fn has_legal_moves(&self, color: Stone) -> bool {
        Square::iter().any(|sq| self.is_legal(sq, color))
    }

    /// Iterates over the legal placements for `color` in index order.
    pub fn legal_moves(&self, color: Stone) -> impl Iterator<Item = Square> + '_ {
        Square::iter().filter(move |&sq| self.is_legal(sq, color))
    }

    /// Checks if `color` can take any of the four corners.
    pub fn is_corner_locatable(&self, color: Stone) -> bool {
        Square::CORNERS.iter().any(|&sq| self.is_legal(sq, color))
    }

    /// Places a `color` stone at `(x, y)` and flips every bracketed run.
    ///
    /// An occupied cell or a placement that flips nothing leaves the board
    /// untouched and returns 0.
    ///
    /// # Returns
    ///
    /// The number of stones flipped.
    ///
    /// # Panics
    ///
    /// Panics if `color` is `Stone::None`.
    pub fn locate(&mut self, x: usize, y: usize, color: Stone) -> u32 {
        self.place(Square::new(x, y), color)
    }

    /// Square-addressed form of [`Board::locate`].
    pub fn place(&mut self, sq: Square, color: Stone) -> u32 {
        assert!(color.is_color(), "cannot place an empty color");
        if self.at(sq).is_color() {
            return 0;
        }
        let flipped: u32 = DIRECTIONS
            .iter()
            .map(|&dir| self.flip_run(sq, dir, color))
            .sum();
        if flipped > 0 {
            self.put(sq, color);
        }
        flipped
    }

    /// Flips the opposing run next to `sq` in `dir` if a `color` stone closes it.
    fn flip_run(&mut self, sq: Square, dir: (isize, isize), color: Stone) -> u32 {
        let opponent = color.opposite();
        let mut run = 0;
        let mut closed = false;
        for s in ray(sq, dir) {
            let stone = self.at(s);
            if stone == opponent {
                run += 1;
            } else {
                closed = stone == color;
                break;
            }
        }
        if !closed {
            return 0;
        }
        for s in ray(sq, dir).take(run) {
            self.cells[s.index()] = color;
        }
        run as u32
    }

    /// Classifies how permanent the stone at `(x, y)` is.
    pub fn judge_reliability(&self, x: usize, y: usize) -> Confidence {
        stability::judge(self, Square::new(x, y))
    }

    /// Number of occupied cells, maintained incrementally.
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.stone_count
    }

    /// Number of empty cells.
    #[inline]
    pub fn empty_count(&self) -> u32 {
        BOARD_SQUARES as u32 - self.stone_count
    }

    /// Counts cells holding `stone`; `Stone::None` counts empty cells.
    pub fn count_stone(&self, stone: Stone) -> u32 {
        self.cells.iter().filter(|&&s| s == stone).count() as u32
    }

    /// Checks if at least one cell holds `stone`.
    pub fn has_stone(&self, stone: Stone) -> bool {
        self.cells.contains(&stone)
    }

    /// Checks if every cell is occupied.
    pub fn is_fill(&self) -> bool {
        !self.has_stone(Stone::None)
    }

    /// Checks if the game is over.
    ///
    /// The game ends when the board is full, when either color has been wiped
    /// out, or when neither color has a legal placement.
    pub fn is_end_game(&self) -> bool {
        if self.is_fill() || !self.has_stone(Stone::Light) || !self.has_stone(Stone::Dark) {
            return true;
        }
        !self.has_legal_moves(Stone::Light) && !self.has_legal_moves(Stone::Dark)
    }
}

impl fmt::Display for Board {
    /// Formats the board as 8 rows of `X` (dark), `O` (light) and `-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for stone in row {
                write!(f, "{}", stone.to_char())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_scan_count(board: &Board) -> u32 {
        Square::iter().filter(|&sq| board.at(sq).is_color()).count() as u32
    }

    #[test]
    fn test_default_board() {
        let board = Board::new();
        assert_eq!(board.stone_count(), 4);
        assert_eq!(board.empty_count(), 60);
        assert_eq!(board.count_stone(Stone::Light), 2);
        assert_eq!(board.count_stone(Stone::Dark), 2);
        assert_eq!(board.count_stone(Stone::None), 60);
        assert_eq!(board.get(3, 3), Stone::Light);
        assert_eq!(board.get(4, 4), Stone::Light);
        assert_eq!(board.get(4, 3), Stone::Dark);
        assert_eq!(board.get(3, 4), Stone::Dark);
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string(
            "--------
             --------
             --------
             ---OX---
             ---XO---
             --------
             --------
             --------",
        )
        .unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_from_string_errors() {
        assert!(matches!(
            Board::from_string("---"),
            Err(Error::InvalidBoardString { .. })
        ));
        assert!(matches!(
            Board::from_string(&"-".repeat(65)),
            Err(Error::InvalidBoardString { .. })
        ));
        let mut bad = "-".repeat(63);
        bad.push('?');
        assert!(matches!(
            Board::from_string(&bad),
            Err(Error::InvalidBoardString { .. })
        ));
    }

    #[test]
    fn test_initial_legal_moves() {
        let board = Board::new();
        let moves: Vec<Square> = board.legal_moves(Stone::Dark).collect();
        assert_eq!(
            moves,
            vec![
                Square::new(3, 2),
                Square::new(2, 3),
                Square::new(5, 4),
                Square::new(4, 5),
            ]
        );
        for sq in moves {
            let mut next = board;
            assert_eq!(next.place(sq, Stone::Dark), 1);
            assert_eq!(next.count_stone(Stone::Dark), 4);
            assert_eq!(next.count_stone(Stone::Light), 1);
        }
    }

    #[test]
    fn test_occupied_cell_is_not_locatable() {
        let board = Board::new();
        assert!(!board.is_locatable(3, 3, Stone::Dark));
        assert!(!board.is_locatable(0, 0, Stone::Dark));
        assert!(board.is_locatable(3, 2, Stone::Dark));
        assert!(!board.is_locatable(3, 2, Stone::Light));
    }

    #[test]
    #[should_panic(expected = "legality is undefined for an empty color")]
    fn test_is_locatable_rejects_empty_color() {
        Board::new().is_locatable(3, 2, Stone::None);
    }

    #[test]
    #[should_panic(expected = "cannot place an empty color")]
    fn test_locate_rejects_empty_color() {
        Board::new().locate(3, 2, Stone::None);
    }

    #[test]
    fn test_locate_is_noop_without_flips() {
        let mut board = Board::new();
        assert_eq!(board.locate(0, 0, Stone::Dark), 0);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_locate_flips_only_closed_runs() {
        let mut board = Board::from_string(
            "--------
             -OO-----
             X--X----
             --------
             --------
             --------
             --------
             --------",
        )
        .unwrap();
        // c1: the c-file run is open at c3, the diagonal is closed by a3.
        assert!(board.is_locatable(2, 0, Stone::Dark));
        let before = board.stone_count();
        assert_eq!(board.locate(2, 0, Stone::Dark), 1);
        assert_eq!(board.get(1, 1), Stone::Dark);
        assert_eq!(board.get(2, 1), Stone::Light);
        assert_eq!(board.stone_count(), before + 1);
        assert!(!board.is_locatable(0, 0, Stone::Light));

        assert!(board.is_locatable(2, 2, Stone::Dark));
        assert_eq!(board.locate(2, 2, Stone::Dark), 1);
        assert_eq!(board.get(2, 1), Stone::Dark);
        assert_eq!(board.count_stone(Stone::Light), 0);
    }

    #[test]
    fn test_long_run_is_flipped() {
        let mut board = Board::from_string(
            "-OOOOOOX
             --------
             --------
             --------
             --------
             --------
             --------
             --------",
        )
        .unwrap();
        assert_eq!(board.locate(0, 0, Stone::Dark), 6);
        assert_eq!(board.count_stone(Stone::Dark), 8);
        assert_eq!(board.count_stone(Stone::Light), 0);
        assert_eq!(board.stone_count(), 8);
    }

    #[test]
    fn test_occupied_count_matches_full_scan() {
        let mut board = Board::new();
        let mut color = Stone::Dark;
        for _ in 0..40 {
            let Some(sq) = board.legal_moves(color).next() else {
                color = color.opposite();
                if !board.has_legal_moves(color) {
                    break;
                }
                continue;
            };
            board.place(sq, color);
            assert_eq!(board.stone_count(), full_scan_count(&board));
            assert_eq!(board.empty_count(), board.count_stone(Stone::None));
            color = color.opposite();
        }
    }

    #[test]
    fn test_corner_locatable() {
        let board = Board::from_string(
            "-OX-----
             --------
             --------
             --------
             --------
             --------
             --------
             --------",
        )
        .unwrap();
        assert!(board.is_corner_locatable(Stone::Dark));
        assert!(!board.is_corner_locatable(Stone::Light));
        assert!(!Board::new().is_corner_locatable(Stone::Dark));
    }

    #[test]
    fn test_is_end_game() {
        assert!(!Board::new().is_end_game());

        let full = Board::from_string(&"XO".repeat(32)).unwrap();
        assert!(full.is_fill());
        assert!(full.is_end_game());

        let wiped = Board::from_string(&format!("X{}", "-".repeat(63))).unwrap();
        assert!(wiped.is_end_game());
    }

    #[test]
    fn test_double_pass_is_end_game_with_empty_cells() {
        let mut s = String::from("O-XXXXXX");
        s.push_str(&"XXXXXXXX".repeat(7));
        let board = Board::from_string(&s).unwrap();
        assert_eq!(board.empty_count(), 1);
        assert!(!board.has_legal_moves(Stone::Light));
        assert!(!board.has_legal_moves(Stone::Dark));
        assert!(board.is_end_game());
    }

    #[test]
    fn test_display() {
        let expected = "--------\n\
                        --------\n\
                        --------\n\
                        ---OX---\n\
                        ---XO---\n\
                        --------\n\
                        --------\n\
                        --------";
        assert_eq!(Board::new().to_string(), expected);
    }
}
