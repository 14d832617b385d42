//! Error types for the engine.

use thiserror::Error;

use crate::decision::Decision;
use crate::square::SquareError;
use crate::stone::Stone;

/// Errors surfaced by game-state construction, players and the game record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("{role} color must be light or dark")]
    EmptyColor { role: &'static str },

    #[error("illegal decision {decision} for {color}")]
    IllegalMove { decision: Decision, color: Stone },

    #[error("no decision has been queued for {color}")]
    NoPendingDecision { color: Stone },

    #[error("it is {expected}'s turn, not {actual}'s")]
    WrongTurn { expected: Stone, actual: Stone },

    #[error("unknown level '{name}' (expected one of: {expected})")]
    UnknownLevel { name: String, expected: String },

    #[error("invalid board string: {reason}")]
    InvalidBoardString { reason: String },

    #[error(transparent)]
    ParseSquare(#[from] SquareError),
}

/// Convenience alias for results carrying the engine's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Rejects `Stone::None` where a color is required.
pub(crate) fn require_color(stone: Stone, role: &'static str) -> Result<Stone> {
    if stone.is_color() {
        Ok(stone)
    } else {
        Err(Error::EmptyColor { role })
    }
}
