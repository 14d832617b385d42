//! Reversi engine: board rules, confidence-weighted evaluation, generic
//! game tree search and the computer players built on top of them.

pub mod board;
pub mod constants;
pub mod decision;
pub mod error;
pub mod eval;
pub mod game;
pub mod game_state;
pub mod level;
pub mod perft;
pub mod player;
pub mod search;
pub mod square;
pub mod stability;
pub mod stone;
pub mod types;

pub use board::Board;
pub use decision::Decision;
pub use error::{Error, Result};
pub use eval::Evaluator;
pub use game::Game;
pub use game_state::GameState;
pub use level::{Level, Policy, Strategy, get_level};
pub use player::{ManualPlayer, Player, RandomPlayer, SearchPlayer, create_player};
pub use search::{SearchResult, SearchState};
pub use square::Square;
pub use stability::Confidence;
pub use stone::Stone;
