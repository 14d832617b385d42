//! Opponent strength levels.

use std::fmt;
use std::str::FromStr;

use crate::constants::FINALE_EMPTIES;
use crate::error::{Error, Result};
use crate::types::{Depth, NodeCount};

/// Search strategy with its fixed parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Alpha-beta to a fixed depth.
    AlphaBeta { depth: Depth },
    /// Iterative deepening up to a fixed depth.
    IterativeDeepening { depth: Depth },
    /// Iterative deepening bounded by a node budget.
    NodeBudget {
        min_depth: Depth,
        max_depth: Depth,
        node_budget: NodeCount,
    },
}

/// How an opponent picks its moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Policy {
    /// Corner if possible, otherwise uniformly at random.
    Random,
    /// Game tree search.
    Search(Strategy),
}

/// Represents a named opponent level.
///
/// Each level defines:
/// - The policy used in the middle game
/// - An optional end-game threshold: with that many or fewer empty cells the
///   player reads the game out to the end and plays for stone count
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Level {
    pub name: &'static str,
    pub policy: Policy,
    pub finale_empties: Option<u32>,
}

impl Level {
    const fn search(name: &'static str, strategy: Strategy) -> Level {
        Level {
            name,
            policy: Policy::Search(strategy),
            finale_empties: Some(FINALE_EMPTIES),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        get_level(s)
    }
}

/// Retrieves a level by name, ignoring case.
///
/// # Errors
///
/// Returns [`Error::UnknownLevel`] if no level has that name.
pub fn get_level(name: &str) -> Result<Level> {
    let name = name.trim();
    LEVELS
        .iter()
        .find(|lv| lv.name.eq_ignore_ascii_case(name))
        .copied()
        .ok_or_else(|| Error::UnknownLevel {
            name: name.to_string(),
            expected: level_names().collect::<Vec<_>>().join(", "),
        })
}

/// Names of all levels from weakest to strongest.
pub fn level_names() -> impl Iterator<Item = &'static str> {
    LEVELS.iter().map(|lv| lv.name)
}

/// Predefined levels from weakest to strongest.
const LEVELS: [Level; 8] = [
    Level {
        name: "random",
        policy: Policy::Random,
        finale_empties: None,
    },
    Level::search("d2", Strategy::AlphaBeta { depth: 2 }),
    Level::search("d3", Strategy::IterativeDeepening { depth: 3 }),
    Level::search("d4", Strategy::IterativeDeepening { depth: 4 }),
    Level::search("d8", Strategy::IterativeDeepening { depth: 8 }),
    Level::search(
        "e1250",
        Strategy::NodeBudget {
            min_depth: 3,
            max_depth: 12,
            node_budget: 1250,
        },
    ),
    Level::search(
        "e2500",
        Strategy::NodeBudget {
            min_depth: 4,
            max_depth: 12,
            node_budget: 2500,
        },
    ),
    Level::search(
        "e5000",
        Strategy::NodeBudget {
            min_depth: 5,
            max_depth: 12,
            node_budget: 5000,
        },
    ),
];
