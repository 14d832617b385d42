use crate::board::Board;
use crate::decision::Decision;
use crate::error::{Result, require_color};
use crate::eval::Evaluator;
use crate::game_state::GameState;
use crate::level::Strategy;
use crate::player::Player;
use crate::search::{self, SearchResult};
use crate::stone::Stone;

/// Computer player backed by game tree search.
///
/// In the middle game it runs its [`Strategy`] with positional evaluation.
/// Once `finale_empties` or fewer cells are empty it searches to the end of
/// the game and maximizes its final stone count instead.
#[derive(Debug, Clone)]
pub struct SearchPlayer {
    color: Stone,
    strategy: Strategy,
    finale_empties: Option<u32>,
    evaluator: Evaluator,
    last_result: Option<SearchResult<Decision>>,
}

impl SearchPlayer {
    pub fn new(color: Stone, strategy: Strategy, finale_empties: Option<u32>) -> Result<Self> {
        Ok(SearchPlayer {
            color: require_color(color, "player")?,
            strategy,
            finale_empties,
            evaluator: Evaluator::new(),
            last_result: None,
        })
    }

    /// Replaces the evaluator used for middle-game search.
    pub fn with_evaluator(mut self, evaluator: Evaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The result behind the most recent decision.
    pub fn last_result(&self) -> Option<&SearchResult<Decision>> {
        self.last_result.as_ref()
    }

    /// Runs the search for `board` without recording the result.
    pub fn think(&self, board: &Board) -> Result<SearchResult<Decision>> {
        let in_finale = self
            .finale_empties
            .is_some_and(|n| board.empty_count() <= n);
        let root = GameState::new(board, self.evaluator, self.color, self.color, in_finale)?;

        if in_finale {
            return Ok(search::exhaustive(&root, Decision::Pass));
        }
        Ok(match self.strategy {
            Strategy::AlphaBeta { depth } => search::alpha_beta(&root, depth, Decision::Pass),
            Strategy::IterativeDeepening { depth } => {
                search::iterative_deepening(&root, depth, Decision::Pass)
            }
            Strategy::NodeBudget {
                min_depth,
                max_depth,
                node_budget,
            } => search::node_budget(&root, min_depth, max_depth, node_budget, Decision::Pass),
        })
    }
}

impl Player for SearchPlayer {
    fn color(&self) -> Stone {
        self.color
    }

    fn play(&mut self, board: &Board) -> Result<Decision> {
        let result = self.think(board)?;
        let decision = result.decision;
        self.last_result = Some(result);
        Ok(decision)
    }
}
