use crate::eval::Evaluator;
use crate::game_state::GameState;

/// Executes a perft run starting from the standard initial position.
///
/// # Arguments
///
/// * `depth` - Number of plies to expand from the initial position. A depth of
///   `1` counts the immediate legal moves; larger values walk the tree
///   recursively.
///
/// # Returns
///
/// The number of leaf nodes `depth` plies below the initial position.
pub fn perft_root(depth: u32) -> u64 {
    perft(&GameState::start(Evaluator::new()), depth)
}

/// Counts the leaves of the decision tree below `state`.
///
/// A pass is a ply like any placement. A finished game is a single leaf
/// whatever depth remains.
pub fn perft(state: &GameState, depth: u32) -> u64 {
    if depth == 0 || state.is_terminal() {
        return 1;
    }
    if depth == 1 {
        return state.legal_decisions().count() as u64;
    }
    state
        .legal_decisions()
        .map(|decision| perft(&state.apply(&decision), depth - 1))
        .sum()
}
