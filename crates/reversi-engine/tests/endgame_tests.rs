use reversi_engine::search::{self, SearchState};
use reversi_engine::{
    Board, Decision, Evaluator, Game, GameState, Player, RandomPlayer, Stone, types::Score,
};

fn finale_state(board: &Board, color: Stone) -> GameState {
    GameState::new(board, Evaluator::new(), color, color, true).unwrap()
}

/// Plain minimax over the whole remaining game.
fn brute_force(state: &GameState) -> Score {
    if state.is_terminal() {
        return state.evaluation();
    }
    let scores = state
        .legal_decisions()
        .map(|d| brute_force(&state.apply(&d)));
    if state.is_player_turn() {
        scores.max().unwrap()
    } else {
        scores.min().unwrap()
    }
}

/// Plays seeded random games until at most `empties` cells are left.
fn random_endgame(seed: u64, empties: u32) -> Option<(Board, Stone)> {
    let mut game = Game::new();
    let mut dark = RandomPlayer::with_seed(Stone::Dark, seed).unwrap();
    let mut light = RandomPlayer::with_seed(Stone::Light, seed.wrapping_mul(31) + 7).unwrap();
    while game.board().empty_count() > empties {
        if game.is_over() {
            return None;
        }
        let player: &mut dyn Player = match game.next() {
            Stone::Dark => &mut dark,
            _ => &mut light,
        };
        game.request(player).unwrap();
    }
    (!game.is_over()).then(|| (*game.board(), game.next()))
}

#[test]
fn test_solve_9() {
    let board = Board::from_string(
        "--O--O----OOOOO-XOOOOOOOXXOOXOOOXXXXXOXXXOXXOOXXXXXXOXOXXOOOOOOX",
    )
    .unwrap();
    let result = search::exhaustive(&finale_state(&board, Stone::Dark), Decision::Pass);
    assert_eq!(result.decision.to_string(), "h2");
    assert_eq!(result.score, 45);
}

#[test]
fn test_exhaustive_is_optimal_on_small_endgames() {
    let mut checked = 0;
    for seed in 0..40 {
        let Some((board, color)) = random_endgame(seed, 6) else {
            continue;
        };
        let root = finale_state(&board, color);
        let result = search::exhaustive(&root, Decision::Pass);

        let best = root
            .legal_decisions()
            .map(|d| brute_force(&root.apply(&d)))
            .max()
            .unwrap();
        assert_eq!(result.score, best, "seed {seed}\n{board}");
        assert_eq!(brute_force(&root.apply(&result.decision)), best, "seed {seed}");
        checked += 1;
    }
    assert!(checked > 20);
}

#[test]
fn test_search_never_mutates_root() {
    let (board, color) = random_endgame(3, 14).unwrap();
    let root = GameState::new(&board, Evaluator::new(), color, color, false).unwrap();
    let before = *root.board();
    search::alpha_beta(&root, 3, Decision::Pass);
    search::iterative_deepening(&root, 3, Decision::Pass);
    search::node_budget(&root, 2, 8, 500, Decision::Pass);
    assert_eq!(root.board(), &before);
}
