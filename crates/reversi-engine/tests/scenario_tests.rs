use reversi_engine::constants::{SCORE_MAX, SCORE_MIN};
use reversi_engine::search;
use reversi_engine::{
    Board, Confidence, Decision, Evaluator, Game, GameState, Player, RandomPlayer, Square, Stone,
};

/// Boards visited by a seeded random game, with the color to move.
fn random_game(seed: u64) -> Vec<(Board, Stone)> {
    let mut game = Game::new();
    let mut dark = RandomPlayer::with_seed(Stone::Dark, seed).unwrap();
    let mut light = RandomPlayer::with_seed(Stone::Light, !seed).unwrap();
    let mut positions = vec![(*game.board(), game.next())];
    while !game.is_over() {
        let player: &mut dyn Player = match game.next() {
            Stone::Dark => &mut dark,
            _ => &mut light,
        };
        game.request(player).unwrap();
        positions.push((*game.board(), game.next()));
    }
    positions
}

#[test]
fn test_opening_has_four_single_flip_moves() {
    let board = Board::new();
    let state = GameState::new(&board, Evaluator::new(), Stone::Dark, Stone::Dark, false).unwrap();
    let decisions: Vec<Decision> = state.legal_decisions().collect();
    assert_eq!(decisions.len(), 4);
    for decision in decisions {
        let sq = decision.square().unwrap();
        let mut next = board;
        assert_eq!(next.place(sq, Stone::Dark), 1, "{decision}");
    }
}

#[test]
fn test_double_pass_ends_game() {
    let board = Board::from_string(
        "O-XXXXXX
         XXXXXXXX
         XXXXXXXX
         XXXXXXXX
         XXXXXXXX
         XXXXXXXX
         XXXXXXXX
         XXXXXXXX",
    )
    .unwrap();
    assert_eq!(board.empty_count(), 1);
    assert!(board.is_end_game());
    assert!(Game::from_board(board, Stone::Dark).unwrap().is_over());
}

#[test]
fn test_legality_matches_flips() {
    for seed in 0..8 {
        for (board, _) in random_game(seed) {
            for sq in Square::iter() {
                for color in [Stone::Dark, Stone::Light] {
                    let mut next = board;
                    let flipped = next.place(sq, color);
                    assert_eq!(board.is_legal(sq, color), flipped > 0, "{sq} {color}\n{board}");
                    if flipped > 0 {
                        let gained = next.count_stone(color) - board.count_stone(color);
                        assert_eq!(gained, flipped + 1);
                    } else {
                        assert_eq!(next, board);
                    }
                }
            }
        }
    }
}

#[test]
fn test_occupied_count_matches_scan() {
    for seed in 0..16 {
        for (board, _) in random_game(seed) {
            let scanned = Square::iter().filter(|&sq| board.at(sq).is_color()).count();
            assert_eq!(board.stone_count() as usize, scanned);
        }
    }
}

#[test]
fn test_corners_are_always_definite() {
    for seed in 0..16 {
        for (board, _) in random_game(seed) {
            for corner in Square::CORNERS {
                let confidence = board.judge_reliability(corner.x(), corner.y());
                if board.at(corner).is_color() {
                    assert_eq!(confidence, Confidence::Definite, "{corner}\n{board}");
                } else {
                    assert_eq!(confidence, Confidence::Unset);
                }
            }
        }
    }
}

/// Cells on the row, column and both diagonals through `sq`, `sq` included.
fn axis_cells(sq: Square) -> impl Iterator<Item = Square> {
    let (x, y) = (sq.x() as isize, sq.y() as isize);
    Square::iter().filter(move |s| {
        let (sx, sy) = (s.x() as isize, s.y() as isize);
        sx == x || sy == y || sx - sy == x - y || sx + sy == x + y
    })
}

#[test]
fn test_definite_stays_definite_while_axes_are_untouched() {
    let mut checked = 0;
    for seed in 0..6 {
        let positions = random_game(seed);
        for (t, (board, _)) in positions.iter().enumerate() {
            for sq in Square::iter() {
                if board.judge_reliability(sq.x(), sq.y()) != Confidence::Definite {
                    continue;
                }
                for (later, _) in &positions[t + 1..] {
                    if axis_cells(sq).any(|s| later.at(s) != board.at(s)) {
                        break;
                    }
                    let confidence = later.judge_reliability(sq.x(), sq.y());
                    assert_ne!(confidence, Confidence::Uncertain, "{sq} at ply {t}\n{later}");
                    assert_eq!(confidence, Confidence::Definite);
                    checked += 1;
                }
            }
        }
    }
    assert!(checked > 100, "only {checked} checks");
}

#[test]
fn test_evaluation_bounds() {
    let eval = Evaluator::new();
    for seed in 0..8 {
        for (board, _) in random_game(seed) {
            for color in [Stone::Dark, Stone::Light] {
                let score = eval.evaluate(&board, color, false);
                assert_eq!(score == SCORE_MIN, !board.has_stone(color));
                assert_eq!(score == SCORE_MAX, !board.has_stone(color.opposite()));
            }
        }
    }
}

#[test]
fn test_search_is_deterministic() {
    let positions = random_game(11);
    for (board, color) in positions.iter().step_by(9) {
        if board.is_end_game() {
            continue;
        }
        let root = GameState::new(board, Evaluator::new(), *color, *color, false).unwrap();
        assert_eq!(
            search::alpha_beta(&root, 3, Decision::Pass),
            search::alpha_beta(&root, 3, Decision::Pass)
        );
        assert_eq!(
            search::iterative_deepening(&root, 3, Decision::Pass),
            search::iterative_deepening(&root, 3, Decision::Pass)
        );
        assert_eq!(
            search::node_budget(&root, 2, 10, 400, Decision::Pass),
            search::node_budget(&root, 2, 10, 400, Decision::Pass)
        );
    }
}

#[test]
fn test_iterative_deepening_agrees_with_alpha_beta() {
    let positions = random_game(5);
    for (board, color) in positions.iter().step_by(7) {
        if board.is_end_game() {
            continue;
        }
        let root = GameState::new(board, Evaluator::new(), *color, *color, false).unwrap();
        let fixed = search::alpha_beta(&root, 3, Decision::Pass);
        let deepened = search::iterative_deepening(&root, 3, Decision::Pass);
        assert_eq!(fixed.score, deepened.score, "\n{board}");
    }
}

#[test]
fn test_full_game_between_levels() {
    let mut game = Game::new();
    let mut dark = reversi_engine::create_player(
        &reversi_engine::get_level("d2").unwrap(),
        Stone::Dark,
        None,
    )
    .unwrap();
    let mut light = RandomPlayer::with_seed(Stone::Light, 17).unwrap();
    let mut plies = 0;
    while !game.is_over() {
        let player: &mut dyn Player = match game.next() {
            Stone::Dark => dark.as_mut(),
            _ => &mut light,
        };
        game.request(player).unwrap();
        plies += 1;
        assert!(plies < 200);
    }
    assert!(game.count(Stone::Dark) + game.count(Stone::Light) <= 64);
}
