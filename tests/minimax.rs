use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use connect_four::ai::minimax::{best_move, MinimaxBot, CENTER_BONUS, SEARCH_DEPTH};
use connect_four::ai::Bot;
use connect_four::board::{Board, Pov, Side, CENTER_COLUMN};
use connect_four::heuristic::evaluate;
use connect_four::util::{board_with_moves, random_board};

#[test]
fn center_bias_on_empty_board() {
    // at depth 1 every column scores the same, only the flat center bonus differs
    let board = Board::new();
    assert_eq!(CENTER_COLUMN, best_move(&board, Pov::of(Side::X), 1));
    assert_eq!(CENTER_COLUMN, best_move(&board, Pov::of(Side::O), 1));
}

#[test]
fn takes_immediate_win() {
    // x has three marks stacked in column 2
    let mut board = Board::new();
    for _ in 0..3 {
        board.place_mark(Side::X, 2).unwrap();
    }

    // completing the line scores +inf, which no other column can reach at depth 1
    assert_eq!(2, best_move(&board, Pov::of(Side::X), 1));
}

#[test]
fn blocks_opponent_win() {
    // x threatens to complete column 5, o to move
    let mut board = Board::new();
    for _ in 0..3 {
        board.place_mark(Side::X, 5).unwrap();
    }

    // every non-blocking move lets x win on the next ply and scores -inf
    assert_eq!(5, best_move(&board, Pov::of(Side::O), SEARCH_DEPTH));
}

#[test]
fn bot_matches_free_function() {
    let mut board = Board::new();
    board.place_mark(Side::X, 3).unwrap();
    board.place_mark(Side::O, 3).unwrap();

    let pov = Pov::of(Side::X);
    let mut bot = MinimaxBot::new(2);
    assert_eq!(best_move(&board, pov, 2), bot.select_move(&board, pov));
}

#[test]
fn center_bonus_keeps_pruning_exact() {
    // a cutoff against a window that was not shifted along with the center
    // bonus used to steer the search away from column 3 on this position:
    // x on columns 0 and 2, two o's stacked on top in column 2
    let board = board_with_moves(Side::X, &[2, 2, 0, 2]);
    let pov = Pov::of(Side::X);

    for depth in 0..=3 {
        assert_eq!(
            reference_best_move(&board, pov, depth),
            best_move(&board, pov, depth),
            "pruned and unpruned search disagree at depth {}",
            depth
        );
    }
}

#[test]
fn matches_unpruned_reference_search() {
    let mut rng = SmallRng::seed_from_u64(0);
    let depth = 3;

    for _ in 0..30 {
        // an even number of random moves, so the side to move is x again
        let n = 2 * rng.gen_range(0..10);
        let board = random_board(Side::X, n, &mut rng);
        let pov = Pov::of(Side::X);

        let pruned = best_move(&board, pov, depth);
        let reference = reference_best_move(&board, pov, depth);

        assert_eq!(
            reference, pruned,
            "pruned and unpruned search disagree after {} moves on\n{}",
            n, board
        );
    }
}

/// Exhaustive minimax without alpha-beta, kept deliberately close to the
/// board rules: same terminal order, same center bonus at every level,
/// same highest-column tie-break.
fn reference_best_move(board: &Board, pov: Pov, depth: u32) -> usize {
    let mut best: Option<(f64, usize)> = None;

    for col in board.available_moves() {
        let mut value = reference_score(board, pov, col, depth, true);
        if col == CENTER_COLUMN {
            value += CENTER_BONUS;
        }
        let candidate = (value, col);

        let better = match best {
            None => true,
            Some((best_value, best_col)) => {
                value > best_value || (value == best_value && col > best_col)
            }
        };
        if better {
            best = Some(candidate);
        }
    }

    best.expect("no legal move").1
}

fn reference_score(board: &Board, pov: Pov, col: usize, depth: u32, own_turn: bool) -> f64 {
    let mut child = board.clone();
    let mover = if own_turn { pov.own } else { pov.opponent };
    child.place_mark(mover, col).unwrap();

    if child.is_winner(pov.own) {
        return f64::INFINITY;
    }
    if child.is_winner(pov.opponent) {
        return f64::NEG_INFINITY;
    }
    if child.is_draw() {
        return 0.0;
    }
    if depth == 0 {
        return evaluate(&child, pov) as f64;
    }

    let values = child.available_moves().map(|next_col| {
        let mut value = reference_score(&child, pov, next_col, depth - 1, !own_turn);
        if next_col == CENTER_COLUMN {
            value += CENTER_BONUS;
        }
        value
    });

    if own_turn {
        values.fold(f64::INFINITY, f64::min)
    } else {
        values.fold(f64::NEG_INFINITY, f64::max)
    }
}
