//! Utilities to construct a [Board] in a known or random state,
//! mostly useful for tests and tooling.

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::board::{Board, Side};

/// Play the given columns on an empty board, alternating sides starting
/// with `first`. Panics on an illegal column, this is a construction helper.
pub fn board_with_moves(first: Side, moves: &[usize]) -> Board {
    let mut board = Board::new();
    let mut side = first;

    for &col in moves {
        assert!(board.legal_move(col), "column {} is not legal on\n{}", col, board);
        board.place_mark(side, col).unwrap();
        side = side.other();
    }

    board
}

/// Generate a board by playing `n` random legal moves, alternating sides
/// starting with `first`. Sequences that finish the game are rerolled, so
/// the returned board is always still in play.
pub fn random_board(first: Side, n: u32, rng: &mut impl Rng) -> Board {
    'new_try: loop {
        let mut board = Board::new();
        let mut side = first;

        for _ in 0..n {
            let col = match board.available_moves().choose(rng) {
                Some(col) => col,
                None => continue 'new_try,
            };
            // unwrap is safe, the column was just reported legal
            if board.place_mark(side, col).unwrap() {
                continue 'new_try;
            }
            side = side.other();
        }

        if board.is_draw() {
            continue 'new_try;
        }
        return board;
    }
}
