use std::fmt::Debug;

use crate::board::{Board, Pov};

pub mod minimax;
pub mod simple;

/// A move-proposing strategy, the single capability a player role needs.
pub trait Bot: Debug {
    /// Pick a column to play for `pov.own`.
    /// Requires at least one legal column; panics on a full board.
    ///
    /// `self` is mutable to allow for random state, this method is not
    /// supposed to modify `self` in any other significant way.
    fn select_move(&mut self, board: &Board, pov: Pov) -> usize;
}

impl<F: FnMut(&Board, Pov) -> usize + Debug> Bot for F {
    fn select_move(&mut self, board: &Board, pov: Pov) -> usize {
        self(board, pov)
    }
}
