//! The simplest possible opponent: `RandomBot`.
use std::fmt::{Debug, Formatter};

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::ai::Bot;
use crate::board::{Board, Pov};

/// Bot that chooses uniformly among the legal columns.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> Debug for RandomBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RandomBot")
    }
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        RandomBot { rng }
    }
}

impl<R: Rng> Bot for RandomBot<R> {
    fn select_move(&mut self, board: &Board, _: Pov) -> usize {
        board
            .available_moves()
            .choose(&mut self.rng)
            .expect("no legal column left")
    }
}
