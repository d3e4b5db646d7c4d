//! The static positional evaluation used at the search horizon.
//!
//! This is not a win/loss signal: terminal positions are scored by the
//! search itself, the evaluator only ranks quiet positions by how many
//! open 2- and 3-lines each side has.

use crate::board::{Board, Pov};

/// Weight of an own line of length 2.
pub const OWN_PAIR: i64 = 2;
/// Weight of an own line of length 3.
pub const OWN_TRIPLE: i64 = 5;
/// Weight of an opposing line of length 2.
pub const OPPONENT_PAIR: i64 = -2;
/// Weight of an opposing line of length 3. An open opposing triple is one
/// move away from losing, so it dominates everything else.
pub const OPPONENT_TRIPLE: i64 = -100;

/// Score `board` from the point of view of `pov.own`.
/// Higher is better for `pov.own`; the scale is unbounded and only
/// meaningful for comparisons.
pub fn evaluate(board: &Board, pov: Pov) -> i64 {
    OWN_PAIR * board.count_lines(pov.own, 2) as i64
        + OWN_TRIPLE * board.count_lines(pov.own, 3) as i64
        + OPPONENT_PAIR * board.count_lines(pov.opponent, 2) as i64
        + OPPONENT_TRIPLE * board.count_lines(pov.opponent, 3) as i64
}
