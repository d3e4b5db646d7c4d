//! Depth-limited minimax with alpha-beta pruning.
//!
//! Scores are `f64` so terminal positions can be literal `±inf`: a win for
//! the engine scores `+inf`, a win for the opponent `-inf`, a draw `0`, and
//! at the horizon the board is scored by [crate::heuristic::evaluate],
//! always from the engine's own perspective regardless of whose turn it is.

use itertools::Itertools;
use log::debug;

use crate::ai::Bot;
use crate::board::{Board, Pov, CENTER_COLUMN};
use crate::heuristic::evaluate;

/// The fixed number of plies searched below each root move.
pub const SEARCH_DEPTH: u32 = 4;

/// Flat bonus added to a branch whenever the move under consideration is the
/// center column. Applied at every level of the tree, not only the root.
pub const CENTER_BONUS: f64 = 4.0;

/// Return the best column for `pov.own` to play on `board`.
/// Requires at least one legal column; panics on a full board.
///
/// Every root move is searched with a full `(-inf, +inf)` window; the column
/// with the maximum value wins, and equal values prefer the higher column.
pub fn best_move(board: &Board, pov: Pov, depth: u32) -> usize {
    let moves = board
        .available_moves()
        .map(|col| {
            let mut value = score_move(board, pov, col, depth, f64::NEG_INFINITY, f64::INFINITY, true);
            if col == CENTER_COLUMN {
                value += CENTER_BONUS;
            }
            (value, col)
        })
        .collect_vec();

    assert!(!moves.is_empty(), "cannot pick a move on a full board");

    // unwrap is safe, `moves` is nonempty and the values are never NaN
    let &(value, col) = moves
        .iter()
        .max_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
        .unwrap();

    debug!("picked column {} with value {}, candidates {:?}", col, value, moves);
    col
}

/// Score the hypothetical move `col` played on `board`.
///
/// `own_turn` says whose mark is placed at this node and flips with each
/// level of recursion, starting `true` at the root. Terminal conditions are
/// checked after placing, in priority order: engine win, opponent win, draw,
/// exhausted depth. Only when none apply does the search recurse.
///
/// `alpha` is a lower and `beta` an upper bound valid for the side choosing
/// among this node's children; both narrow as better values are found and
/// are passed on into child calls. The bounds live on this node's scale:
/// recursing into the center column shifts them by [CENTER_BONUS], the same
/// offset later added to that child's value.
fn score_move(
    board: &Board,
    pov: Pov,
    col: usize,
    depth: u32,
    mut alpha: f64,
    mut beta: f64,
    own_turn: bool,
) -> f64 {
    let mut child = board.clone();
    let mover = if own_turn { pov.own } else { pov.opponent };

    // unwrap is safe, callers only try columns reported legal by `board`
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

    // when the engine just moved the opponent chooses among the children,
    // so this is a minimizing node, and symmetrically a maximizing one
    let mut best = if own_turn { f64::INFINITY } else { f64::NEG_INFINITY };

    for next_col in child.available_moves() {
        // the bonus shifts the whole scale of a center child, so the pruning
        // window has to shift with it or the cutoffs land off by the bonus
        let bonus = if next_col == CENTER_COLUMN { CENTER_BONUS } else { 0.0 };
        let value = score_move(&child, pov, next_col, depth - 1, alpha - bonus, beta - bonus, !own_turn) + bonus;

        if own_turn {
            best = best.min(value);
            if best <= alpha {
                return best;
            }
            beta = beta.min(best);
        } else {
            best = best.max(value);
            if best >= beta {
                return best;
            }
            alpha = alpha.max(best);
        }
    }

    best
}

/// Bot that picks its moves with [best_move] at a fixed depth.
#[derive(Debug)]
pub struct MinimaxBot {
    depth: u32,
}

impl MinimaxBot {
    pub fn new(depth: u32) -> Self {
        MinimaxBot { depth }
    }
}

impl Default for MinimaxBot {
    fn default() -> Self {
        MinimaxBot::new(SEARCH_DEPTH)
    }
}

impl Bot for MinimaxBot {
    fn select_move(&mut self, board: &Board, pov: Pov) -> usize {
        best_move(board, pov, self.depth)
    }
}
