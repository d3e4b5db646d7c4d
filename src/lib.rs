#![warn(missing_debug_implementations)]

//! Connect Four on the classic 7x6 board, with a minimax AI.
//!
//! The pieces:
//! * [Board](crate::board::Board) owns the grid, applies moves with gravity
//!   and detects lines, wins and draws.
//! * [evaluate](crate::heuristic::evaluate) turns line counts into a signed
//!   positional score.
//! * [best_move](crate::ai::minimax::best_move) runs a depth-limited minimax
//!   search with alpha-beta pruning and is the sole AI entry point.
//! * [Bot](crate::ai::Bot) is the seam player roles plug into, with
//!   [RandomBot](crate::ai::simple::RandomBot) and
//!   [MinimaxBot](crate::ai::minimax::MinimaxBot) provided.
//! * [GameState](crate::game::GameState) threads the turn loop state through
//!   an explicit loop; the interactive console game lives in the `play`
//!   binary.
//!
//! # Example
//!
//! Ask the engine for a move on the empty board. At any depth the flat
//! center bonus makes it open in the middle column:
//!
//! ```
//! use connect_four::ai::minimax::best_move;
//! use connect_four::board::{Board, Pov, Side};
//!
//! let board = Board::new();
//! assert_eq!(3, best_move(&board, Pov::of(Side::X), 1));
//! ```

pub mod board;

pub mod heuristic;

pub mod ai;

pub mod game;

pub mod util;
