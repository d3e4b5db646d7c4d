//! The explicit turn-loop state and a bot-vs-bot match runner.

use crate::ai::Bot;
use crate::board::{Board, Outcome, PlaceError, Pov, Side};

/// A running game: the live board plus the side to move.
///
/// The live board is mutated in place exactly once per real move, search
/// only ever works on clones of it.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    next: Side,
}

impl GameState {
    pub fn new(first: Side) -> GameState {
        GameState {
            board: Board::new(),
            next: first,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn next_side(&self) -> Side {
        self.next
    }

    /// Play a move for the side whose turn it is and flip the turn.
    /// Returns the outcome when this move ends the game, checking the win
    /// before the draw since a full board can contain a winning line.
    ///
    /// Errors are recoverable: the board is unchanged and the turn does not
    /// flip, so the caller can simply ask for another move.
    pub fn play(&mut self, col: usize) -> Result<Option<Outcome>, PlaceError> {
        let won = self.board.place_mark(self.next, col)?;

        let outcome = if won {
            Some(Outcome::WonBy(self.next))
        } else if self.board.is_draw() {
            Some(Outcome::Draw)
        } else {
            None
        };

        self.next = self.next.other();
        Ok(outcome)
    }
}

/// Run `bot_x` (playing `X`, moving first) against `bot_o` until the game
/// ends and return the outcome. Runs single-threaded to completion.
pub fn play_match(bot_x: &mut impl Bot, bot_o: &mut impl Bot) -> Outcome {
    let mut state = GameState::new(Side::X);

    loop {
        let pov = Pov::of(state.next_side());
        let col = match pov.own {
            Side::X => bot_x.select_move(state.board(), pov),
            Side::O => bot_o.select_move(state.board(), pov),
        };

        // unwrap is safe, bots only propose legal columns
        if let Some(outcome) = state.play(col).unwrap() {
            return outcome;
        }
    }
}
