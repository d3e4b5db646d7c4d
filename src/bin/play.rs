//! Interactive console game: you play `X` against a bot playing `O`.
//!
//! Usage: `play [minimax|random] [depth]`

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use crossterm::style::Stylize;

use connect_four::ai::minimax::{MinimaxBot, SEARCH_DEPTH};
use connect_four::ai::simple::RandomBot;
use connect_four::ai::Bot;
use connect_four::board::{Board, Outcome, Pov, Side, HEIGHT, WIDTH};
use connect_four::game::GameState;

fn main() -> Result<()> {
    env_logger::init();

    let opponent = std::env::args().nth(1).unwrap_or_else(|| "minimax".to_owned());
    let depth = match std::env::args().nth(2) {
        Some(s) => s.parse().context("depth must be a number")?,
        None => SEARCH_DEPTH,
    };

    let mut bot: Box<dyn Bot> = match opponent.as_str() {
        "minimax" => Box::new(MinimaxBot::new(depth)),
        "random" => Box::new(RandomBot::new(rand::thread_rng())),
        other => bail!("unknown opponent {:?}, expected minimax or random", other),
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut state = GameState::new(Side::X);

    let outcome = loop {
        let result = match state.next_side() {
            Side::X => {
                print_board(state.board());
                let col = read_human_move(&mut lines, &state)?;
                state.play(col)
            }
            Side::O => {
                let col = bot.select_move(state.board(), Pov::of(Side::O));
                println!("The computer plays column {}.", col + 1);
                state.play(col)
            }
        };

        // both players only hand over validated columns
        if let Some(outcome) = result? {
            break outcome;
        }
    };

    print_board(state.board());
    match outcome {
        Outcome::WonBy(Side::X) => println!("Congratulations, you win!"),
        Outcome::WonBy(Side::O) => println!("The computer wins."),
        Outcome::Draw => println!("No one wins."),
    }

    Ok(())
}

/// Keep prompting until the human enters a legal column (1-7).
/// Typing `ai` lets the engine pick the move instead.
fn read_human_move(lines: &mut impl Iterator<Item = io::Result<String>>, state: &GameState) -> Result<usize> {
    loop {
        print!("Your move (1-{}, or \"ai\"): ", WIDTH);
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => bail!("input closed before the game ended"),
        };
        let line = line.trim();

        if line.eq_ignore_ascii_case("ai") {
            let mut engine = MinimaxBot::default();
            let col = engine.select_move(state.board(), Pov::of(state.next_side()));
            println!("The engine plays column {} for you.", col + 1);
            return Ok(col);
        }

        match line.parse::<usize>() {
            Ok(n) if (1..=WIDTH).contains(&n) && state.board().legal_move(n - 1) => return Ok(n - 1),
            _ => println!("Illegal move, please try again."),
        }
    }
}

fn print_board(board: &Board) {
    println!();
    for row in 0..HEIGHT {
        for col in 0..WIDTH {
            match board.cell(col, row) {
                Some(Side::X) => print!("|{}", "●".red()),
                Some(Side::O) => print!("|{}", "●".yellow()),
                None => print!("|."),
            }
        }
        println!("|");
    }
    for col in 0..WIDTH {
        print!(" {}", col + 1);
    }
    println!();
    println!();
}
