//! Solve command - Score every move in a position

use anyhow::Result;
use clap::Parser;

use super::MarkerArg;
use crate::{
    cli::output::{print_board, print_kv, print_section},
    search::{choose_move, rank_moves},
    tictactoe::{Board, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Score every available move in a position")]
pub struct SolveArgs {
    /// Board as 9 cells (`.` empty, `X`, `O`), row by row
    #[arg(long, short = 'b', default_value = ".........")]
    pub board: String,

    /// Player to move
    #[arg(long, value_enum, default_value = "o")]
    pub player: MarkerArg,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    let player = Player::from(args.player);

    print_section(&format!("Position ({player} to move)"));
    print_board(&board);

    let outcome = board.evaluate();
    print_kv("Outcome", &outcome.to_string());
    if outcome.is_terminal() {
        println!("\nThe game is over; there is nothing to choose.");
        return Ok(());
    }

    println!("\nCandidate moves:");
    for candidate in rank_moves(&board, player) {
        println!(
            "  position {} (row {}, col {}): score {:>3}, {} calls",
            candidate.position + 1,
            candidate.position / 3 + 1,
            candidate.position % 3 + 1,
            candidate.score,
            candidate.calls
        );
    }

    if let Some(best) = choose_move(&board, player) {
        println!();
        print_kv("Best move", &format!("position {}", best.position + 1));
    }

    Ok(())
}
