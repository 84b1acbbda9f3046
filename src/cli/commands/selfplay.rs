//! Self-play command - Play a full game between two automated players

use anyhow::Result;
use clap::Parser;

use super::MarkerArg;
use crate::{
    cli::output::{print_board, print_kv, print_section},
    search::play_self_game,
    tictactoe::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Play a game where both sides use minimax")]
pub struct SelfPlayArgs {
    /// Player making the first move
    #[arg(long, value_enum, default_value = "x")]
    pub first: MarkerArg,

    /// Print the game record as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: SelfPlayArgs) -> Result<()> {
    let game = play_self_game(Player::from(args.first))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&game)?);
        return Ok(());
    }

    print_section("Self-play");
    for (ply, mv) in game.moves().iter().enumerate() {
        println!("  {:>2}. {} -> position {}", ply + 1, mv.player, mv.position + 1);
    }

    println!();
    print_board(game.board());
    print_kv("Outcome", &game.outcome().to_string());

    Ok(())
}
