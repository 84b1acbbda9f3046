//! Tic-Tac-Toe minimax CLI
//!
//! - Benchmarking minimax with and without alpha-beta pruning
//! - Scoring every move in a position
//! - Automated self-play

use anyhow::Result;
use clap::{Parser, Subcommand};
use tictactoe_minimax::cli::{commands, config::CommonConfig};

#[derive(Parser)]
#[command(name = "ttt")]
#[command(version, about = "Minimax search with alpha-beta pruning for Tic-Tac-Toe", long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare minimax with and without alpha-beta pruning
    Benchmark(commands::benchmark::BenchmarkArgs),

    /// Score every available move in a position
    Solve(commands::solve::SolveArgs),

    /// Play a full game where both sides use minimax
    SelfPlay(commands::selfplay::SelfPlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.common.init_tracing();

    match cli.command {
        Commands::Benchmark(args) => commands::benchmark::execute(args, &cli.common),
        Commands::Solve(args) => commands::solve::execute(args),
        Commands::SelfPlay(args) => commands::selfplay::execute(args),
    }
}
