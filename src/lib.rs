//! Minimax search with alpha-beta pruning for Tic-Tac-Toe
//!
//! This crate provides:
//! - A fixed 3x3 board model with terminal-state evaluation
//! - Minimax game-tree search with optional alpha-beta pruning and call counting
//! - Move selection for an automated player
//! - A benchmark comparing pruned and unpruned search
//! - A command-line front end for benchmarking and position analysis

pub mod benchmark;
pub mod cli;
pub mod error;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{SearchResult, choose_automated_move, minimax};
pub use tictactoe::{Board, BoardOutcome, Player};
