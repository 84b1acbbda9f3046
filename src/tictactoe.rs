//! Tic-Tac-Toe board model

pub mod board;
pub mod game;
pub mod lines;

pub use board::{Board, BoardOutcome, CELL_COUNT, Cell, POSITION_MAX, Player};
pub use game::{Game, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
