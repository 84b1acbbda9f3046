//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Board, BoardOutcome, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// A game in progress with its move history.
///
/// The last recorded [`Move`] is what a presentation layer highlights; it is
/// carried here rather than in any global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    moves: Vec<Move>,
}

impl Game {
    /// Create a new game on a blank board with `first` to move
    pub fn new(first: Player) -> Self {
        Game {
            board: Board::new(),
            to_move: first,
            moves: Vec::new(),
        }
    }

    /// Play a move for the player whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns error if the game is already over or the position is invalid or occupied.
    pub fn play(&mut self, position: usize) -> Result<(), crate::Error> {
        if self.outcome().is_terminal() {
            return Err(crate::Error::GameOver);
        }

        self.board.place(position, self.to_move)?;
        self.moves.push(Move {
            position,
            player: self.to_move,
        });
        self.to_move = self.to_move.opponent();

        Ok(())
    }

    /// Current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Moves played so far
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Most recent move, if any
    pub fn last_move(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    /// Outcome of the current board
    pub fn outcome(&self) -> BoardOutcome {
        self.board.evaluate()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Player::X)
    }
}
