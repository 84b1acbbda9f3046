//! Board representation, move application and terminal-state evaluation

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;
use crate::{Error, Result};

/// Number of cells on the board
pub const CELL_COUNT: usize = 9;

/// Highest valid position index
pub const POSITION_MAX: usize = CELL_COUNT - 1;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player whose marker occupies this cell, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player marker. `Empty` is a cell state, never a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// Terminal-state classification of a board.
///
/// Always recomputed from the cells by [`Board::evaluate`]; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardOutcome {
    Open,
    Tie,
    XWins,
    OWins,
}

impl BoardOutcome {
    fn win_for(player: Player) -> Self {
        match player {
            Player::X => BoardOutcome::XWins,
            Player::O => BoardOutcome::OWins,
        }
    }

    /// The winning player for a decisive outcome
    pub fn winner(self) -> Option<Player> {
        match self {
            BoardOutcome::XWins => Some(Player::X),
            BoardOutcome::OWins => Some(Player::O),
            BoardOutcome::Open | BoardOutcome::Tie => None,
        }
    }

    /// Whether the game has concluded (win or tie)
    pub fn is_terminal(self) -> bool {
        self != BoardOutcome::Open
    }
}

impl fmt::Display for BoardOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            BoardOutcome::Open => "Open",
            BoardOutcome::Tie => "Tie",
            BoardOutcome::XWins => "X wins",
            BoardOutcome::OWins => "O wins",
        };
        f.write_str(text)
    }
}

/// Fixed 3x3 grid of cells.
///
/// The search mutates a board in place (apply, recurse, undo); between calls the
/// owner sees the board exactly as it handed it over. `Board` is `Copy` since it is
/// only 9 bytes, so callers that must not observe transient mutation can hand the
/// search a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a blank board with every cell empty
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Create a board from a string representation.
    ///
    /// Whitespace is ignored; the remaining text must hold exactly 9 cell characters
    /// (`.`, `_` or `-` for empty, `X`/`x`, `O`/`o`/`0`). Piece counts are not
    /// validated, so the search can be pointed at arbitrary positions.
    ///
    /// # Errors
    ///
    /// Returns error if the length is wrong or a character is not a cell.
    pub fn from_string(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != CELL_COUNT {
            return Err(Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Get the cells in position order
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// All positions holding an empty cell, ascending
    pub fn available_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == Cell::Empty).count()
    }

    /// Check whether a marker already occupies `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if `pos` is outside 0-8.
    pub fn is_position_taken(&self, pos: usize) -> Result<bool> {
        if pos > POSITION_MAX {
            return Err(Error::InvalidPosition { position: pos });
        }
        Ok(self.cells[pos] != Cell::Empty)
    }

    /// Classify the board.
    ///
    /// Lines are checked in [`WINNING_LINES`](super::WINNING_LINES) order and the
    /// first complete one decides the winner. Without a winner the board is a tie
    /// once no empty cell remains, otherwise it is open.
    pub fn evaluate(&self) -> BoardOutcome {
        if let Some((_, player)) = LineAnalyzer::first_winning_line(&self.cells) {
            return BoardOutcome::win_for(player);
        }

        if self.cells.contains(&Cell::Empty) {
            BoardOutcome::Open
        } else {
            BoardOutcome::Tie
        }
    }

    /// Place `player` on `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of range or the cell is not empty. Callers must only
    /// pass positions taken from [`available_positions`](Self::available_positions);
    /// use [`place`](Self::place) for unvalidated input.
    pub fn apply_move(&mut self, pos: usize, player: Player) {
        assert!(pos <= POSITION_MAX, "position {pos} should be between 0 and 8");
        assert!(
            self.cells[pos] == Cell::Empty,
            "position {pos} should be empty before a move is applied"
        );
        self.cells[pos] = player.to_cell();
    }

    /// Clear `pos`, reverting a previous [`apply_move`](Self::apply_move).
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of range or the cell is already empty.
    pub fn undo_move(&mut self, pos: usize) {
        assert!(pos <= POSITION_MAX, "position {pos} should be between 0 and 8");
        assert!(
            self.cells[pos] != Cell::Empty,
            "position {pos} should hold a marker before it is undone"
        );
        self.cells[pos] = Cell::Empty;
    }

    /// Checked counterpart of [`apply_move`](Self::apply_move) for untrusted input.
    ///
    /// # Errors
    ///
    /// Returns error if `pos` is out of range or already occupied.
    pub fn place(&mut self, pos: usize, player: Player) -> Result<()> {
        if self.is_position_taken(pos)? {
            return Err(Error::InvalidMove { position: pos });
        }
        self.cells[pos] = player.to_cell();
        Ok(())
    }

    /// Compact single-line encoding, e.g. `XO.......`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < POSITION_MAX {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
