//! Winning line analysis for Tic-Tac-Toe

use super::{CELL_COUNT, Cell, Player};

/// Winning line indices on the 3x3 board, in evaluation priority order.
///
/// The first line whose cells all hold the same marker decides the winner,
/// and the marker is read from the line's first listed cell.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [6, 4, 2], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Find the first completed line in priority order and the player holding it
    pub fn first_winning_line(cells: &[Cell; CELL_COUNT]) -> Option<([usize; 3], Player)> {
        WINNING_LINES.into_iter().find_map(|line| {
            let first = cells[line[0]];
            let complete = first != Cell::Empty && line.iter().all(|&idx| cells[idx] == first);
            if complete {
                first.to_player().map(|player| (line, player))
            } else {
                None
            }
        })
    }

    /// Check if a player has three in a row anywhere on the board
    pub fn has_won(cells: &[Cell; CELL_COUNT], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_won_horizontal() {
        let mut cells = [Cell::Empty; CELL_COUNT];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;

        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
    }

    #[test]
    fn test_has_won_vertical() {
        let mut cells = [Cell::Empty; CELL_COUNT];
        cells[0] = Cell::O;
        cells[3] = Cell::O;
        cells[6] = Cell::O;

        assert!(LineAnalyzer::has_won(&cells, Player::O));
        assert!(!LineAnalyzer::has_won(&cells, Player::X));
    }

    #[test]
    fn test_anti_diagonal_reports_line_as_listed() {
        let mut cells = [Cell::Empty; CELL_COUNT];
        cells[2] = Cell::O;
        cells[4] = Cell::O;
        cells[6] = Cell::O;

        let (line, player) = LineAnalyzer::first_winning_line(&cells).unwrap();
        assert_eq!(line, [6, 4, 2]);
        assert_eq!(player, Player::O);
    }

    #[test]
    fn test_first_line_in_priority_order_wins() {
        // X X X
        // X . .
        // X . .
        let mut cells = [Cell::Empty; CELL_COUNT];
        for idx in [0, 1, 2, 3, 6] {
            cells[idx] = Cell::X;
        }

        let (line, _) = LineAnalyzer::first_winning_line(&cells).unwrap();
        assert_eq!(line, [0, 1, 2]);
    }

    #[test]
    fn test_no_winning_line_on_empty_board() {
        let cells = [Cell::Empty; CELL_COUNT];
        assert!(LineAnalyzer::first_winning_line(&cells).is_none());
    }
}
