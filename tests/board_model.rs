//! Board model invariants checked over every reachable position

mod common;

use tictactoe_minimax::tictactoe::{
    Board, BoardOutcome, CELL_COUNT, LineAnalyzer, Player, WINNING_LINES,
};

mod evaluation {
    use super::*;

    #[test]
    fn test_never_two_winners_on_reachable_boards() {
        for board in common::reachable_boards() {
            let x = LineAnalyzer::has_won(board.cells(), Player::X);
            let o = LineAnalyzer::has_won(board.cells(), Player::O);
            assert!(!(x && o), "both players won on\n{board}");

            match board.evaluate() {
                BoardOutcome::XWins => assert!(x && !o),
                BoardOutcome::OWins => assert!(o && !x),
                BoardOutcome::Tie | BoardOutcome::Open => assert!(!x && !o),
            }
        }
    }

    #[test]
    fn test_tie_only_on_full_board_without_win() {
        for board in common::reachable_boards() {
            let full = board.available_positions().is_empty();
            let won = board.evaluate().winner().is_some();
            assert_eq!(
                board.evaluate() == BoardOutcome::Tie,
                full && !won,
                "unexpected classification for\n{board}"
            );
        }
    }

    #[test]
    fn test_reachable_position_count() {
        // 5478 legal positions with X first; the O-first set mirrors it
        let boards = common::reachable_boards();
        assert!(boards.len() > 5478);
    }

    #[test]
    fn test_opposing_player_completes_row() {
        // X to move with two in a row and the third cell open
        let mut board = Board::from_string("XX.OO....").unwrap();
        assert_eq!(board.evaluate(), BoardOutcome::Open);

        board.apply_move(2, Player::X);
        assert_eq!(board.evaluate(), BoardOutcome::XWins);
    }

    #[test]
    fn test_every_winning_line_detected() {
        for line in WINNING_LINES {
            for player in [Player::X, Player::O] {
                let mut board = Board::new();
                for &pos in &line {
                    board.apply_move(pos, player);
                }
                assert_eq!(board.evaluate().winner(), Some(player), "line {line:?}");
            }
        }
    }
}

mod moves {
    use super::*;

    #[test]
    fn test_apply_undo_is_identity_on_reachable_boards() {
        for board in common::reachable_boards() {
            for pos in board.available_positions() {
                for player in [Player::X, Player::O] {
                    let mut copy = board;
                    copy.apply_move(pos, player);
                    assert_ne!(copy, board);
                    copy.undo_move(pos);
                    assert_eq!(copy, board);
                }
            }
        }
    }

    #[test]
    fn test_is_position_taken_matches_available_positions() {
        let board = Board::from_string("XO..X..O.").unwrap();
        let available = board.available_positions();
        for pos in 0..CELL_COUNT {
            assert_eq!(board.is_position_taken(pos).unwrap(), !available.contains(&pos));
        }
        assert!(board.is_position_taken(CELL_COUNT).is_err());
        assert!(board.is_position_taken(usize::MAX).is_err());
    }
}
