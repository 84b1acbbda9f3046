//! Move selection for automated players
//!
//! Each candidate move is applied to a scratch copy of the board and scored with a
//! pruned [`minimax`] search from the opponent's point of view (the opponent is on
//! move and minimizing). The caller's board is never modified; applying the chosen
//! move is left to the caller.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::minimax::{Score, minimax};
use crate::{
    Result,
    tictactoe::{Board, Game, Player},
};

/// Marker played by the computer
pub const AUTOMATED_PLAYER: Player = Player::O;

/// Marker played by the human (or other opposing) side
pub const OPPOSING_PLAYER: Player = Player::X;

/// A candidate move with its search score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveScore {
    pub position: usize,
    pub score: Score,
    /// Evaluator calls spent scoring this move
    pub calls: u64,
}

/// Score every available move for `player`, in ascending position order.
pub fn rank_moves(board: &Board, player: Player) -> Vec<MoveScore> {
    let available = board.available_positions();
    let depth = available.len() as u32;
    let mut scratch = *board;

    available
        .into_iter()
        .map(|position| {
            scratch.apply_move(position, player);
            let result = minimax(&mut scratch, depth, false, player.opponent(), true);
            scratch.undo_move(position);

            MoveScore {
                position,
                score: result.score,
                calls: result.calls,
            }
        })
        .collect()
}

/// Pick the best move for `player`.
///
/// The highest score wins; among equal scores the lowest position is kept.
/// Returns `None` only when the board has no empty cell. Callers should not ask
/// for a move on a terminal board.
pub fn choose_move(board: &Board, player: Player) -> Option<MoveScore> {
    let mut best: Option<MoveScore> = None;

    for candidate in rank_moves(board, player) {
        if best.is_none_or(|current| candidate.score > current.score) {
            best = Some(candidate);
        }
    }

    if let Some(choice) = best {
        debug!(
            player = %player,
            position = choice.position,
            score = choice.score,
            calls = choice.calls,
            "selected move"
        );
    }

    best
}

/// Pick the computer's move on `board`.
pub fn choose_automated_move(board: &Board) -> Option<usize> {
    choose_move(board, AUTOMATED_PLAYER).map(|choice| choice.position)
}

/// Play a complete game where both sides use [`choose_move`].
///
/// # Errors
///
/// Returns error if a selected move is rejected by the game, which would indicate
/// a selector bug.
pub fn play_self_game(first: Player) -> Result<Game> {
    let mut game = Game::new(first);

    while !game.outcome().is_terminal() {
        let Some(choice) = choose_move(game.board(), game.to_move()) else {
            break;
        };
        game.play(choice.position)?;
    }

    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::BoardOutcome;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn test_takes_immediate_win() {
        // O O .
        // X X .
        // X . .
        let position = board("OO.XX.X..");
        assert_eq!(choose_automated_move(&position), Some(2));
    }

    #[test]
    fn test_blocks_opponent_threat() {
        // X X .
        // . O .
        // . . .
        let position = board("XX..O....");
        assert_eq!(choose_automated_move(&position), Some(2));
    }

    #[test]
    fn test_ties_keep_lowest_position() {
        // Every reply to a centre opening draws with best play except the edges,
        // so the first corner (position 0) is chosen.
        let position = board("....X....");
        let ranked = rank_moves(&position, AUTOMATED_PLAYER);
        let best = ranked.iter().map(|m| m.score).max().unwrap();
        let first_best = ranked.iter().find(|m| m.score == best).unwrap().position;

        assert_eq!(choose_automated_move(&position), Some(first_best));
        assert_eq!(first_best, 0);
    }

    #[test]
    fn test_caller_board_is_untouched() {
        let position = board("X...O...X");
        let copy = position;
        choose_move(&position, Player::O);
        assert_eq!(position, copy);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let full = board("XOXXOOOXX");
        assert_eq!(choose_automated_move(&full), None);
        assert!(rank_moves(&full, AUTOMATED_PLAYER).is_empty());
    }

    #[test]
    fn test_rank_moves_ascending() {
        let position = board("X.O.X.O..");
        let positions: Vec<usize> = rank_moves(&position, Player::X)
            .iter()
            .map(|m| m.position)
            .collect();
        assert_eq!(positions, vec![1, 3, 5, 7, 8]);
    }

    #[test]
    fn test_self_play_draws() {
        for first in [Player::X, Player::O] {
            let game = play_self_game(first).unwrap();
            assert_eq!(game.outcome(), BoardOutcome::Tie);
            assert_eq!(game.moves().len(), 9);
        }
    }
}
