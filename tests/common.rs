//! Common test utilities: reachable board enumeration and sampling.

#![allow(dead_code)]

use std::collections::HashSet;

use rand::{Rng, SeedableRng, rngs::StdRng};
use tictactoe_minimax::tictactoe::{Board, Player};

/// Every board reachable from a blank board by legal alternating play,
/// for either player moving first. Play stops at terminal boards.
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut boards = Vec::new();

    for first in [Player::X, Player::O] {
        let mut stack = vec![(Board::new(), first)];
        while let Some((board, to_move)) = stack.pop() {
            if !seen.insert((board, to_move)) {
                continue;
            }
            boards.push(board);

            if board.evaluate().is_terminal() {
                continue;
            }
            for pos in board.available_positions() {
                let mut next = board;
                next.apply_move(pos, to_move);
                stack.push((next, to_move.opponent()));
            }
        }
    }

    boards
}

/// A seeded generator so sampled properties are reproducible
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Play random legal moves from a blank board, stopping after `plies` moves or
/// at a terminal board. Returns the board and the player on move.
pub fn random_position(rng: &mut StdRng, plies: usize) -> (Board, Player) {
    let mut board = Board::new();
    let mut to_move = if rng.random_bool(0.5) {
        Player::X
    } else {
        Player::O
    };

    for _ in 0..plies {
        if board.evaluate().is_terminal() {
            break;
        }
        let available = board.available_positions();
        let pos = available[rng.random_range(0..available.len())];
        board.apply_move(pos, to_move);
        to_move = to_move.opponent();
    }

    (board, to_move)
}
