//! Minimax game-tree search with optional alpha-beta pruning
//!
//! The search walks the full game tree below a position, applying each move in
//! place and undoing it before trying the next sibling. Scores are fixed-magnitude
//! outcome values rather than heuristic estimates: a tie is worth
//! [`TIE_SCORE`], a decisive result [`WIN_SCORE`] for or against the searching
//! player.
//!
//! Every invocation of the recursive evaluator, leaves included, is counted in
//! [`SearchResult::calls`]. The count is a performance metric only; it lets the
//! benchmark compare how much of the tree pruning skips.
//!
//! # Example
//!
//! ```
//! use tictactoe_minimax::search::minimax;
//! use tictactoe_minimax::tictactoe::{Board, Player};
//!
//! let mut board = Board::new();
//! let result = minimax(&mut board, 9, true, Player::O, true);
//! assert_eq!(result.score, 0); // perfect play draws
//! assert_eq!(board, Board::new());
//! ```

use serde::{Deserialize, Serialize};

use crate::tictactoe::{Board, BoardOutcome, Player};

/// Search score
pub type Score = i32;

/// Magnitude of a decisive outcome
pub const WIN_SCORE: Score = 10;

/// Score of a drawn position
pub const TIE_SCORE: Score = 0;

/// Lower alpha-beta bound
const NEG_INF: Score = Score::MIN;

/// Upper alpha-beta bound
const POS_INF: Score = Score::MAX;

/// Outcome of a search: the minimax score and how many evaluator calls produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Minimax value relative to the searching player
    pub score: Score,
    /// Recursive evaluator invocations, always at least 1
    pub calls: u64,
}

/// Evaluate `board` with `player` on move.
///
/// `maximizing` and `player` flip together at every ply, so a leaf is scored
/// relative to the player that started the search. Recursion stops at `depth == 0`
/// or at a terminal board, whichever comes first. With `use_alpha_beta_pruning`
/// the remaining siblings are skipped once `alpha >= beta`; the score is the same
/// either way and only [`SearchResult::calls`] changes.
///
/// The board is mutated during the search and restored before returning.
pub fn minimax(
    board: &mut Board,
    depth: u32,
    maximizing: bool,
    player: Player,
    use_alpha_beta_pruning: bool,
) -> SearchResult {
    #[cfg(debug_assertions)]
    let snapshot = *board;

    let result = minimax_aux(
        board,
        depth,
        maximizing,
        player,
        NEG_INF,
        POS_INF,
        use_alpha_beta_pruning,
    );

    #[cfg(debug_assertions)]
    debug_assert_eq!(*board, snapshot, "search must leave the board untouched");

    result
}

fn minimax_aux(
    board: &mut Board,
    depth: u32,
    maximizing: bool,
    player: Player,
    mut alpha: Score,
    mut beta: Score,
    use_alpha_beta_pruning: bool,
) -> SearchResult {
    let outcome = board.evaluate();

    if depth == 0 || outcome.is_terminal() {
        return SearchResult {
            score: stopping_score(outcome, maximizing, player),
            calls: 1,
        };
    }

    let mut best_score = if maximizing { NEG_INF } else { POS_INF };
    let mut total_calls = 0;

    for position in board.available_positions() {
        board.apply_move(position, player);
        // The opponent is on move one ply down, with the opposite role
        let child = minimax_aux(
            board,
            depth - 1,
            !maximizing,
            player.opponent(),
            alpha,
            beta,
            use_alpha_beta_pruning,
        );
        board.undo_move(position);

        total_calls += child.calls;

        // Strict comparison keeps the first-seen best on ties
        if maximizing {
            if child.score > best_score {
                best_score = child.score;
            }
            alpha = alpha.max(best_score);
        } else {
            if child.score < best_score {
                best_score = child.score;
            }
            beta = beta.min(best_score);
        }

        if use_alpha_beta_pruning && alpha >= beta {
            break;
        }
    }

    SearchResult {
        score: best_score,
        calls: total_calls + 1,
    }
}

/// Score a node where the search stops.
///
/// A win is positive when it favours the player that started the search: the
/// winner is on move while maximizing, or the winner is the other player while
/// minimizing. An open board reached with no depth left is scored as a tie, since
/// the evaluation has no heuristic for unfinished games.
fn stopping_score(outcome: BoardOutcome, maximizing: bool, player: Player) -> Score {
    match outcome.winner() {
        None => TIE_SCORE,
        Some(winner) => {
            let favourable = (winner == player && maximizing) || (winner != player && !maximizing);
            if favourable { WIN_SCORE } else { -WIN_SCORE }
        }
    }
}
