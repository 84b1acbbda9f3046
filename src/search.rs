//! Game-tree search and automated move selection

pub mod minimax;
pub mod selector;

pub use minimax::{Score, SearchResult, TIE_SCORE, WIN_SCORE, minimax};
pub use selector::{
    AUTOMATED_PLAYER, MoveScore, OPPOSING_PLAYER, choose_automated_move, choose_move,
    play_self_game, rank_moves,
};
