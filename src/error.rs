//! Error types for the minimax crate

use thiserror::Error;

/// Main error type for the crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("invalid move: position {position} is already occupied")]
    InvalidMove { position: usize },

    #[error("game already over")]
    GameOver,

    #[error("board string must have {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid benchmark configuration: {message}")]
    InvalidBenchmarkConfig { message: String },

    #[error("benchmark reference step took no measurable time")]
    ZeroReferenceTime,

    #[error("benchmark recorded zero {mode} minimax calls")]
    ZeroCallCount { mode: &'static str },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
