//! Error types
//!
//! None of these escape the game state machine: request methods turn them
//! into a user-facing notice after restoring a consistent state.

use thiserror::Error;

use crate::board::{Move, Pos};

/// Failure to read a move written as `"a1->c3"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("expected two coordinates separated by '->'")]
    MissingSeparator,
    #[error("missing coordinate")]
    MissingCoordinate,
    #[error("invalid column letter '{0}'")]
    InvalidColumn(char),
    #[error("invalid row number '{0}'")]
    InvalidRow(String),
    #[error("coordinate '{0}' is off the board")]
    OffBoard(String),
}

/// A rejected selection or move request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Invalid move: no piece of yours on {pos}")]
    InvalidSelection { pos: Pos },
    #[error("Invalid move: ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },
    #[error("Invalid move: {0}")]
    MalformedCoordinate(#[from] NotationError),
    #[error("Invalid move: {mv} is not legal")]
    IllegalMove { mv: Move },
    #[error("The game is over")]
    GameOver,
}

/// Rejected startup configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size may only be of size 8, 10, or 16 (got {0})")]
    UnsupportedBoardSize(usize),
    #[error("timeout must be an integer greater than 0")]
    InvalidTimeout,
    #[error("search depth must be at least 1")]
    InvalidDepth,
}

impl ConfigError {
    /// Process exit code reported for this error. Code 3 is reserved for a
    /// bad player colour, which the argument parser rejects.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigError::UnsupportedBoardSize(_) => 1,
            ConfigError::InvalidTimeout => 2,
            ConfigError::InvalidDepth => 4,
        }
    }
}
