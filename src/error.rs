//! Error types for the noughts crate

use thiserror::Error;

use crate::tictactoe::{Board, Move};

/// Why a move was rejected by [`Board::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// Row or column is outside `0..=2`
    OutOfBounds,
    /// The target cell already holds a mark
    Occupied,
}

impl std::fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMoveReason::OutOfBounds => f.write_str("coordinates out of bounds (must be 0-2)"),
            IllegalMoveReason::Occupied => f.write_str("cell is already occupied"),
        }
    }
}

/// Main error type for the noughts crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move {mv} on board '{}': {reason}", .board.encode())]
    IllegalMove {
        mv: Move,
        board: Board,
        reason: IllegalMoveReason,
    },

    #[error("utility is undefined for non-terminal board '{}'", .board.encode())]
    NotTerminal { board: Board },

    #[error("game already over")]
    GameOver,

    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
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

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("unreachable position '{board}': {reason}")]
    UnreachablePosition { board: String, reason: String },

    #[error("invalid move '{input}' (expected 'row,col' with values 0-2)")]
    InvalidMoveFormat { input: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
