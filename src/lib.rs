//! Exhaustive minimax search for Tic-Tac-Toe
//!
//! This crate provides:
//! - An immutable 3x3 board model with turn inference and validation
//! - Rules: move application, win/terminal detection and utility scoring
//! - A minimax searcher with an immediate-win shortcut and an injectable
//!   opening-move chooser
//! - A small CLI host for solving positions, playing and exporting policies

pub mod cli;
pub mod error;
pub mod search;
pub mod tictactoe;

pub use error::{Error, IllegalMoveReason, Result};
pub use search::{SearchConfig, Searcher, ShortcutScope, best_move};
pub use tictactoe::{Board, Cell, Game, Move, Outcome, Player};
