//! Tic-Tac-Toe board model and rules

pub mod board;
pub mod game;
pub mod lines;
pub mod rules;
pub mod validation;

pub use board::{Board, CELLS, Cell, Move, Player, SIZE};
pub use game::{Game, PlayedMove};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use rules::Outcome;
pub use validation::reachable_boards;
