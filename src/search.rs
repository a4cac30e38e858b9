//! Game-tree search: exhaustive minimax with an immediate-win shortcut

pub mod config;
pub mod minimax;
pub mod opening;

pub use config::{SearchConfig, ShortcutScope};
pub use minimax::{MoveValue, SearchStats, Searcher};
pub use opening::{FixedOpening, NoOpening, OpeningChooser, RandomOpening};

use crate::tictactoe::{Board, Move};

/// An optimal move for the player to act, using a default [`Searcher`].
///
/// On the empty board the move is drawn at random; everywhere else the
/// answer is reproducible. Returns `None` when the board is terminal.
///
/// # Examples
///
/// ```
/// use noughts::{search::best_move, tictactoe::{Board, Move}};
///
/// let board = Board::from_string("XX./OO./...").unwrap();
/// assert_eq!(best_move(&board), Some(Move::new(0, 2)));
/// ```
pub fn best_move(board: &Board) -> Option<Move> {
    Searcher::new().best_move(board)
}
