//! Move application, win detection and outcome scoring

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Cell, Move, Player},
    lines::LineAnalyzer,
};
use crate::error::IllegalMoveReason;

/// Outcome of a position, always recomputed from the cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Draw,
}

impl Outcome {
    /// Utility from X's perspective: +1 X won, -1 O won, 0 draw.
    ///
    /// `None` while the game is still in progress.
    pub fn utility(self) -> Option<i32> {
        match self {
            Outcome::Win(Player::X) => Some(1),
            Outcome::Win(Player::O) => Some(-1),
            Outcome::Draw => Some(0),
            Outcome::InProgress => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }
}

impl Board {
    /// Play `mv` for the player to move and return the resulting board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IllegalMove`] if the row or column is outside
    /// `0..=2` or the target cell is occupied.
    #[must_use = "apply returns a new board and leaves this one unchanged"]
    pub fn apply(&self, mv: Move) -> Result<Board, crate::Error> {
        let illegal = |reason| crate::Error::IllegalMove {
            mv,
            board: *self,
            reason,
        };

        let index = mv.index().ok_or_else(|| illegal(IllegalMoveReason::OutOfBounds))?;
        if self.cells()[index] != Cell::Empty {
            return Err(illegal(IllegalMoveReason::Occupied));
        }

        Ok(self.place(index))
    }

    /// Every legal move paired with the board it produces, row-major
    pub fn successors(&self) -> impl Iterator<Item = (Move, Board)> + '_ {
        self.cells()
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(move |(idx, _)| (Move::from_index(idx), self.place(idx)))
    }

    /// The owner of the first completed line (rows, then columns, then diagonals)
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::first_completed(self.cells()).map(|(player, _)| player)
    }

    /// Check if a player has a completed line
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(self.cells(), player)
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_terminal()
    }

    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(player) => Outcome::Win(player),
            None if self.empty_count() == 0 => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }

    /// Utility of a terminal board from X's perspective.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotTerminal`] when the game is still in
    /// progress; asking for the utility of such a board is a caller bug.
    pub fn utility(&self) -> Result<i32, crate::Error> {
        self.outcome()
            .utility()
            .ok_or(crate::Error::NotTerminal { board: *self })
    }
}
