//! Position validation and reachable-state enumeration

use std::collections::HashSet;

use super::{
    board::{Board, Player},
    lines::LineAnalyzer,
};

impl Board {
    /// Check that this position can arise from alternating play with X first.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPieceCounts`] when X does not have the
    /// same number of marks as O or exactly one more, and
    /// [`crate::Error::UnreachablePosition`] when the completed lines could
    /// not have been produced by a legal game.
    pub fn validate(&self) -> Result<(), crate::Error> {
        let count = self.count_pieces();
        if !(count.x == count.o || count.x == count.o + 1) {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        let unreachable = |reason: &str| crate::Error::UnreachablePosition {
            board: self.encode(),
            reason: reason.to_string(),
        };

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return Err(unreachable("both players cannot have winning lines"));
        }
        // The winner must have made the last move
        if x_wins && count.x != count.o + 1 {
            return Err(unreachable("X has a line but O moved last"));
        }
        if o_wins && count.x != count.o {
            return Err(unreachable("O has a line but X moved last"));
        }

        for player in [Player::X, Player::O] {
            if !self.winning_lines_share_cell(player) {
                return Err(unreachable(
                    "multiple winning lines must all pass through the final move",
                ));
            }
        }

        Ok(())
    }

    /// Check if the board state is valid according to Tic-Tac-Toe rules
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check if all winning lines for a player share at least one cell.
    /// This is necessary for multiple lines to be formed in a single move.
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let lines = LineAnalyzer::completed_lines(self.cells(), player);
        if lines.len() < 2 {
            return true;
        }

        (0..9).any(|pos| lines.iter().all(|line| line.contains(&pos)))
    }
}

/// Every position reachable from the empty board by legal play,
/// terminal positions included.
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut boards = Vec::new();
    let mut stack = vec![Board::initial()];

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        boards.push(board);

        if !board.is_terminal() {
            stack.extend(board.successors().map(|(_, child)| child));
        }
    }

    boards
}
