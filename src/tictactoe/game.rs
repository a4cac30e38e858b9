//! High-level game management

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Move, Player},
    rules::Outcome,
};

/// A move together with the player who made it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayedMove {
    pub mv: Move,
    pub player: Player,
}

/// A game in progress with its move history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    initial: Board,
    current: Board,
    moves: Vec<PlayedMove>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Self::from_board(Board::initial())
    }

    /// Continue a game from an arbitrary position
    pub fn from_board(board: Board) -> Self {
        Game {
            initial: board,
            current: board,
            moves: Vec::new(),
        }
    }

    /// Play a move for whoever is to move
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game has ended, or the
    /// [`crate::Error::IllegalMove`] raised by [`Board::apply`].
    pub fn play(&mut self, mv: Move) -> Result<Outcome, crate::Error> {
        if self.current.is_terminal() {
            return Err(crate::Error::GameOver);
        }

        let player = self.current.player_to_move();
        self.current = self.current.apply(mv)?;
        self.moves.push(PlayedMove { mv, player });

        Ok(self.current.outcome())
    }

    pub fn current(&self) -> &Board {
        &self.current
    }

    pub fn initial(&self) -> &Board {
        &self.initial
    }

    pub fn moves(&self) -> &[PlayedMove] {
        &self.moves
    }

    pub fn outcome(&self) -> Outcome {
        self.current.outcome()
    }

    pub fn is_over(&self) -> bool {
        self.current.is_terminal()
    }

    /// Get the sequence of board states, starting with the initial board
    ///
    /// # Errors
    ///
    /// Returns error if a recorded move no longer applies, which indicates
    /// corrupted game data (e.g. a hand-edited serialized game).
    pub fn state_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        let mut board = self.initial;
        states.push(board);

        for played in &self.moves {
            board = board.apply(played.mv)?;
            states.push(board);
        }

        Ok(states)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
