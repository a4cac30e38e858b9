//! Board representation, moves and turn inference

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Number of cells on the board
pub const CELLS: usize = 9;

/// Side length of the board
pub const SIZE: usize = 3;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game. X always moves first and maximizes; O minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Whether this player maximizes the utility
    pub fn is_maximizer(self) -> bool {
        self == Player::X
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A `(row, col)` coordinate pair.
///
/// Coordinates are not range-checked on construction; [`Board::apply`] is the
/// single place where a move is validated against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }

    /// Build a move from a row-major cell index (0-8)
    pub const fn from_index(index: usize) -> Self {
        Move {
            row: index / SIZE,
            col: index % SIZE,
        }
    }

    /// Row-major cell index, or `None` when the move is off the board
    pub fn index(self) -> Option<usize> {
        (self.row < SIZE && self.col < SIZE).then(|| self.row * SIZE + self.col)
    }

    /// All nine cells in row-major order
    pub fn all() -> impl Iterator<Item = Move> {
        (0..CELLS).map(Move::from_index)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Move { row, col }
    }
}

impl FromStr for Move {
    type Err = crate::Error;

    /// Parse `"row,col"`, `"row col"` or `"(row, col)"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || crate::Error::InvalidMoveFormat {
            input: s.to_string(),
        };

        let parts: Vec<&str> = s
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')')
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        match parts.as_slice() {
            [row, col] => Ok(Move {
                row: row.parse().map_err(|_| invalid())?,
                col: col.parse().map_err(|_| invalid())?,
            }),
            _ => Err(invalid()),
        }
    }
}

/// An immutable 3x3 position.
///
/// The player to move is not stored: it is inferred from how many cells are
/// still empty. Every constructor upholds the alternating-turn invariant
/// (X count equals O count, or exceeds it by one), deserialization included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardCells", into = "BoardCells")]
pub struct Board {
    cells: [Cell; CELLS],
}

/// Unchecked wire form of a [`Board`]
#[derive(Serialize, Deserialize)]
struct BoardCells {
    cells: [Cell; CELLS],
}

impl TryFrom<BoardCells> for Board {
    type Error = crate::Error;

    fn try_from(raw: BoardCells) -> Result<Self, Self::Error> {
        Board::from_cells(raw.cells)
    }
}

impl From<Board> for BoardCells {
    fn from(board: Board) -> Self {
        BoardCells { cells: board.cells }
    }
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PieceCount {
    pub x: usize,
    pub o: usize,
    pub empty: usize,
}

impl Board {
    /// The empty starting position
    pub const fn initial() -> Self {
        Board {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Build a board from raw cells, checking that the position can arise
    /// from alternating play.
    ///
    /// # Errors
    ///
    /// Returns error if piece counts break the turn invariant or the
    /// position is otherwise unreachable.
    pub fn from_cells(cells: [Cell; CELLS]) -> Result<Self, crate::Error> {
        let board = Board { cells };
        board.validate()?;
        Ok(board)
    }

    /// Create a board from a string representation.
    ///
    /// The string must contain exactly 9 cells once whitespace and `/`
    /// separators are filtered out, e.g. `"XO./.X./..O"`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string does not hold exactly 9 cells
    /// - Any character is not a valid cell representation
    /// - The position breaks the alternating-turn invariant
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let compact: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        let chars = if compact.len() == CELLS {
            compact
        } else {
            // spaces stand for empty cells
            s.chars()
                .filter(|c| !matches!(c, '/' | '\n' | '\r' | '\t'))
                .collect()
        };

        if chars.len() != CELLS {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELLS,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELLS];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Self::from_cells(cells)
    }

    /// Raw cells in row-major order
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Get the cell at `(row, col)`, or `None` when off the board
    pub fn get(&self, mv: Move) -> Option<Cell> {
        mv.index().map(|idx| self.cells[idx])
    }

    pub(crate) fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        CELLS - self.empty_count()
    }

    /// Whether this is the empty starting position
    pub fn is_initial(&self) -> bool {
        *self == Board::initial()
    }

    /// The player whose turn it is.
    ///
    /// X moves whenever an odd number of cells is empty (9 on the empty
    /// board), O whenever the count is even.
    pub fn player_to_move(&self) -> Player {
        if self.empty_count() % 2 == 1 {
            Player::X
        } else {
            Player::O
        }
    }

    /// All empty cells in row-major order
    pub fn legal_moves(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Move::from_index(i))
            .collect()
    }

    /// Place the mover's mark at `index` without any checks.
    ///
    /// Callers guarantee `index` names an empty cell.
    pub(crate) fn place(&self, index: usize) -> Board {
        let mut next = *self;
        next.cells[index] = self.player_to_move().to_cell();
        next
    }

    /// Compact single-line encoding, e.g. `"XO..X...."`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_string(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(SIZE) && i < CELLS - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
