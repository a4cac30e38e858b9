//! Shared helpers for the integration tests.

#![allow(dead_code)]

use noughts::{
    Board, Move, SearchConfig, Searcher,
    search::{MoveValue, NoOpening},
};

/// Parse a board, panicking on malformed fixtures
pub fn board(s: &str) -> Board {
    Board::from_string(s).unwrap_or_else(|e| panic!("bad fixture '{s}': {e}"))
}

/// A searcher that never draws a random opening
pub fn deterministic() -> Searcher<NoOpening> {
    Searcher::with_opening(SearchConfig::default(), NoOpening)
}

/// Value of the position reached by playing `mv`
pub fn child_value(searcher: &mut Searcher<NoOpening>, board: &Board, mv: Move) -> i32 {
    let child = board.apply(mv).expect("move under test should be legal");
    searcher.value(&child)
}

/// Best value among `values` for the player to move on `board`
pub fn optimum(board: &Board, values: &[MoveValue]) -> i32 {
    let iter = values.iter().map(|v| v.value);
    if board.player_to_move().is_maximizer() {
        iter.max().expect("non-terminal board has moves")
    } else {
        iter.min().expect("non-terminal board has moves")
    }
}
