//! Rule-engine properties checked over every reachable position

mod common;

use common::board;
use noughts::{
    Board, Cell, Error, IllegalMoveReason, Move, Player,
    tictactoe::{CELLS, reachable_boards},
};

#[test]
fn utility_matches_winner_on_terminal_boards() {
    for b in reachable_boards().into_iter().filter(Board::is_terminal) {
        let expected = match b.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => {
                assert_eq!(b.empty_count(), 0, "terminal without winner must be full:\n{b}");
                0
            }
        };
        assert_eq!(b.utility().unwrap(), expected, "wrong utility for\n{b}");
    }
}

#[test]
fn utility_is_rejected_on_non_terminal_boards() {
    for b in reachable_boards().into_iter().filter(|b| !b.is_terminal()) {
        assert!(matches!(b.utility(), Err(Error::NotTerminal { .. })));
    }
}

#[test]
fn two_distinct_opening_moves_always_apply() {
    for first in Move::all() {
        for second in Move::all().filter(|&m| m != first) {
            let b = Board::initial()
                .apply(first)
                .and_then(|b| b.apply(second))
                .unwrap_or_else(|e| panic!("{first} then {second} failed: {e}"));
            assert_eq!(b.occupied_count(), 2);
            assert_eq!(b.player_to_move(), Player::X);
        }
    }
}

#[test]
fn illegal_moves_are_rejected_everywhere() {
    let off_board = [
        Move::new(3, 0),
        Move::new(0, 3),
        Move::new(3, 3),
        Move::new(usize::MAX, 1),
        Move::new(1, 100),
    ];

    for b in reachable_boards() {
        for mv in off_board {
            match b.apply(mv) {
                Err(Error::IllegalMove { reason, mv: rejected, board }) => {
                    assert_eq!(reason, IllegalMoveReason::OutOfBounds);
                    assert_eq!(rejected, mv);
                    assert_eq!(board, b);
                }
                other => panic!("{mv} on\n{b}\nshould be out of bounds, got {other:?}"),
            }
        }

        for idx in (0..CELLS).filter(|&i| b.cells()[i] != Cell::Empty) {
            let mv = Move::from_index(idx);
            assert!(
                matches!(
                    b.apply(mv),
                    Err(Error::IllegalMove {
                        reason: IllegalMoveReason::Occupied,
                        ..
                    })
                ),
                "{mv} on\n{b}\nshould be occupied"
            );
        }
    }
}

#[test]
fn turns_alternate() {
    assert_eq!(Board::initial().player_to_move(), Player::X);

    for b in reachable_boards().into_iter().filter(|b| !b.is_terminal()) {
        let mover = b.player_to_move();
        for mv in b.legal_moves() {
            let child = b.apply(mv).unwrap();
            assert_eq!(child.player_to_move(), mover.opponent());
            assert_eq!(child.get(mv), Some(mover.to_cell()));
        }
    }
}

#[test]
fn legal_moves_are_exactly_the_empty_cells() {
    for b in reachable_boards() {
        let moves = b.legal_moves();
        assert_eq!(moves.len(), b.empty_count());
        assert!(moves.windows(2).all(|w| w[0] < w[1]), "not row-major on\n{b}");
    }
}

#[test]
fn terminal_iff_winner_or_full() {
    for b in reachable_boards() {
        assert_eq!(b.is_terminal(), b.winner().is_some() || b.empty_count() == 0);
    }
}

#[test]
fn winner_scan_is_deterministic() {
    // X completes a row and a column with the same move
    let b = board("XXX/XOO/XOO");
    assert_eq!(b.winner(), Some(Player::X));
    assert_eq!(b.utility().unwrap(), 1);
}
