//! Policy export round-trip through a JSON file

mod common;

use common::board;
use noughts::{
    Move, Player, SearchConfig, ShortcutScope,
    cli::commands::export::{PolicyExport, build_policy, policy_positions, write_policy},
};

#[test]
fn exported_policy_reads_back() {
    let config = SearchConfig::new().with_seed(5);
    // Late positions only, to keep the search short
    let export = build_policy(config, &policy_positions(6), None);
    assert!(export.total_positions > 0);
    assert_eq!(export.total_positions, export.positions.len());

    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("policy.json");
    write_policy(&path, &export).expect("export should be written");

    let contents = std::fs::read_to_string(&path).unwrap();
    let parsed: PolicyExport = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed, export);
}

#[test]
fn exported_moves_are_legal_and_consistent() {
    let export = build_policy(SearchConfig::default(), &policy_positions(6), None);

    let mut sorted: Vec<_> = export.positions.iter().map(|e| e.board.clone()).collect();
    sorted.sort();
    assert_eq!(
        sorted,
        export.positions.iter().map(|e| e.board.clone()).collect::<Vec<_>>()
    );

    for entry in &export.positions {
        let b = board(&entry.board);
        assert!(!b.is_terminal());
        assert!(b.occupied_count() >= 6);
        assert_eq!(entry.to_move, b.player_to_move());
        assert!(b.apply(entry.best_move).is_ok(), "illegal move in {entry:?}");
    }

    let win = export
        .positions
        .iter()
        .find(|e| e.board == "XX.OO.X.O")
        .expect("position with X to move should be exported");
    assert_eq!(win.to_move, Player::X);
    assert_eq!(win.best_move, Move::new(0, 2));
    assert_eq!(win.value, 1);
}

#[test]
fn shortcut_scope_does_not_change_the_policy() {
    let root = build_policy(SearchConfig::default(), &policy_positions(5), None);
    let every = build_policy(
        SearchConfig::new().with_shortcut_scope(ShortcutScope::EveryLevel),
        &policy_positions(5),
        None,
    );
    assert_eq!(root.positions, every.positions);
}

#[test]
fn write_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("policy.json");
    let export = build_policy(SearchConfig::default(), &policy_positions(8), None);

    let err = write_policy(&path, &export).unwrap_err();
    assert!(err.to_string().contains("failed to create"));
}
