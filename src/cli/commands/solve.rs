//! Solve command - Evaluate every legal move of a position

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        config::CommonArgs,
        output::{describe_value, print_kv, print_section, render_board},
    },
    search::{MoveValue, SearchConfig, SearchStats, Searcher},
    tictactoe::{Board, Move, Outcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate every legal move of a position")]
pub struct SolveArgs {
    /// Board as nine cells of X, O and '.', rows optionally separated by '/'
    /// (e.g. "XX./OO./...")
    pub board: String,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Full analysis of a single position
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    pub board: String,
    pub to_move: Player,
    pub outcome: Outcome,
    /// Minimax value of the position, absent for terminal boards
    pub value: Option<i32>,
    pub moves: Vec<MoveValue>,
    /// The move the engine plays
    pub choice: Option<Move>,
    pub stats: SearchStats,
}

/// Analyze `board` with a searcher built from `config`
pub fn solve(board: &Board, config: SearchConfig) -> SolveReport {
    let mut searcher = Searcher::from_config(config);

    let moves = searcher.evaluate_moves(board);
    let value = (!board.is_terminal()).then(|| searcher.value(board));
    let choice = searcher.best_move(board);

    SolveReport {
        board: board.encode(),
        to_move: board.player_to_move(),
        outcome: board.outcome(),
        value,
        moves,
        choice,
        stats: searcher.stats(),
    }
}

pub fn execute(args: SolveArgs, common: &CommonArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    let report = solve(&board, common.search_config());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section("Position");
    print!("{}", render_board(&board));

    if let Some(utility) = report.outcome.utility() {
        println!();
        print_kv("Result", describe_value(utility));
        return Ok(());
    }

    print_kv("To move", &report.to_move.to_string());
    if let Some(value) = report.value {
        print_kv("Value", &format!("{value} ({})", describe_value(value)));
    }

    print_section("Moves");
    for entry in &report.moves {
        let marker = if Some(entry.mv) == report.choice { "  <- engine" } else { "" };
        println!(
            "  {} -> {:>2} ({}){marker}",
            entry.mv,
            entry.value,
            describe_value(entry.value)
        );
    }

    if let (true, Some(mv)) = (board.is_initial(), report.choice) {
        println!("\nOpening move {mv} was drawn at random");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_reports_every_move() {
        let board = Board::from_string("XOX/X../O.O").unwrap();
        let report = solve(&board, SearchConfig::default());

        assert_eq!(report.to_move, Player::X);
        assert_eq!(report.value, Some(0));
        assert_eq!(report.choice, Some(Move::new(2, 1)));
        assert_eq!(
            report.moves,
            vec![
                MoveValue { mv: Move::new(1, 1), value: -1 },
                MoveValue { mv: Move::new(1, 2), value: -1 },
                MoveValue { mv: Move::new(2, 1), value: 0 },
            ]
        );
    }

    #[test]
    fn test_solve_terminal_board() {
        let board = Board::from_string("XXX/OO./...").unwrap();
        let report = solve(&board, SearchConfig::default());

        assert_eq!(report.outcome, Outcome::Win(Player::X));
        assert_eq!(report.value, None);
        assert_eq!(report.choice, None);
        assert!(report.moves.is_empty());
    }

    #[test]
    fn test_report_serializes() {
        let board = Board::from_string("XX./OO./...").unwrap();
        let report = solve(&board, SearchConfig::default());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["board"], "XX.OO....");
        assert_eq!(json["choice"]["row"], 0);
        assert_eq!(json["choice"]["col"], 2);
        assert_eq!(json["value"], 1);
    }
}
