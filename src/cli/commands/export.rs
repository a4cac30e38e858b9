//! Export command - Write the engine's policy for every reachable position

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    cli::{config::CommonArgs, output::create_position_progress},
    search::{SearchConfig, Searcher},
    tictactoe::{Board, Move, Player, reachable_boards},
};

#[derive(Parser, Debug)]
#[command(about = "Export the engine's move for every reachable position")]
pub struct ExportArgs {
    /// Output JSON file
    pub output: PathBuf,

    /// Skip positions with fewer marks than this
    #[arg(long, default_value_t = 0)]
    pub min_marks: usize,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyEntry {
    pub board: String,
    pub to_move: Player,
    pub value: i32,
    pub best_move: Move,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyExport {
    pub description: String,
    pub config: SearchConfig,
    pub total_positions: usize,
    pub positions: Vec<PolicyEntry>,
}

/// Every reachable non-terminal position with at least `min_marks` marks,
/// sorted by encoded board
pub fn policy_positions(min_marks: usize) -> Vec<Board> {
    let mut boards: Vec<_> = reachable_boards()
        .into_iter()
        .filter(|b| !b.is_terminal() && b.occupied_count() >= min_marks)
        .collect();
    boards.sort_by_key(|b| b.encode());
    boards
}

/// Search each of `boards` and record the engine's move and value
pub fn build_policy(
    config: SearchConfig,
    boards: &[Board],
    progress: Option<&indicatif::ProgressBar>,
) -> PolicyExport {
    let mut searcher = Searcher::from_config(config);
    let mut positions = Vec::with_capacity(boards.len());

    for board in boards {
        let value = searcher.value(board);
        if let Some(best_move) = searcher.best_move(board) {
            positions.push(PolicyEntry {
                board: board.encode(),
                to_move: board.player_to_move(),
                value,
                best_move,
            });
        }
        if let Some(pb) = progress {
            pb.inc(1);
        }
    }

    PolicyExport {
        description: "Minimax move for every reachable non-terminal Tic-Tac-Toe position"
            .to_string(),
        config,
        total_positions: positions.len(),
        positions,
    }
}

/// Write `export` as pretty JSON
pub fn write_policy(path: &Path, export: &PolicyExport) -> crate::Result<()> {
    let file = File::create(path).map_err(|source| crate::Error::Io {
        operation: format!("create {}", path.display()),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, export)?;
    writer.flush().map_err(|source| crate::Error::Io {
        operation: format!("write {}", path.display()),
        source,
    })?;
    Ok(())
}

pub fn execute(args: ExportArgs, common: &CommonArgs) -> Result<()> {
    let config = common.search_config();
    let boards = policy_positions(args.min_marks);

    let progress = if args.no_progress {
        None
    } else {
        let pb = create_position_progress(boards.len() as u64)?;
        pb.set_message("searching");
        Some(pb)
    };

    let export = build_policy(config, &boards, progress.as_ref());
    if let Some(pb) = &progress {
        pb.finish_with_message("done");
    }

    write_policy(&args.output, &export)?;
    info!(
        positions = export.total_positions,
        path = %args.output.display(),
        "policy exported"
    );
    println!(
        "Exported {} positions to {}",
        export.total_positions,
        args.output.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_positions_filters_and_sorts() {
        let boards = policy_positions(8);
        assert!(!boards.is_empty());
        assert!(
            boards
                .iter()
                .all(|b| !b.is_terminal() && b.occupied_count() == 8)
        );

        let encoded: Vec<String> = boards.iter().map(Board::encode).collect();
        let mut sorted = encoded.clone();
        sorted.sort();
        assert_eq!(encoded, sorted);
    }

    #[test]
    fn test_build_policy_covers_each_board_once() {
        let boards = policy_positions(7);
        let pb = indicatif::ProgressBar::hidden();
        let export = build_policy(SearchConfig::default(), &boards, Some(&pb));

        assert_eq!(export.total_positions, boards.len());
        assert_eq!(pb.position(), boards.len() as u64);
        for (entry, board) in export.positions.iter().zip(&boards) {
            assert_eq!(entry.board, board.encode());
        }
    }
}
