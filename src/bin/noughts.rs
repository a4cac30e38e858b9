//! noughts CLI - Exhaustive minimax for Tic-Tac-Toe
//!
//! This CLI provides:
//! - Solving a position (value of every legal move)
//! - Playing against the engine
//! - Exporting the engine's policy for all reachable positions

use anyhow::Result;
use clap::{Parser, Subcommand};
use noughts::cli::{commands, config::CommonArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Minimax search engine for Tic-Tac-Toe", long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate every legal move of a position
    Solve(commands::solve::SolveArgs),

    /// Play a game against the engine
    Play(commands::play::PlayArgs),

    /// Export the engine's move for every reachable position
    Export(commands::export::ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.common.default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Solve(args) => commands::solve::execute(args, &cli.common),
        Commands::Play(args) => commands::play::execute(args, &cli.common),
        Commands::Export(args) => commands::export::execute(args, &cli.common),
    }
}
