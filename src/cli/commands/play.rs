//! Play command - Play against the engine, or watch it play itself

use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};

use crate::{
    cli::{
        config::CommonArgs,
        output::{describe_value, render_board},
    },
    search::{OpeningChooser, SearchConfig, Searcher},
    tictactoe::{Game, Move, Outcome, Player},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum HumanSide {
    /// Human plays X and moves first
    X,
    /// Human plays O
    O,
    /// Engine plays both sides
    None,
}

impl HumanSide {
    fn player(self) -> Option<Player> {
        match self {
            HumanSide::X => Some(Player::X),
            HumanSide::O => Some(Player::O),
            HumanSide::None => None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Play a game against the engine")]
pub struct PlayArgs {
    /// Which side the human controls
    #[arg(long, value_enum, default_value_t = HumanSide::X)]
    pub human: HumanSide,
}

pub fn execute(args: PlayArgs, common: &CommonArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut searcher = Searcher::from_config(common.search_config());
    run_game(
        &mut stdin.lock(),
        &mut stdout.lock(),
        args.human.player(),
        &mut searcher,
    )?;
    Ok(())
}

/// Run one game to completion.
///
/// The human side reads one move per line from `input` as `row,col`;
/// illegal or malformed moves are reported and asked for again.
pub fn run_game<R, W, C>(
    input: &mut R,
    output: &mut W,
    human: Option<Player>,
    searcher: &mut Searcher<C>,
) -> Result<Game>
where
    R: BufRead,
    W: Write,
    C: OpeningChooser,
{
    let mut game = Game::new();

    while !game.is_over() {
        let board = *game.current();
        let mover = board.player_to_move();
        writeln!(output, "\n{}", render_board(&board))?;

        let mv = if human == Some(mover) {
            prompt_move(input, output, &game)?
        } else {
            let Some(mv) = searcher.best_move(&board) else {
                bail!("engine found no move on a non-terminal board:\n{board}");
            };
            debug!(%mv, nodes = searcher.stats().nodes, "engine move");
            writeln!(output, "{mover} plays {mv}")?;
            mv
        };

        game.play(mv)?;
    }

    let board = *game.current();
    writeln!(output, "\n{}", render_board(&board))?;
    match game.outcome() {
        Outcome::Win(player) => writeln!(output, "{player} wins")?,
        Outcome::Draw => writeln!(output, "It's a draw")?,
        Outcome::InProgress => {}
    }
    if let Some(utility) = game.outcome().utility() {
        info!(result = describe_value(utility), moves = game.moves().len(), "game over");
    }

    Ok(game)
}

fn prompt_move<R: BufRead, W: Write>(input: &mut R, output: &mut W, game: &Game) -> Result<Move> {
    let mover = game.current().player_to_move();
    loop {
        write!(output, "{mover} to move (row,col): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed before the game ended");
        }

        let mv = match line.trim().parse::<Move>() {
            Ok(mv) => mv,
            Err(e) => {
                writeln!(output, "{e}")?;
                continue;
            }
        };

        match game.current().apply(mv) {
            Ok(_) => return Ok(mv),
            Err(e) => writeln!(output, "{e}")?,
        }
    }
}

/// Engine self-play from the empty board with the given configuration
pub fn self_play(config: SearchConfig) -> Result<Game> {
    let mut searcher = Searcher::from_config(config);
    let mut sink = io::sink();
    run_game(&mut io::empty(), &mut sink, None, &mut searcher)
}
