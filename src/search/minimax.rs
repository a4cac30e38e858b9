//! Exhaustive minimax over the remaining game tree

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use super::{
    config::{SearchConfig, ShortcutScope},
    opening::{OpeningChooser, RandomOpening},
};
use crate::tictactoe::{Board, Move, Outcome, Player};

/// A legal move and the minimax value of the position it leads to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveValue {
    pub mv: Move,
    pub value: i32,
}

/// Counters for the most recent search call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions whose value was looked up or computed
    pub nodes: u64,
    /// Times the immediate-win shortcut cut a node short
    pub shortcuts: u64,
}

/// Starting value for a fold over children: the worst possible for `mover`
fn worst_for(mover: Player) -> i32 {
    if mover.is_maximizer() { i32::MIN } else { i32::MAX }
}

fn prefer(mover: Player, current: i32, candidate: i32) -> i32 {
    if mover.is_maximizer() {
        current.max(candidate)
    } else {
        current.min(candidate)
    }
}

fn win_for(mover: Player) -> i32 {
    Outcome::Win(mover).utility().unwrap_or_default()
}

/// Minimax move selection for Tic-Tac-Toe.
///
/// X maximizes and O minimizes the utility (+1 X wins, -1 O wins, 0 draw).
/// Moves are enumerated row-major and ties go to the first move seen, so
/// every position except the empty board has a reproducible answer. The
/// empty board is delegated to the [`OpeningChooser`].
#[derive(Debug, Clone)]
pub struct Searcher<C = RandomOpening> {
    config: SearchConfig,
    opening: C,
    stats: SearchStats,
}

impl Searcher<RandomOpening> {
    /// Searcher with default configuration and an unseeded opening
    pub fn new() -> Self {
        Self::from_config(SearchConfig::default())
    }

    /// Searcher whose opening draw is seeded from `config.seed`, when set
    pub fn from_config(config: SearchConfig) -> Self {
        Self::with_opening(config, RandomOpening::from_seed(config.seed))
    }
}

impl Default for Searcher<RandomOpening> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: OpeningChooser> Searcher<C> {
    /// Searcher with a custom opening chooser
    pub fn with_opening(config: SearchConfig, opening: C) -> Self {
        Searcher {
            config,
            opening,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics of the last `best_move`, `value` or `evaluate_moves` call
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// An optimal move for the player to act, or `None` on a terminal board.
    #[instrument(level = "debug", skip_all, fields(board = %board.encode()))]
    pub fn best_move(&mut self, board: &Board) -> Option<Move> {
        self.stats = SearchStats::default();

        if board.is_terminal() {
            debug!("terminal position, no move");
            return None;
        }

        if board.is_initial() {
            if let Some(mv) = self.opening_move(board) {
                return Some(mv);
            }
        }

        let mover = board.player_to_move();
        let mut scored = Vec::with_capacity(board.empty_count());

        for (mv, child) in board.successors() {
            if child.winner() == Some(mover) {
                self.stats.nodes += 1;
                self.stats.shortcuts += 1;
                debug!(%mv, %mover, "immediate win");
                return Some(mv);
            }

            let value = self.minimax(&child);
            trace!(%mv, value, "evaluated root move");
            scored.push(MoveValue { mv, value });
        }

        let best = scored
            .iter()
            .fold(worst_for(mover), |acc, s| prefer(mover, acc, s.value));
        let choice = scored.iter().find(|s| s.value == best).map(|s| s.mv);

        debug!(
            %mover,
            value = best,
            nodes = self.stats.nodes,
            shortcuts = self.stats.shortcuts,
            "search complete"
        );
        choice
    }

    /// Minimax value of `board` from X's perspective.
    #[instrument(level = "debug", skip_all, fields(board = %board.encode()))]
    pub fn value(&mut self, board: &Board) -> i32 {
        self.stats = SearchStats::default();
        let value = self.minimax(board);
        debug!(value, nodes = self.stats.nodes, "value computed");
        value
    }

    /// Every legal move with the exact value of the resulting position,
    /// row-major. Empty on a terminal board.
    #[instrument(level = "debug", skip_all, fields(board = %board.encode()))]
    pub fn evaluate_moves(&mut self, board: &Board) -> Vec<MoveValue> {
        self.stats = SearchStats::default();

        if board.is_terminal() {
            return Vec::new();
        }

        let values: Vec<MoveValue> = board
            .successors()
            .map(|(mv, child)| MoveValue {
                mv,
                value: self.minimax(&child),
            })
            .collect();

        debug!(moves = values.len(), nodes = self.stats.nodes, "moves evaluated");
        values
    }

    /// All moves achieving the minimax optimum for the player to act
    pub fn optimal_moves(&mut self, board: &Board) -> Vec<Move> {
        let mover = board.player_to_move();
        let values = self.evaluate_moves(board);
        let best = values
            .iter()
            .fold(worst_for(mover), |acc, s| prefer(mover, acc, s.value));

        values
            .into_iter()
            .filter(|s| s.value == best)
            .map(|s| s.mv)
            .collect()
    }

    fn opening_move(&mut self, board: &Board) -> Option<Move> {
        let candidates = board.legal_moves();
        let picked = self
            .opening
            .choose(&candidates)
            .filter(|mv| candidates.contains(mv));

        match picked {
            Some(mv) => debug!(%mv, "opening move drawn"),
            None => debug!("opening chooser declined, searching empty board"),
        }
        picked
    }

    /// The recursive value function.
    ///
    /// Terminal children are scored directly; non-terminal children recurse.
    /// Under [`ShortcutScope::EveryLevel`] a node stops at the first child
    /// that wins for its mover, which is the best value it can reach anyway.
    fn minimax(&mut self, board: &Board) -> i32 {
        self.stats.nodes += 1;

        if let Some(utility) = board.outcome().utility() {
            return utility;
        }

        let mover = board.player_to_move();
        let shortcut = self.config.shortcut == ShortcutScope::EveryLevel;
        let mut best = worst_for(mover);

        for (_, child) in board.successors() {
            let value = match child.outcome().utility() {
                Some(utility) => {
                    self.stats.nodes += 1;
                    if shortcut && utility == win_for(mover) {
                        self.stats.shortcuts += 1;
                        return utility;
                    }
                    utility
                }
                None => self.minimax(&child),
            };
            best = prefer(mover, best, value);
        }

        best
    }
}
