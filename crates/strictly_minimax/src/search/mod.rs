//! Adversarial search over the full game tree.
//!
//! X maximizes utility and O minimizes it. Two strategies are available and
//! both pick the same move for every position:
//!
//! - [`Strategy::Minimax`] visits every reachable position.
//! - [`Strategy::AlphaBeta`] skips subtrees that cannot change the result.
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Action, Searcher, Strategy};
//!
//! let board = "XO./OX./...".parse().unwrap();
//! let outcome = Searcher::new(Strategy::AlphaBeta).search(&board).unwrap();
//! assert_eq!(outcome.action, Action::new(2, 2));
//! assert_eq!(outcome.value, 1);
//! ```

mod alphabeta;
mod exhaustive;

use crate::error::{EngineError, PreconditionKind};
use crate::invariants::check_board;
use crate::moves::player;
use crate::rules::{terminal, utility, winner};
use crate::transition::successors;
use crate::types::{Action, Board, Player, Utility};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Starting value for a running maximum; below every real utility.
const BELOW_MIN: Utility = -2;

/// Starting value for a running minimum; above every real utility.
const ABOVE_MAX: Utility = 2;

/// How the search explores the tree.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Strategy {
    /// Exhaustive minimax.
    Minimax,
    /// Minimax with alpha-beta pruning.
    #[default]
    AlphaBeta,
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, the root included.
    pub nodes: u64,
    /// Terminal positions scored.
    pub leaves: u64,
    /// Subtrees skipped by pruning.
    pub cutoffs: u64,
}

/// Best move found for a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// The move to play.
    pub action: Action,
    /// Utility reached with optimal play from both sides after `action`.
    pub value: Utility,
    /// Work done to find it.
    pub stats: SearchStats,
}

/// Runs searches with a fixed strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Searcher {
    strategy: Strategy,
}

impl Searcher {
    /// Creates a searcher using `strategy`.
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// Returns the strategy in use.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Finds the optimal move for the player to move on `board`.
    ///
    /// A move that wins on the spot is played without further search.
    /// Otherwise every legal move is scored and the best one is kept, ties
    /// going to the earliest move in row-major order.
    ///
    /// # Errors
    ///
    /// Returns a precondition [`EngineError`] if the board is terminal or
    /// could not arise from legal play.
    #[instrument(skip(self, board), fields(strategy = %self.strategy))]
    pub fn search(&self, board: &Board) -> Result<SearchOutcome, EngineError> {
        if let Err(violations) = check_board(board) {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(EngineError::from(PreconditionKind::MalformedBoard(
                descriptions,
            )));
        }
        if terminal(board) {
            return Err(EngineError::from(PreconditionKind::TerminalBoard));
        }

        let mover = player(board);
        let mut stats = SearchStats {
            nodes: 1,
            ..SearchStats::default()
        };

        if let Some((action, child)) = successors(board).find(|(_, child)| winner(child) == Some(mover)) {
            stats.nodes += 1;
            stats.leaves += 1;
            debug!(%action, "Immediate win");
            return Ok(SearchOutcome {
                action,
                value: utility(&child),
                stats,
            });
        }

        let mut best: Option<(Action, Utility)> = None;
        for (action, child) in successors(board) {
            let bound = best.map(|(_, value)| value);
            let value = self.evaluate(&child, mover, bound, &mut stats);
            let improves = match (bound, mover) {
                (None, _) => true,
                (Some(best_value), Player::X) => value > best_value,
                (Some(best_value), Player::O) => value < best_value,
            };
            if improves {
                best = Some((action, value));
            }
            if self.strategy == Strategy::AlphaBeta && best.map(|(_, v)| v) == Some(ideal(mover)) {
                stats.cutoffs += 1;
                break;
            }
        }

        let (action, value) =
            best.ok_or_else(|| EngineError::from(PreconditionKind::TerminalBoard))?;
        debug!(
            %action,
            value,
            nodes = stats.nodes,
            leaves = stats.leaves,
            cutoffs = stats.cutoffs,
            "Search complete"
        );
        Ok(SearchOutcome {
            action,
            value,
            stats,
        })
    }

    /// Scores the position `mover` reaches after one move.
    ///
    /// `bound` is the best value found among earlier siblings; pruning only
    /// needs to know whether a later move beats it.
    fn evaluate(
        &self,
        child: &Board,
        mover: Player,
        bound: Option<Utility>,
        stats: &mut SearchStats,
    ) -> Utility {
        match (self.strategy, mover) {
            (Strategy::Minimax, Player::X) => exhaustive::min_value(child, stats),
            (Strategy::Minimax, Player::O) => exhaustive::max_value(child, stats),
            (Strategy::AlphaBeta, Player::X) => {
                alphabeta::min_value(child, bound.unwrap_or(BELOW_MIN), ABOVE_MAX, stats)
            }
            (Strategy::AlphaBeta, Player::O) => {
                alphabeta::max_value(child, BELOW_MIN, bound.unwrap_or(ABOVE_MAX), stats)
            }
        }
    }
}

/// Best utility `player` could hope for.
fn ideal(player: Player) -> Utility {
    match player {
        Player::X => 1,
        Player::O => -1,
    }
}

/// Returns the optimal action for the player to move, by exhaustive minimax.
///
/// # Errors
///
/// Returns a precondition [`EngineError`] if the board is terminal or
/// malformed.
#[instrument(skip(board))]
pub fn minimax(board: &Board) -> Result<Action, EngineError> {
    Searcher::new(Strategy::Minimax)
        .search(board)
        .map(|outcome| outcome.action)
}

/// Value of `board` for X to move: its utility if terminal, otherwise the
/// best value X can force.
#[instrument(level = "trace", skip(board))]
pub fn max_value(board: &Board) -> Utility {
    exhaustive::max_value(board, &mut SearchStats::default())
}

/// Value of `board` for O to move: its utility if terminal, otherwise the
/// lowest value O can force.
#[instrument(level = "trace", skip(board))]
pub fn min_value(board: &Board) -> Utility {
    exhaustive::min_value(board, &mut SearchStats::default())
}
