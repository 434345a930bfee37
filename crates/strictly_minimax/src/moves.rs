//! Turn derivation and move enumeration.

use crate::types::{Action, Board, Player};
use tracing::instrument;

/// Returns the starting position: an empty board.
#[instrument]
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player who moves next on `board`.
///
/// X moves first; afterwards whoever has strictly fewer marks is to move.
#[instrument(level = "trace", skip(board))]
pub fn player(board: &Board) -> Player {
    if board.count(Player::O) < board.count(Player::X) {
        Player::O
    } else {
        Player::X
    }
}

/// Lists every empty cell, row-major.
///
/// The order is stable and decides which of several equally good moves
/// the search picks.
#[instrument(level = "trace", skip(board))]
pub fn actions(board: &Board) -> Vec<Action> {
    board
        .iter()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(action, _)| action)
        .collect()
}
