//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board: who has won, whether the game is
//! over, and how a finished game scores.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, has_won, winner, winning_line};

use crate::types::{Board, GameStatus, Player, Utility};
use tracing::instrument;

/// Checks if the game is over: someone has won or no empty cell remains.
#[instrument(level = "trace", skip(board))]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Scores a board: +1 if X has won, -1 if O has won, 0 otherwise.
///
/// Only meaningful on terminal boards; an unfinished game scores 0.
#[instrument(level = "trace", skip(board))]
pub fn utility(board: &Board) -> Utility {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

/// Classifies the board as in progress, won or drawn.
#[instrument(skip(board))]
pub fn status(board: &Board) -> GameStatus {
    match winner(board) {
        Some(player) => GameStatus::Won(player),
        None if is_full(board) => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}
