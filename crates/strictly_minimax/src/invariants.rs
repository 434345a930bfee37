//! Board invariants.
//!
//! Invariants are logical properties every board reached through legal
//! alternating play satisfies. The search refuses boards that break them.

use crate::rules::has_won;
use crate::types::{Board, Player};
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// X has placed as many marks as O, or exactly one more.
pub struct MarksAlternate;

impl Invariant<Board> for MarksAlternate {
    fn holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X must have as many marks as O or exactly one more"
    }
}

/// At most one player owns a complete line.
pub struct SingleWinner;

impl Invariant<Board> for SingleWinner {
    fn holds(board: &Board) -> bool {
        !(has_won(board, Player::X) && has_won(board, Player::O))
    }

    fn description() -> &'static str {
        "X and O cannot both have three in a row"
    }
}

/// Checks every board invariant, collecting all violations.
#[instrument(skip(board))]
pub fn check_board(board: &Board) -> Result<(), Vec<InvariantViolation>> {
    let mut violations = Vec::new();

    if !MarksAlternate::holds(board) {
        violations.push(InvariantViolation::new(MarksAlternate::description()));
    }

    if !SingleWinner::holds(board) {
        violations.push(InvariantViolation::new(SingleWinner::description()));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        warn!(count = violations.len(), "Board violates invariants");
        Err(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_valid() {
        assert!(check_board(&Board::new()).is_ok());
    }

    #[test]
    fn test_too_many_o_marks() {
        let board: Board = "OO./X../...".parse().unwrap();
        assert!(!MarksAlternate::holds(&board));
        let violations = check_board(&board).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, MarksAlternate::description());
    }

    #[test]
    fn test_x_too_far_ahead() {
        let board: Board = "XX./.../...".parse().unwrap();
        assert!(!MarksAlternate::holds(&board));
    }

    #[test]
    fn test_two_winners() {
        let board: Board = "XXX/OOO/...".parse().unwrap();
        assert!(MarksAlternate::holds(&board));
        assert!(!SingleWinner::holds(&board));
        let violations = check_board(&board).unwrap_err();
        assert_eq!(violations[0].description, SingleWinner::description());
    }
}
