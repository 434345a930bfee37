//! Engine error types.

use crate::types::{Action, Player};
use derive_more::{Display, Error, From};

/// Why an action cannot be applied to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidActionKind {
    /// A coordinate lies outside `0..3`.
    #[display("{} is off the board", _0)]
    OutOfBounds(Action),
    /// The addressed cell already holds a mark.
    #[display("{} is already occupied by {}", action, mark)]
    Occupied {
        /// The rejected action.
        action: Action,
        /// The mark found in the cell.
        mark: Player,
    },
}

/// A caller-side precondition that did not hold.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum PreconditionKind {
    /// Search was asked for a move on a finished game.
    #[display("the board is terminal, there is no move to make")]
    TerminalBoard,
    /// The board could not arise from legal alternating play.
    #[display("malformed board: {}", _0)]
    MalformedBoard(String),
}

/// Category of an [`EngineError`].
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum EngineErrorKind {
    /// The action addressed an occupied or off-board cell.
    #[display("Invalid action: {}", _0)]
    InvalidAction(InvalidActionKind),
    /// The engine was called with arguments it cannot serve.
    #[display("Precondition failed: {}", _0)]
    Precondition(PreconditionKind),
}

/// Engine error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Engine error: {} at {}:{}", kind, file, line)]
pub struct EngineError {
    /// What went wrong.
    pub kind: EngineErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EngineError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    pub fn new(kind: impl Into<EngineErrorKind>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind: kind.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error category.
    pub fn kind(&self) -> &EngineErrorKind {
        &self.kind
    }

    /// Checks if this error rejects an action.
    pub fn is_invalid_action(&self) -> bool {
        matches!(self.kind, EngineErrorKind::InvalidAction(_))
    }

    /// Checks if this error reports a violated precondition.
    pub fn is_precondition(&self) -> bool {
        matches!(self.kind, EngineErrorKind::Precondition(_))
    }
}

impl From<InvalidActionKind> for EngineError {
    #[track_caller]
    fn from(kind: InvalidActionKind) -> Self {
        Self::new(kind)
    }
}

impl From<PreconditionKind> for EngineError {
    #[track_caller]
    fn from(kind: PreconditionKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_records_location() {
        let err = EngineError::new(PreconditionKind::TerminalBoard);
        assert!(err.file.ends_with("error.rs"));
        assert!(err.line > 0);
        assert!(err.is_precondition());
        assert!(!err.is_invalid_action());
    }

    #[test]
    fn test_error_display() {
        let err = EngineError::from(InvalidActionKind::Occupied {
            action: Action::new(1, 1),
            mark: Player::O,
        });
        let shown = err.to_string();
        assert!(shown.starts_with("Engine error: Invalid action: (1, 1) is already occupied by O"));
    }
}
