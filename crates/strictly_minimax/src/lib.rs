//! Strictly Minimax - optimal tic-tac-toe by exhaustive game-tree search.
//!
//! The engine is a set of pure functions over an immutable [`Board`] value.
//!
//! # Architecture
//!
//! - **Queries**: [`initial_state`], [`player`], [`actions`], [`winner`],
//!   [`terminal`], [`utility`]
//! - **Transition**: [`result`] returns a new board, never mutating its input
//! - **Search**: [`minimax`] with the mutually recursive [`max_value`] and
//!   [`min_value`]; [`Searcher`] adds alpha-beta pruning and statistics
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{initial_state, minimax, result, terminal, utility};
//!
//! # fn main() -> Result<(), strictly_minimax::EngineError> {
//! let mut board = initial_state();
//! while !terminal(&board) {
//!     let action = minimax(&board)?;
//!     board = result(&board, action)?;
//! }
//! // Perfect play from both sides is a draw.
//! assert_eq!(utility(&board), 0);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod invariants;
mod moves;
mod rules;
mod search;
mod transition;
mod types;

// Crate-level exports - Domain types
pub use types::{
    Action, BOARD_SIZE, Board, Cell, GameStatus, NUM_CELLS, ParseActionError, ParseBoardError,
    Player, Utility,
};

// Crate-level exports - Errors
pub use error::{EngineError, EngineErrorKind, InvalidActionKind, PreconditionKind};

// Crate-level exports - Board queries
pub use moves::{actions, initial_state, player};
pub use rules::{Line, has_won, is_draw, is_full, status, terminal, utility, winner, winning_line};

// Crate-level exports - Transition
pub use transition::result;

// Crate-level exports - Invariants
pub use invariants::{Invariant, InvariantViolation, MarksAlternate, SingleWinner, check_board};

// Crate-level exports - Search
pub use search::{
    SearchOutcome, SearchStats, Searcher, Strategy, max_value, min_value, minimax,
};
