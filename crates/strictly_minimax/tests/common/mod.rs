//! Shared helpers for engine integration tests.

use std::collections::HashSet;
use strictly_minimax::{Board, actions, initial_state, result, terminal};

/// Every board reachable from the empty board through legal play,
/// terminal boards included.
pub fn reachable_boards() -> HashSet<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![initial_state()];
    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        if terminal(&board) {
            continue;
        }
        for action in actions(&board) {
            stack.push(result(&board, action).expect("listed action is legal"));
        }
    }
    seen
}
