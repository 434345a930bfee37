//! Plain minimax: every reachable position is visited.

use super::{ABOVE_MAX, BELOW_MIN, SearchStats};
use crate::rules::{terminal, utility};
use crate::transition::successors;
use crate::types::{Board, Utility};

/// Value of `board` with X to move.
pub(super) fn max_value(board: &Board, stats: &mut SearchStats) -> Utility {
    stats.nodes += 1;
    if terminal(board) {
        stats.leaves += 1;
        return utility(board);
    }

    let mut value = BELOW_MIN;
    for (_, child) in successors(board) {
        value = value.max(min_value(&child, stats));
    }
    value
}

/// Value of `board` with O to move.
pub(super) fn min_value(board: &Board, stats: &mut SearchStats) -> Utility {
    stats.nodes += 1;
    if terminal(board) {
        stats.leaves += 1;
        return utility(board);
    }

    let mut value = ABOVE_MAX;
    for (_, child) in successors(board) {
        value = value.min(max_value(&child, stats));
    }
    value
}
