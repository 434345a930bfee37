//! Minimax with alpha-beta pruning.
//!
//! Fail-soft: a returned value at or below `alpha` is an upper bound on the
//! true value, one at or above `beta` is a lower bound, and anything strictly
//! between the two is exact. The root relies on this to pick the same move
//! as the plain search.

use super::{ABOVE_MAX, BELOW_MIN, SearchStats};
use crate::rules::{terminal, utility};
use crate::transition::successors;
use crate::types::{Board, Utility};

/// Value of `board` with X to move, searched inside `(alpha, beta)`.
pub(super) fn max_value(
    board: &Board,
    mut alpha: Utility,
    beta: Utility,
    stats: &mut SearchStats,
) -> Utility {
    stats.nodes += 1;
    if terminal(board) {
        stats.leaves += 1;
        return utility(board);
    }

    let mut value = BELOW_MIN;
    for (_, child) in successors(board) {
        value = value.max(min_value(&child, alpha, beta, stats));
        if value >= beta {
            stats.cutoffs += 1;
            return value;
        }
        alpha = alpha.max(value);
    }
    value
}

/// Value of `board` with O to move, searched inside `(alpha, beta)`.
pub(super) fn min_value(
    board: &Board,
    alpha: Utility,
    mut beta: Utility,
    stats: &mut SearchStats,
) -> Utility {
    stats.nodes += 1;
    if terminal(board) {
        stats.leaves += 1;
        return utility(board);
    }

    let mut value = ABOVE_MAX;
    for (_, child) in successors(board) {
        value = value.min(max_value(&child, alpha, beta, stats));
        if value <= alpha {
            stats.cutoffs += 1;
            return value;
        }
        beta = beta.min(value);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::super::exhaustive;
    use super::*;

    #[test]
    fn test_full_window_is_exact() {
        let boards = [".../.../...", "X../.../...", "XO./.X./...", "XX./.O./..."];
        for text in boards {
            let board: Board = text.parse().unwrap();
            let mut plain = SearchStats::default();
            let mut pruned = SearchStats::default();
            assert_eq!(
                max_value(&board, BELOW_MIN, ABOVE_MAX, &mut pruned),
                exhaustive::max_value(&board, &mut plain),
                "{}",
                text
            );
            assert_eq!(
                min_value(&board, BELOW_MIN, ABOVE_MAX, &mut pruned),
                exhaustive::min_value(&board, &mut plain),
                "{}",
                text
            );
        }
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        let mut plain = SearchStats::default();
        let mut pruned = SearchStats::default();
        exhaustive::max_value(&Board::new(), &mut plain);
        max_value(&Board::new(), BELOW_MIN, ABOVE_MAX, &mut pruned);
        assert!(pruned.nodes < plain.nodes);
        assert!(pruned.cutoffs > 0);
        assert_eq!(plain.cutoffs, 0);
    }

    #[test]
    fn test_fail_low_is_an_upper_bound() {
        // X to move against a double threat: true value -1.
        let board: Board = "OO./OXX/.X.".parse().unwrap();
        let value = max_value(&board, 0, ABOVE_MAX, &mut SearchStats::default());
        assert!(value <= 0);
    }
}
