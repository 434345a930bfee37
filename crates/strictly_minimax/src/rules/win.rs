//! Win detection logic for tic-tac-toe.

use crate::types::{Action, Board, Cell, Player};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the eight three-in-a-row lines.
///
/// Iteration order is rows, then diagonals, then columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display)]
pub enum Line {
    /// Row 0.
    #[strum(to_string = "top row")]
    TopRow,
    /// Row 1.
    #[strum(to_string = "middle row")]
    MiddleRow,
    /// Row 2.
    #[strum(to_string = "bottom row")]
    BottomRow,
    /// (0,0) to (2,2).
    #[strum(to_string = "diagonal")]
    Diagonal,
    /// (0,2) to (2,0).
    #[strum(to_string = "anti-diagonal")]
    AntiDiagonal,
    /// Column 0.
    #[strum(to_string = "left column")]
    LeftColumn,
    /// Column 1.
    #[strum(to_string = "center column")]
    CenterColumn,
    /// Column 2.
    #[strum(to_string = "right column")]
    RightColumn,
}

impl Line {
    /// The three cells making up this line.
    pub const fn cells(self) -> [Action; 3] {
        match self {
            Line::TopRow => [Action::new(0, 0), Action::new(0, 1), Action::new(0, 2)],
            Line::MiddleRow => [Action::new(1, 0), Action::new(1, 1), Action::new(1, 2)],
            Line::BottomRow => [Action::new(2, 0), Action::new(2, 1), Action::new(2, 2)],
            Line::Diagonal => [Action::new(0, 0), Action::new(1, 1), Action::new(2, 2)],
            Line::AntiDiagonal => [Action::new(0, 2), Action::new(1, 1), Action::new(2, 0)],
            Line::LeftColumn => [Action::new(0, 0), Action::new(1, 0), Action::new(2, 0)],
            Line::CenterColumn => [Action::new(0, 1), Action::new(1, 1), Action::new(2, 1)],
            Line::RightColumn => [Action::new(0, 2), Action::new(1, 2), Action::new(2, 2)],
        }
    }

    /// Returns the player owning all three cells of this line, if any.
    pub fn owner(self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.cells().map(|action| board.get(action));
        match a {
            Some(Cell::Occupied(player)) if a == b && b == c => Some(player),
            _ => None,
        }
    }
}

/// Returns the first complete line and its owner.
///
/// Lines are checked rows first, then both diagonals, then columns.
#[instrument(level = "trace", skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    Line::iter().find_map(|line| line.owner(board).map(|player| (player, line)))
}

/// Returns the player with three in a row, if any.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

/// Checks if `player` owns at least one complete line.
pub fn has_won(board: &Board, player: Player) -> bool {
    Line::iter().any(|line| line.owner(board) == Some(player))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_x_line(line: Line) -> Board {
        let mut rows = [[Cell::Empty; 3]; 3];
        for action in line.cells() {
            rows[action.row][action.col] = Cell::Occupied(Player::X);
        }
        Board::from_rows(rows)
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_every_line_detected() {
        assert_eq!(Line::iter().count(), 8);
        for line in Line::iter() {
            let board = board_with_x_line(line);
            assert_eq!(winning_line(&board), Some((Player::X, line)), "{}", line);
            assert!(has_won(&board, Player::X));
            assert!(!has_won(&board, Player::O));
        }
    }

    #[test]
    fn test_anti_diagonal_requires_all_three() {
        let board: Board = "..X/.X./...".parse().unwrap();
        assert_eq!(winner(&board), None);
        let board: Board = "..X/.X./X..".parse().unwrap();
        assert_eq!(winning_line(&board), Some((Player::X, Line::AntiDiagonal)));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XXO/.../...".parse().unwrap();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_winner_diagonal_o() {
        let board: Board = "OX./XO./X.O".parse().unwrap();
        assert_eq!(winning_line(&board), Some((Player::O, Line::Diagonal)));
    }
}
