//! The transition function: one move applied to a board.

use crate::error::{EngineError, InvalidActionKind};
use crate::moves::{actions, player};
use crate::types::{Action, Board, Cell};
use tracing::{debug, instrument};

/// Returns the board reached when the player to move marks `action`.
///
/// `board` is left untouched; the returned board is a fresh copy.
///
/// # Errors
///
/// Returns an invalid-action [`EngineError`] if either coordinate is off the
/// board or the cell is already occupied.
#[instrument(skip(board))]
pub fn result(board: &Board, action: Action) -> Result<Board, EngineError> {
    match board.get(action) {
        None => {
            debug!("Rejecting off-board action");
            Err(EngineError::from(InvalidActionKind::OutOfBounds(action)))
        }
        Some(Cell::Occupied(mark)) => {
            debug!(%mark, "Rejecting move onto occupied cell");
            Err(EngineError::from(InvalidActionKind::Occupied { action, mark }))
        }
        Some(Cell::Empty) => Ok(board.with_mark(action, player(board))),
    }
}

/// Every legal action paired with the board it produces, in `actions` order.
pub(crate) fn successors(board: &Board) -> impl Iterator<Item = (Action, Board)> + '_ {
    let mover = player(board);
    actions(board)
        .into_iter()
        .map(move |action| (action, board.with_mark(action, mover)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineErrorKind;
    use crate::types::Player;

    #[test]
    fn test_result_places_current_player() {
        let board = Board::new();
        let next = result(&board, Action::new(1, 1)).unwrap();
        assert_eq!(next.get(Action::new(1, 1)), Some(Cell::Occupied(Player::X)));

        let after = result(&next, Action::new(0, 0)).unwrap();
        assert_eq!(after.get(Action::new(0, 0)), Some(Cell::Occupied(Player::O)));
    }

    #[test]
    fn test_result_leaves_input_untouched() {
        let board: Board = "X../.O./...".parse().unwrap();
        let before = board;
        let next = result(&board, Action::new(2, 2)).unwrap();
        assert_eq!(board, before);
        let changed: Vec<Action> = board
            .iter()
            .zip(next.iter())
            .filter(|((_, a), (_, b))| a != b)
            .map(|((action, _), _)| action)
            .collect();
        assert_eq!(changed, vec![Action::new(2, 2)]);
    }

    #[test]
    fn test_result_rejects_occupied() {
        let board: Board = "X../.../...".parse().unwrap();
        let err = result(&board, Action::new(0, 0)).unwrap_err();
        assert_eq!(
            err.kind,
            EngineErrorKind::InvalidAction(InvalidActionKind::Occupied {
                action: Action::new(0, 0),
                mark: Player::X,
            })
        );
    }

    #[test]
    fn test_result_rejects_out_of_bounds() {
        let board = Board::new();
        for action in [Action::new(3, 0), Action::new(0, 3), Action::new(7, 9)] {
            let err = result(&board, action).unwrap_err();
            assert_eq!(
                err.kind,
                EngineErrorKind::InvalidAction(InvalidActionKind::OutOfBounds(action))
            );
        }
    }

    #[test]
    fn test_successors_match_result() {
        let board: Board = "XO./.X./...".parse().unwrap();
        for (action, child) in successors(&board) {
            assert_eq!(result(&board, action).unwrap(), child);
        }
        assert_eq!(successors(&board).count(), 6);
    }
}
