//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board.
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Terminal score: +1 when X has won, -1 when O has won, 0 otherwise.
pub type Utility = i8;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first, maximizes).
    #[serde(alias = "x")]
    X,
    /// Player O (goes second, minimizes).
    #[serde(alias = "o")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A move coordinate: row and column, each expected in `0..3`.
///
/// An action is only meaningful against a particular board; nothing stops a
/// caller from building one that points off the grid, and
/// [`result`](crate::result) rejects those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    /// Row index (0 = top).
    pub row: usize,
    /// Column index (0 = left).
    pub col: usize,
}

impl Action {
    /// Creates a new action.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Checks that both coordinates lie on the board.
    pub fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Keypad number (1-9, row-major) for this action, if on the board.
    pub fn keypad(self) -> Option<usize> {
        self.in_bounds().then(|| self.row * BOARD_SIZE + self.col + 1)
    }

    /// Creates an action from a keypad number (1-9, row-major).
    pub fn from_keypad(number: usize) -> Option<Self> {
        (1..=NUM_CELLS)
            .contains(&number)
            .then(|| Self::new((number - 1) / BOARD_SIZE, (number - 1) % BOARD_SIZE))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error parsing an [`Action`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Cannot read {:?} as a move: expected `row,col` or a number 1-9", input)]
pub struct ParseActionError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Action {
    type Err = ParseActionError;

    /// Accepts `row,col`, `row col`, `(row, col)` or a keypad number 1-9.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseActionError {
            input: s.to_string(),
        };
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let parts: Vec<&str> = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        match parts.as_slice() {
            [number] => {
                let number = number.parse::<usize>().map_err(|_| err())?;
                Self::from_keypad(number).ok_or_else(err)
            }
            [row, col] => {
                let row = row.parse::<usize>().map_err(|_| err())?;
                let col = col.parse::<usize>().map_err(|_| err())?;
                Ok(Self::new(row, col))
            }
            _ => Err(err()),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: copying one yields an independent board, and
/// the public API never mutates a board in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub const fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates a board from explicit rows.
    pub const fn from_rows(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the cell addressed by `action`, or `None` if it is off the board.
    pub fn get(&self, action: Action) -> Option<Cell> {
        self.cells.get(action.row)?.get(action.col).copied()
    }

    /// Returns all cells as rows.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Iterates over every cell with its coordinate, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Action, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (Action::new(row, col), *cell))
        })
    }

    /// Counts the marks placed by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.iter()
            .filter(|(_, cell)| *cell == Cell::Occupied(player))
            .count()
    }

    /// Counts the empty cells.
    pub fn empty_count(&self) -> usize {
        self.iter().filter(|(_, cell)| cell.is_empty()).count()
    }

    /// Returns a copy of this board with `player`'s mark at `action`.
    ///
    /// Callers guarantee `action` addresses an empty cell on the board.
    pub(crate) fn with_mark(mut self, action: Action, player: Player) -> Self {
        self.cells[action.row][action.col] = Cell::Occupied(player);
        self
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell {
                    Cell::Empty => write!(f, "{}", row * BOARD_SIZE + col + 1)?,
                    Cell::Occupied(player) => write!(f, "{}", player)?,
                }
                if col < BOARD_SIZE - 1 {
                    f.write_str("|")?;
                }
            }
            if row < BOARD_SIZE - 1 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a [`Board`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// A character that is neither a mark, an empty marker nor a separator.
    #[display("Unexpected character {:?} in board", found)]
    InvalidCharacter {
        /// The offending character.
        found: char,
    },
    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", found)]
    WrongCellCount {
        /// Number of cells read.
        found: usize,
    },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Reads nine cells row-major.
    ///
    /// `X`/`O` (any case) are marks; `.`, `_` and the digits `1`-`9` are
    /// empty; whitespace, `/`, `|`, `+` and `-` separate. The output of
    /// [`Display`](fmt::Display) parses back to the same board.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(NUM_CELLS);
        for c in s.chars() {
            let cell = match c {
                'X' | 'x' => Cell::Occupied(Player::X),
                'O' | 'o' => Cell::Occupied(Player::O),
                '.' | '_' | '1'..='9' => Cell::Empty,
                '/' | '|' | '+' | '-' => continue,
                c if c.is_whitespace() => continue,
                found => return Err(ParseBoardError::InvalidCharacter { found }),
            };
            cells.push(cell);
        }

        if cells.len() != NUM_CELLS {
            return Err(ParseBoardError::WrongCellCount { found: cells.len() });
        }

        let mut board = Board::new();
        for (i, cell) in cells.into_iter().enumerate() {
            board.cells[i / BOARD_SIZE][i % BOARD_SIZE] = cell;
        }
        Ok(board)
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => f.write_str("in progress"),
            GameStatus::Won(player) => write!(f, "{} wins", player),
            GameStatus::Draw => f.write_str("draw"),
        }
    }
}
