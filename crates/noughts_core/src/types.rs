//! Core domain types for tic-tac-toe.

use crate::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A mark on the board; also identifies the side that places it.
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
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
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

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// Error returned when writing to the board fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Squares are only ever filled, never overwritten.
    #[display("Square {} is already occupied", _0)]
    Occupied(#[error(not(source))] Position),
}

/// Error returned when a board cannot be parsed from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// The text did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(#[error(not(source))] usize),
    /// A character was not a mark or an empty-cell marker.
    #[display("Unexpected character '{}' at cell {}", ch, index)]
    BadCell {
        /// The offending character.
        ch: char,
        /// Cell index of the offending character.
        index: usize,
    },
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Fills an empty square with a mark.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Occupied`] if the square already holds a mark.
    pub fn set(&mut self, pos: Position, player: Player) -> Result<(), BoardError> {
        if !self.is_empty(pos) {
            return Err(BoardError::Occupied(pos));
        }
        self.squares[pos.to_index()] = Square::Occupied(player);
        Ok(())
    }

    /// Returns a copy of the board with `pos` marked, without checking occupancy.
    pub(crate) fn with_mark(mut self, pos: Position, player: Player) -> Self {
        self.squares[pos.to_index()] = Square::Occupied(player);
        self
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty positions in ascending index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|pos| self.is_empty(*pos))
    }

    /// Number of squares holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// The side to move, assuming X moved first.
    pub fn next_mark(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// True when no mark has been placed yet.
    pub fn is_blank(&self) -> bool {
        self.squares.iter().all(|s| *s == Square::Empty)
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based key so the grid doubles as a keypad.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells, row-major. `X`/`O` are marks; `.`, `_`, `-` and
    /// digits are empty. Whitespace, `|` and `,` are ignored.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != ',')
            .collect();
        if cells.len() != 9 {
            return Err(ParseBoardError::WrongLength(cells.len()));
        }

        let mut board = Board::new();
        for (index, ch) in cells.into_iter().enumerate() {
            board.squares[index] = match ch {
                'x' | 'X' => Square::Occupied(Player::X),
                'o' | 'O' => Square::Occupied(Player::O),
                '.' | '_' | '-' => Square::Empty,
                c if c.is_ascii_digit() => Square::Empty,
                ch => return Err(ParseBoardError::BadCell { ch, index }),
            };
        }
        Ok(board)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in &self.squares {
            let c = match square {
                Square::Empty => '.',
                Square::Occupied(Player::X) => 'X',
                Square::Occupied(Player::O) => 'O',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
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

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_rejects_occupied() {
        let mut board = Board::new();
        board.set(Position::Center, Player::X).unwrap();
        assert_eq!(
            board.set(Position::Center, Player::O),
            Err(BoardError::Occupied(Position::Center))
        );
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_parse_accepts_separators() {
        let board: Board = "X|X|X, O O _, 7 8 9".parse().unwrap();
        assert_eq!(board.count(Player::X), 3);
        assert_eq!(board.count(Player::O), 2);
        assert!(board.is_empty(Position::MiddleRight));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(ParseBoardError::WrongLength(2))
        );
        assert_eq!(
            "XOXOZ....".parse::<Board>(),
            Err(ParseBoardError::BadCell { ch: 'Z', index: 4 })
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let board: Board = "XO..X...O".parse().unwrap();
        assert_eq!(board.to_string(), "XO..X...O");
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_keypad_display() {
        let board: Board = "X...O....".parse().unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_empty_positions_ascending() {
        let board: Board = "XOXOX....".parse().unwrap();
        let empties: Vec<_> = board.empty_positions().map(Position::to_index).collect();
        assert_eq!(empties, vec![5, 6, 7, 8]);
    }

    #[test]
    fn test_next_mark_follows_counts() {
        assert_eq!(Board::new().next_mark(), Player::X);
        assert_eq!("X........".parse::<Board>().unwrap().next_mark(), Player::O);
        assert_eq!("XO.......".parse::<Board>().unwrap().next_mark(), Player::X);
    }

    #[test]
    fn test_player_parses_case_insensitively() {
        assert_eq!("x".parse::<Player>().unwrap(), Player::X);
        assert_eq!("O".parse::<Player>().unwrap(), Player::O);
        assert_eq!(Player::X.opponent(), Player::O);
    }
}
