//! Game logic and rules for tic-tac-toe.

use super::position::Position;
use super::rules::{self, Line};
use super::types::{Board, BoardError, GameStatus, Player};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::Occupied(pos) => MoveError::SquareOccupied(pos),
        }
    }
}

/// Tic-tac-toe game engine.
///
/// Status is derived from the board on every query, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    current_player: Player,
    /// Positions played, in order.
    history: Vec<Position>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.current_player
    }

    /// Returns the derived status.
    pub fn status(&self) -> GameStatus {
        rules::status(&self.board)
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// The completed line, if the game has been won.
    pub fn winning_line(&self) -> Option<Line> {
        rules::winning_line(&self.board).map(|(_, line)| line)
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Places the current player's mark at `pos` and passes the turn.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once the game has ended and
    /// [`MoveError::SquareOccupied`] if the square is taken.
    #[instrument(skip(self), fields(player = %self.to_move()))]
    pub fn make_move(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        self.board.set(pos, player)?;
        self.history.push(pos);
        self.current_player = player.opponent();

        debug!(status = ?self.status(), "Move applied");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternating_players() {
        let mut game = Game::new();
        assert_eq!(game.to_move(), Player::X);
        game.make_move(Position::Center).unwrap();
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.history(), &[Position::Center]);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut game = Game::new();
        game.make_move(Position::Center).unwrap();
        assert_eq!(
            game.make_move(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut game = Game::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ] {
            game.make_move(pos).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert_eq!(
            game.winning_line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
        assert_eq!(game.make_move(Position::BottomRight), Err(MoveError::GameOver));
    }
}
