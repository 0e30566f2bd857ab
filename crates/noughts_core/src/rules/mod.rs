//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board. Status is always derived from
//! the board here and never stored alongside it.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, check_winner, winning_line};

use super::{Board, GameStatus};
use tracing::instrument;

/// Classifies a board as won, drawn or still in progress.
#[instrument]
pub fn status(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_status_top_row_win() {
        let board: Board = "XXXOO____".parse().unwrap();
        assert_eq!(status(&board), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_status_draw() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(status(&board), GameStatus::Draw);
    }

    #[test]
    fn test_status_in_progress() {
        assert_eq!(status(&Board::new()), GameStatus::InProgress);
        let board: Board = "XO__X____".parse().unwrap();
        assert_eq!(status(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_win_on_last_square_is_not_a_draw() {
        let board: Board = "XOXOXOOXX".parse().unwrap();
        assert_eq!(status(&board), GameStatus::Won(Player::X));
    }
}
