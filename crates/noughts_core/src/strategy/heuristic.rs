//! Rule-ordered opponent: win, center, block, first free.

use super::MoveSelector;
use crate::rules::LINES;
use crate::{Board, Player, Position, Square};
use tracing::{debug, instrument};

/// Local pattern matcher over the eight lines.
///
/// Rules, first match wins:
/// 1. complete a line holding two of our marks;
/// 2. take the center;
/// 3. block a line holding two of the opponent's marks;
/// 4. take the lowest-index empty square.
///
/// No lookahead, so an expert can beat it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Heuristic;

impl Heuristic {
    /// Creates the selector.
    pub fn new() -> Self {
        Self
    }
}

/// The empty square of the first line where `player` holds the other two.
fn completing_square(board: &Board, player: Player) -> Option<Position> {
    LINES.iter().find_map(|line| {
        let owned = line
            .iter()
            .filter(|pos| board.get(**pos) == Square::Occupied(player))
            .count();
        let mut empty = line.iter().copied().filter(|pos| board.is_empty(*pos));
        match (owned, empty.next(), empty.next()) {
            (2, Some(pos), None) => Some(pos),
            _ => None,
        }
    })
}

impl MoveSelector for Heuristic {
    #[instrument(skip(self))]
    fn select_move(&mut self, board: &Board, mark: Player) -> Option<Position> {
        if let Some(pos) = completing_square(board, mark) {
            debug!(position = %pos, "Winning move");
            return Some(pos);
        }

        if board.is_empty(Position::Center) {
            debug!("Taking center");
            return Some(Position::Center);
        }

        if let Some(pos) = completing_square(board, mark.opponent()) {
            debug!(position = %pos, "Blocking move");
            return Some(pos);
        }

        let fallback = board.empty_positions().next();
        debug!(position = ?fallback, "First available square");
        fallback
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pick(board: &str, mark: Player) -> Option<Position> {
        Heuristic::new().select_move(&board.parse().unwrap(), mark)
    }

    #[test]
    fn test_win_beats_center_and_block() {
        // O can complete a line while X threatens the top row.
        assert_eq!(pick("XX_OO____", Player::O), Some(Position::MiddleRight));
        assert_eq!(pick("OXXO___X_", Player::O), Some(Position::BottomLeft));
    }

    #[test]
    fn test_takes_center_before_blocking() {
        assert_eq!(pick("XX_______", Player::O), Some(Position::Center));
    }

    #[test]
    fn test_blocks_first_line_in_table_order() {
        // X threatens both the top row (cell 2) and the left column (cell 6).
        assert_eq!(pick("XX_XO____", Player::O), Some(Position::TopRight));
    }

    #[test]
    fn test_falls_back_to_first_empty() {
        assert_eq!(pick("X___O____", Player::O), Some(Position::TopCenter));
    }

    #[test]
    fn test_full_board_has_no_move() {
        assert_eq!(pick("XOXXOOOXX", Player::O), None);
    }

    #[test]
    fn test_plays_either_mark() {
        assert_eq!(pick("OO_XX____", Player::X), Some(Position::MiddleRight));
    }
}
