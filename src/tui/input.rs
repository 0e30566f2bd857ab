//! Keyboard handling for the board.

use crossterm::event::KeyCode;
use noughts_core::Position;

/// What a key press asks the UI to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing to forward.
    None,
    /// Place the human's mark.
    Place(Position),
    /// Abandon the current game and start another.
    NewGame,
    /// Swap who moves first from the next game on.
    ToggleFirst,
    /// Leave the UI.
    Quit,
}

/// Maps a key to an action. Arrow keys are handled by [`move_cursor`].
pub fn action_for(key: KeyCode, cursor: Position) -> Action {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') => Action::NewGame,
        KeyCode::Char('t') => Action::ToggleFirst,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Place(cursor),
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|digit| (digit as usize).checked_sub(1))
            .and_then(Position::from_index)
            .map_or(Action::None, Action::Place),
        _ => Action::None,
    }
}

/// Moves cursor based on arrow keys.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Right if col < 2 => (row, col + 1),
        KeyCode::Left if col > 0 => (row, col - 1),
        KeyCode::Down if row < 2 => (row + 1, col),
        KeyCode::Up if row > 0 => (row - 1, col),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Right), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
    }

    #[test]
    fn test_digit_keys_place_one_based() {
        assert_eq!(
            action_for(KeyCode::Char('1'), Position::Center),
            Action::Place(Position::TopLeft)
        );
        assert_eq!(
            action_for(KeyCode::Char('9'), Position::Center),
            Action::Place(Position::BottomRight)
        );
        assert_eq!(action_for(KeyCode::Char('0'), Position::Center), Action::None);
    }

    #[test]
    fn test_enter_places_at_cursor() {
        assert_eq!(
            action_for(KeyCode::Enter, Position::MiddleLeft),
            Action::Place(Position::MiddleLeft)
        );
        assert_eq!(action_for(KeyCode::Char('q'), Position::Center), Action::Quit);
    }
}
