//! Application state and logic.

use super::input::{self, Action};
use crate::config::FirstPlayer;
use crate::orchestrator::GameEvent;
use crate::scoreboard::Scoreboard;
use crossterm::event::KeyCode;
use noughts_core::{Board, Game, GameStatus, Line, Mark, Position};
use tracing::{debug, warn};

/// Main application state.
///
/// Mirrors the orchestrator's game from the events it sends, so the UI
/// never touches the game the players are acting on.
pub struct App {
    game: Game,
    first_player: FirstPlayer,
    human_mark: Mark,
    opponent_name: String,
    cursor: Position,
    thinking: bool,
    /// A placement was forwarded and the orchestrator has not answered yet.
    awaiting_move: bool,
    highlight: Option<Line>,
    scoreboard: Scoreboard,
    status_message: String,
}

impl App {
    /// Creates a new application.
    pub fn new(first_player: FirstPlayer, opponent_name: impl Into<String>) -> Self {
        let mut app = Self {
            game: Game::new(),
            first_player,
            human_mark: first_player.human_mark(),
            opponent_name: opponent_name.into(),
            cursor: Position::Center,
            thinking: false,
            awaiting_move: false,
            highlight: None,
            scoreboard: Scoreboard::new(),
            status_message: String::new(),
        };
        app.status_message = app.turn_message();
        app
    }

    /// The mirrored board.
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// Current cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Mark the human plays this game.
    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    /// Who moves first in the next game.
    pub fn first_player(&self) -> FirstPlayer {
        self.first_player
    }

    /// Winning line to highlight, once a game is won.
    pub fn highlight(&self) -> Option<Line> {
        self.highlight
    }

    /// Session tally.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Display name of the computer opponent.
    pub fn opponent_name(&self) -> &str {
        &self.opponent_name
    }

    /// True while the human may place a mark.
    pub fn is_human_turn(&self) -> bool {
        !self.game.is_over()
            && !self.thinking
            && !self.awaiting_move
            && self.game.to_move() == self.human_mark
    }

    fn turn_message(&self) -> String {
        if self.game.to_move() == self.human_mark {
            format!("Your turn ({})", self.human_mark)
        } else {
            format!("{} to move...", self.opponent_name)
        }
    }

    /// Handles a game event from the orchestrator.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::Thinking { player } => {
                self.thinking = true;
                self.status_message = format!("{} is thinking...", player);
            }
            GameEvent::MoveMade {
                player,
                mark,
                position,
            } => {
                self.thinking = false;
                self.awaiting_move = false;
                if let Err(e) = self.game.make_move(position) {
                    warn!(error = %e, %player, "Mirror out of sync");
                    self.status_message = format!("Move error: {}", e);
                    return;
                }
                self.status_message = if self.game.is_over() {
                    format!("{} ({}) played {}", player, mark, position)
                } else {
                    format!("{} ({}) played {}. {}", player, mark, position, self.turn_message())
                };
            }
            GameEvent::Rejected { reason, .. } => {
                self.awaiting_move = false;
                self.status_message = format!("{}. Try again.", reason);
            }
            GameEvent::GameOver { status, line } => {
                self.thinking = false;
                self.awaiting_move = false;
                let outcome = match status {
                    GameStatus::Won(mark) if mark == self.human_mark => "You win!".to_string(),
                    GameStatus::Won(_) => format!("{} wins!", self.opponent_name),
                    GameStatus::Draw => "Draw!".to_string(),
                    GameStatus::InProgress => {
                        warn!("Game over reported for an unfinished game");
                        return;
                    }
                };
                self.scoreboard.record(status);
                self.highlight = line;
                self.status_message =
                    format!("{} Press 'r' to play again or 'q' to quit.", outcome);
            }
        }
    }

    /// Maps a key press to an action, updating cursor and messages.
    ///
    /// `Place` is only returned for an empty square on the human's turn.
    pub fn handle_key(&mut self, key: KeyCode) -> Action {
        if matches!(key, KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) {
            self.cursor = input::move_cursor(self.cursor, key);
            return Action::None;
        }

        match input::action_for(key, self.cursor) {
            Action::Place(position) => {
                self.cursor = position;
                if !self.is_human_turn() {
                    self.status_message = if self.game.is_over() {
                        "Game over. Press 'r' to play again.".to_string()
                    } else {
                        format!("Wait for {}.", self.opponent_name)
                    };
                    Action::None
                } else if !self.game.board().is_empty(position) {
                    self.status_message = format!("{} is taken.", position);
                    Action::None
                } else {
                    self.awaiting_move = true;
                    Action::Place(position)
                }
            }
            Action::ToggleFirst => {
                self.first_player = self.first_player.toggle();
                self.status_message = format!(
                    "{} will move first next game.",
                    self.first_player.label()
                );
                Action::ToggleFirst
            }
            other => other,
        }
    }

    /// Clears the board for a new game. Scores are kept.
    pub fn restart(&mut self) {
        debug!(first = %self.first_player, "Restarting game");
        self.game = Game::new();
        self.human_mark = self.first_player.human_mark();
        self.thinking = false;
        self.awaiting_move = false;
        self.highlight = None;
        self.cursor = Position::Center;
        self.status_message = self.turn_message();
    }
}
