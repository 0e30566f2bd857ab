//! Computer opponent backed by a move selector.

use super::Player;
use anyhow::Result;
use noughts_core::{Game, MoveSelector, Position};
use std::time::Duration;
use tracing::{debug, instrument};

/// Plays whatever its selector chooses, after a fixed pause.
pub struct ComputerPlayer {
    name: String,
    selector: Box<dyn MoveSelector>,
    delay: Duration,
}

impl ComputerPlayer {
    /// Creates a computer player. `delay` is purely cosmetic pacing.
    pub fn new(name: impl Into<String>, selector: Box<dyn MoveSelector>, delay: Duration) -> Self {
        Self {
            name: name.into(),
            selector,
            delay,
        }
    }
}

#[async_trait::async_trait]
impl Player for ComputerPlayer {
    #[instrument(skip_all, fields(ai = %self.name, strategy = %self.selector.name()))]
    async fn get_move(&mut self, game: &Game) -> Result<Position> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let mark = game.to_move();
        let position = self
            .selector
            .select_move(game.board(), mark)
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;

        debug!(%mark, %position, "AI chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::StrategyKind;

    #[tokio::test]
    async fn test_picks_for_side_to_move() {
        let mut game = Game::new();
        game.make_move(Position::TopLeft).unwrap();
        game.make_move(Position::BottomLeft).unwrap();
        game.make_move(Position::TopCenter).unwrap();

        let mut player = ComputerPlayer::new(
            "Bot",
            StrategyKind::Heuristic.build(None),
            Duration::ZERO,
        );
        assert_eq!(player.get_move(&game).await.unwrap(), Position::Center);
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_for_delay() {
        let mut player = ComputerPlayer::new(
            "Bot",
            StrategyKind::Minimax.build(Some(0)),
            Duration::from_millis(500),
        );
        let started = tokio::time::Instant::now();
        let position = player.get_move(&Game::new()).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(500));
        assert!(Position::CORNERS.contains(&position));
    }

    #[tokio::test]
    async fn test_full_board_is_an_error() {
        let mut game = Game::new();
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            game.make_move(Position::from_index(index).unwrap()).unwrap();
        }
        let mut player =
            ComputerPlayer::new("Bot", StrategyKind::Heuristic.build(None), Duration::ZERO);
        assert!(player.get_move(&game).await.is_err());
    }
}
