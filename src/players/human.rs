//! Human player whose moves arrive from the UI.

use super::Player;
use anyhow::Result;
use noughts_core::{Game, Position};
use tokio::sync::mpsc;
use tracing::debug;

/// Human player fed by the terminal input loop.
pub struct HumanPlayer {
    name: String,
    input_rx: mpsc::UnboundedReceiver<Position>,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input_rx: mpsc::UnboundedReceiver<Position>) -> Self {
        Self {
            name: name.into(),
            input_rx,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn get_move(&mut self, _game: &Game) -> Result<Position> {
        let position = self
            .input_rx
            .recv()
            .await
            .ok_or_else(|| anyhow::anyhow!("Input channel closed"))?;
        debug!(player = %self.name, %position, "Human chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_forwards_channel_input() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut player = HumanPlayer::new("You", rx);
        tx.send(Position::Center).unwrap();
        assert_eq!(player.get_move(&Game::new()).await.unwrap(), Position::Center);
    }

    #[tokio::test]
    async fn test_closed_channel_is_an_error() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut player = HumanPlayer::new("You", rx);
        drop(tx);
        assert!(player.get_move(&Game::new()).await.is_err());
    }
}
