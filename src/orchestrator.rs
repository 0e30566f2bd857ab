//! Turn controller: alternates two players over one game.

use crate::players::{ComputerPlayer, Player};
use crate::scoreboard::Scoreboard;
use anyhow::{Context, Result};
use noughts_core::{Game, GameStatus, Line, Mark, Position, StrategyKind};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A computer player started choosing a move.
    Thinking {
        /// Name of the thinking player.
        player: String,
    },
    /// A move was applied.
    MoveMade {
        /// Name of the player who moved.
        player: String,
        /// Mark that was placed.
        mark: Mark,
        /// Where it was placed.
        position: Position,
    },
    /// A human move was illegal; the same player is asked again.
    Rejected {
        /// The refused position.
        position: Position,
        /// Why it was refused.
        reason: String,
    },
    /// Game ended.
    GameOver {
        /// Final status, never `InProgress`.
        status: GameStatus,
        /// The completed line, for a win.
        line: Option<Line>,
    },
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    game: Game,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    event_tx: Option<mpsc::UnboundedSender<GameEvent>>,
}

impl Orchestrator {
    /// Creates a new orchestrator. X moves first.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Self {
        Self {
            game: Game::new(),
            player_x,
            player_o,
            event_tx: None,
        }
    }

    /// Sends progress events to `event_tx`.
    pub fn with_events(mut self, event_tx: mpsc::UnboundedSender<GameEvent>) -> Self {
        self.event_tx = Some(event_tx);
        self
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    fn emit(&self, event: GameEvent) {
        if let Some(tx) = &self.event_tx
            && tx.send(event).is_err()
        {
            debug!("Event receiver dropped");
        }
    }

    fn player(&self, mark: Mark) -> &dyn Player {
        match mark {
            Mark::X => self.player_x.as_ref(),
            Mark::O => self.player_o.as_ref(),
        }
    }

    /// Runs the game loop until the game is won or drawn.
    ///
    /// # Errors
    ///
    /// Fails if a player cannot produce a move or a computer player
    /// chooses an illegal one.
    #[instrument(skip(self), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub async fn run(&mut self) -> Result<GameStatus> {
        info!("Starting game orchestration");

        loop {
            let status = self.game.status();
            if status.is_over() {
                info!(?status, moves = self.game.history().len(), "Game over");
                self.emit(GameEvent::GameOver {
                    status,
                    line: self.game.winning_line(),
                });
                return Ok(status);
            }

            let mark = self.game.to_move();
            let player_name = self.player(mark).name().to_string();
            let is_human = self.player(mark).is_human();

            if !is_human {
                self.emit(GameEvent::Thinking {
                    player: player_name.clone(),
                });
            }

            debug!(player = %player_name, %mark, "Waiting for move");
            let position = match mark {
                Mark::X => self.player_x.get_move(&self.game).await,
                Mark::O => self.player_o.get_move(&self.game).await,
            }
            .with_context(|| format!("{} could not move", player_name))?;

            match self.game.make_move(position) {
                Ok(()) => self.emit(GameEvent::MoveMade {
                    player: player_name,
                    mark,
                    position,
                }),
                Err(e) if is_human => {
                    warn!(error = %e, %position, "Rejected human move");
                    self.emit(GameEvent::Rejected {
                        position,
                        reason: e.to_string(),
                    });
                }
                Err(e) => {
                    return Err(anyhow::Error::new(e)
                        .context(format!("{} chose an illegal move", player_name)));
                }
            }
        }
    }
}

/// Plays `games` computer-vs-computer games and tallies the results.
///
/// With a `seed`, game `n` seeds X with `seed + 2n` and O with `seed + 2n + 1`.
#[instrument]
pub async fn self_play(
    x: StrategyKind,
    o: StrategyKind,
    games: u32,
    seed: Option<u64>,
) -> Result<Scoreboard> {
    let mut scoreboard = Scoreboard::new();
    for n in 0..u64::from(games) {
        let seed_for = |offset: u64| seed.map(|s| s.wrapping_add(2 * n + offset));
        let player_x =
            ComputerPlayer::new(format!("{} (X)", x), x.build(seed_for(0)), Duration::ZERO);
        let player_o =
            ComputerPlayer::new(format!("{} (O)", o), o.build(seed_for(1)), Duration::ZERO);

        let status = Orchestrator::new(Box::new(player_x), Box::new(player_o))
            .run()
            .await
            .with_context(|| format!("Self-play game {} failed", n + 1))?;
        scoreboard.record(status);
    }
    info!(%scoreboard, "Self-play finished");
    Ok(scoreboard)
}
