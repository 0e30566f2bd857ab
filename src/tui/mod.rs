//! Terminal UI: play against the computer.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::Action;

use crate::config::NoughtsConfig;
use crate::orchestrator::{GameEvent, Orchestrator};
use crate::players::{ComputerPlayer, HumanPlayer, Player};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts_core::{GameStatus, Mark, Position};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

/// Channels and task for one game in progress.
struct GameSession {
    moves: mpsc::UnboundedSender<Position>,
    events: mpsc::UnboundedReceiver<GameEvent>,
    task: Option<JoinHandle<Result<GameStatus>>>,
}

impl GameSession {
    /// Spawns an orchestrator for game number `round`.
    #[instrument(skip(config))]
    fn start(config: &NoughtsConfig, human_mark: Mark, round: u64) -> Self {
        let (moves, move_rx) = mpsc::unbounded_channel();
        let (event_tx, events) = mpsc::unbounded_channel();

        let seed = config.seed().map(|s| s.wrapping_add(round));
        let human: Box<dyn Player> = Box::new(HumanPlayer::new("You", move_rx));
        let computer: Box<dyn Player> = Box::new(ComputerPlayer::new(
            config.strategy().to_string(),
            config.strategy().build(seed),
            config.opponent_delay(),
        ));
        let (player_x, player_o) = match human_mark {
            Mark::X => (human, computer),
            Mark::O => (computer, human),
        };

        let mut orchestrator = Orchestrator::new(player_x, player_o).with_events(event_tx);
        let task = tokio::spawn(async move { orchestrator.run().await });
        info!("Game started");

        Self {
            moves,
            events,
            task: Some(task),
        }
    }
}

impl Drop for GameSession {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            debug!("Aborting game task");
            task.abort();
        }
    }
}

/// Run the TUI until the user quits.
///
/// Logs go to the configured file at `default_level` unless `RUST_LOG` is set.
pub async fn run_tui(config: NoughtsConfig, default_level: &str) -> Result<()> {
    // Log to a file so output does not corrupt the screen.
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(strategy = %config.strategy(), first = %config.first_player(), "Starting TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: &NoughtsConfig,
) -> Result<()> {
    let mut app = App::new(*config.first_player(), config.strategy().to_string());
    let mut round = 0;
    let mut session = GameSession::start(config, app.human_mark(), round);

    loop {
        while let Ok(event) = session.events.try_recv() {
            app.handle_event(event);
        }

        if session.task.as_ref().is_some_and(JoinHandle::is_finished)
            && let Some(task) = session.task.take()
        {
            match task.await {
                Ok(Ok(status)) => debug!(?status, "Game task finished"),
                Ok(Err(e)) => {
                    warn!(error = %e, "Game task failed");
                    return Err(e);
                }
                Err(e) => warn!(error = %e, "Game task did not complete"),
            }
        }

        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match app.handle_key(key.code) {
                Action::Place(position) => {
                    debug!(%position, "Forwarding human move");
                    session
                        .moves
                        .send(position)
                        .context("Game task stopped accepting moves")?;
                }
                Action::NewGame => {
                    round += 1;
                    app.restart();
                    session = GameSession::start(config, app.human_mark(), round);
                }
                Action::Quit => {
                    info!("User quit");
                    return Ok(());
                }
                Action::ToggleFirst | Action::None => {}
            }
        }

        tokio::task::yield_now().await;
    }
}
