//! Noughts - terminal tic-tac-toe against a computer opponent
//!
//! The game rules and the two move selectors live in `noughts_core`. This
//! crate adds the turn controller, the players that drive it and the
//! front ends built on top.
//!
//! # Architecture
//!
//! - **Players**: a human fed by a channel, or a computer wrapping a selector
//! - **Orchestrator**: alternates two players over one game and emits events
//! - **TUI**: ratatui board that mirrors the orchestrator's events
//! - **Report**: one-shot move suggestions and board classification
//!
//! # Example
//!
//! ```no_run
//! use noughts::{Orchestrator, ComputerPlayer};
//! use noughts_core::StrategyKind;
//! use std::time::Duration;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let x = ComputerPlayer::new("heuristic", StrategyKind::Heuristic.build(None), Duration::ZERO);
//! let o = ComputerPlayer::new("minimax", StrategyKind::Minimax.build(Some(7)), Duration::ZERO);
//! let status = Orchestrator::new(Box::new(x), Box::new(o)).run().await?;
//! println!("{:?}", status);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod orchestrator;
mod players;
mod report;
mod scoreboard;
pub mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, FirstPlayer, NoughtsConfig};

// Crate-level exports - Turn control
pub use orchestrator::{GameEvent, Orchestrator, self_play};
pub use players::{ComputerPlayer, HumanPlayer, Player};

// Crate-level exports - Reporting
pub use report::{StatusReport, SuggestError, Suggestion, classify, suggest};
pub use scoreboard::Scoreboard;
