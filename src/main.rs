//! Noughts - command-line entry point
//!
//! `play` opens the terminal UI; the other commands answer once and exit.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{Cli, Command, NoughtsConfig, classify, self_play, suggest, tui};
use noughts_core::Mark;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let log_level = cli.command.default_log_level();
    let config = NoughtsConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command {
        Command::Play {
            strategy,
            first,
            delay_ms,
            seed,
        } => {
            let mut config = config;
            if let Some(strategy) = strategy {
                config = config.with_strategy(strategy);
            }
            if let Some(first) = first {
                config = config.with_first_player(first);
            }
            if let Some(delay_ms) = delay_ms {
                config = config.with_opponent_delay_ms(delay_ms);
            }
            if seed.is_some() {
                config = config.with_seed(seed);
            }
            tui::run_tui(config, log_level).await
        }
        Command::Suggest {
            board,
            strategy,
            mark,
            seed,
            json,
        } => {
            init_stderr_logging(log_level);
            run_suggest(&board, strategy, mark, seed.or(*config.seed()), json)
        }
        Command::Status { board, json } => {
            init_stderr_logging(log_level);
            let report = classify(&board);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", board.display());
                println!("{}", report);
            }
            Ok(())
        }
        Command::Selfplay { games, x, o, seed } => {
            init_stderr_logging(log_level);
            let scoreboard = self_play(x, o, games, seed.or(*config.seed())).await?;
            println!("{} (X) vs {} (O), {} games", x, o, scoreboard.games());
            println!("{}", scoreboard);
            Ok(())
        }
    }
}

/// Logs to stderr so stdout carries only the answer.
fn init_stderr_logging(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Prints a suggested move for `board`.
#[instrument(skip(board), fields(board = %board))]
fn run_suggest(
    board: &noughts_core::Board,
    strategy: noughts_core::StrategyKind,
    mark: Option<Mark>,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let suggestion = suggest(board, strategy, mark, seed)
        .with_context(|| format!("No move to suggest for {}", board))?;
    info!(%suggestion, "Suggested move");

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestion)?);
    } else {
        println!("{}", suggestion);
    }
    Ok(())
}
