//! Command-line interface for noughts.

use crate::config::FirstPlayer;
use clap::{Parser, Subcommand};
use noughts_core::{Board, Mark, StrategyKind};
use std::path::PathBuf;

/// Noughts - tic-tac-toe against a heuristic or minimax opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Terminal tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file, used when present
    #[arg(long, global = true, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Opponent strategy (heuristic or minimax)
        #[arg(short, long)]
        strategy: Option<StrategyKind>,

        /// Who moves first (human or computer)
        #[arg(long)]
        first: Option<FirstPlayer>,

        /// Pause before each computer move, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for the minimax opening
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Suggest a move for a board given as 9 cells, e.g. "X_O_X____"
    Suggest {
        /// Board cells in row-major order; X, O, or one of `._-` or a digit for empty
        board: Board,

        /// Strategy to ask
        #[arg(short, long, default_value_t = StrategyKind::Minimax)]
        strategy: StrategyKind,

        /// Side to move; inferred from the piece count when omitted
        #[arg(short, long)]
        mark: Option<Mark>,

        /// Seed for the minimax opening
        #[arg(long)]
        seed: Option<u64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Classify a board as won, drawn or in progress
    Status {
        /// Board cells in row-major order
        board: Board,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Play computer against computer and print the tally
    Selfplay {
        /// Number of games
        #[arg(short, long, default_value_t = 10)]
        games: u32,

        /// Strategy playing X
        #[arg(long, default_value_t = StrategyKind::Heuristic)]
        x: StrategyKind,

        /// Strategy playing O
        #[arg(long, default_value_t = StrategyKind::Minimax)]
        o: StrategyKind,

        /// Base seed; each selector in each game gets its own offset
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Command {
    /// Log level used when `RUST_LOG` is unset.
    ///
    /// The TUI logs to a file, so it can afford `info`. The other commands
    /// log to stderr next to their answer and stay at `warn`.
    pub fn default_log_level(&self) -> &'static str {
        match self {
            Command::Play { .. } => "info",
            Command::Suggest { .. } | Command::Status { .. } | Command::Selfplay { .. } => "warn",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["noughts", "selfplay"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("noughts.toml"));
        match cli.command {
            Command::Selfplay { games, x, o, seed } => {
                assert_eq!(games, 10);
                assert_eq!(x, StrategyKind::Heuristic);
                assert_eq!(o, StrategyKind::Minimax);
                assert_eq!(seed, None);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_suggest_parses_board_and_mark() {
        let cli = Cli::try_parse_from([
            "noughts", "suggest", "XX_O_O___", "--strategy", "heuristic", "--mark", "x",
        ])
        .unwrap();
        match cli.command {
            Command::Suggest {
                board,
                strategy,
                mark,
                ..
            } => {
                assert_eq!(board.to_string(), "XX_O_O___");
                assert_eq!(strategy, StrategyKind::Heuristic);
                assert_eq!(mark, Some(Mark::X));
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_default_log_level_per_command() {
        let play = Cli::try_parse_from(["noughts", "play"]).unwrap();
        assert_eq!(play.command.default_log_level(), "info");
        let status = Cli::try_parse_from(["noughts", "status", "X........"]).unwrap();
        assert_eq!(status.command.default_log_level(), "warn");
    }

    #[test]
    fn test_rejects_bad_board() {
        assert!(Cli::try_parse_from(["noughts", "status", "XXQ______"]).is_err());
        assert!(Cli::try_parse_from(["noughts", "status", "XX"]).is_err());
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli =
            Cli::try_parse_from(["noughts", "play", "--first", "computer", "--config", "x.toml"])
                .unwrap();
        assert_eq!(cli.config, PathBuf::from("x.toml"));
        assert!(matches!(
            cli.command,
            Command::Play {
                first: Some(FirstPlayer::Computer),
                ..
            }
        ));
    }
}
