//! Pure tic-tac-toe game logic.
//!
//! Board model, rules, a validated game engine and two computer
//! opponents behind the [`MoveSelector`] trait.
//!
//! # Example
//!
//! ```
//! use noughts_core::{Board, MoveSelector, Player, Position, StrategyKind};
//!
//! let board: Board = "XX_OO____".parse().unwrap();
//! let mut opponent = StrategyKind::Heuristic.build(None);
//! assert_eq!(opponent.select_move(&board, Player::O), Some(Position::MiddleRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod position;
pub mod rules;
pub mod strategy;
mod types;

pub use game::{Game, MoveError};
pub use position::Position;
pub use rules::{LINES, Line};
pub use strategy::{Heuristic, Minimax, MoveSelector, Search, SearchStats, StrategyKind};
pub use types::{Board, BoardError, GameStatus, ParseBoardError, Player, Square};

/// The mark a side places; the same type as [`Player`].
pub type Mark = Player;
