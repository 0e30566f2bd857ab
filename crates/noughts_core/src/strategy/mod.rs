//! Opponent move selection.
//!
//! Both selectors are interchangeable behind [`MoveSelector`]. They look at
//! a board snapshot and the mark they play, and return one empty position.

mod heuristic;
mod minimax;

pub use heuristic::Heuristic;
pub use minimax::{Minimax, Search, SearchStats};

use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move-selection capability.
pub trait MoveSelector: Send {
    /// Chooses a move for `mark` on `board`.
    ///
    /// Returns `None` only when the board has no empty square.
    fn select_move(&mut self, board: &Board, mark: Player) -> Option<Position>;

    /// Short display name.
    fn name(&self) -> &str;
}

/// The available opponent strategies.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StrategyKind {
    /// Rule-ordered pattern matching; beatable.
    Heuristic,
    /// Full game-tree search with alpha-beta pruning; never loses.
    #[default]
    Minimax,
}

impl StrategyKind {
    /// Builds a selector of this kind. `seed` fixes the minimax opening.
    #[instrument]
    pub fn build(self, seed: Option<u64>) -> Box<dyn MoveSelector> {
        match self {
            StrategyKind::Heuristic => Box::new(Heuristic::new()),
            StrategyKind::Minimax => match seed {
                Some(seed) => Box::new(Minimax::seeded(seed)),
                None => Box::new(Minimax::new()),
            },
        }
    }
}
