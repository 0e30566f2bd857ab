//! Exhaustive game-tree search with alpha-beta pruning.
//!
//! Scores are from the selector's point of view: `10 - depth` for a win,
//! `depth - 10` for a loss, `0` for a draw. Depth counts plies after the
//! candidate move, so faster wins and slower losses score higher.

use super::MoveSelector;
use crate::rules::{check_winner, is_full};
use crate::{Board, Player, Position};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument, trace};

/// Score of a win on the ply right after the candidate move.
const WIN: i32 = 10;

/// Counters from a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions evaluated, terminal or not.
    pub nodes: u64,
}

/// One minimax search from `me`'s point of view.
#[derive(Debug, Clone)]
pub struct Search {
    me: Player,
    pruning: bool,
    stats: SearchStats,
}

impl Search {
    /// Search with alpha-beta pruning.
    pub fn new(me: Player) -> Self {
        Self {
            me,
            pruning: true,
            stats: SearchStats::default(),
        }
    }

    /// Plain minimax. Same values, more nodes.
    pub fn without_pruning(me: Player) -> Self {
        Self {
            pruning: false,
            ..Self::new(me)
        }
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Evaluates `board`, where `maximizing` means it is `me` to move.
    ///
    /// `alpha` is the best score the maximizer is already guaranteed and
    /// `beta` the best the minimizer is; siblings are skipped once
    /// `beta <= alpha`.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: i32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        match check_winner(board) {
            Some(winner) if winner == self.me => return WIN - depth,
            Some(_) => return depth - WIN,
            None if is_full(board) => return 0,
            None => {}
        }

        if maximizing {
            let mut best = i32::MIN;
            for pos in board.empty_positions() {
                let child = board.with_mark(pos, self.me);
                let score = self.minimax(&child, depth + 1, false, alpha, beta);
                best = best.max(score);
                if self.pruning {
                    alpha = alpha.max(score);
                    if beta <= alpha {
                        break;
                    }
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for pos in board.empty_positions() {
                let child = board.with_mark(pos, self.me.opponent());
                let score = self.minimax(&child, depth + 1, true, alpha, beta);
                best = best.min(score);
                if self.pruning {
                    beta = beta.min(score);
                    if beta <= alpha {
                        break;
                    }
                }
            }
            best
        }
    }

    /// Scores every empty square as `me`'s next move, in ascending order.
    pub fn score_moves(&mut self, board: &Board) -> Vec<(Position, i32)> {
        board
            .empty_positions()
            .map(|pos| {
                let child = board.with_mark(pos, self.me);
                let score = self.minimax(&child, 0, false, i32::MIN, i32::MAX);
                trace!(position = %pos, score, "Scored candidate");
                (pos, score)
            })
            .collect()
    }

    /// Highest-scoring move; ties go to the lowest index.
    pub fn best_move(&mut self, board: &Board) -> Option<(Position, i32)> {
        self.score_moves(board)
            .into_iter()
            .fold(None, |best, (pos, score)| match best {
                Some((_, best_score)) if best_score >= score => best,
                _ => Some((pos, score)),
            })
    }
}

/// Optimal opponent. Opens in a random corner, otherwise deterministic.
#[derive(Debug, Clone)]
pub struct Minimax {
    rng: StdRng,
    last_stats: SearchStats,
}

impl Minimax {
    /// Creates a selector seeded from the OS.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a selector whose opening corner is reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            last_stats: SearchStats::default(),
        }
    }

    /// Counters from the most recent search.
    pub fn last_stats(&self) -> SearchStats {
        self.last_stats
    }
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for Minimax {
    #[instrument(skip(self))]
    fn select_move(&mut self, board: &Board, mark: Player) -> Option<Position> {
        self.last_stats = SearchStats::default();

        if board.is_blank() {
            let corner = Position::CORNERS.choose(&mut self.rng).copied();
            debug!(position = ?corner, "Opening corner");
            return corner;
        }

        let mut empties = board.empty_positions();
        let first = empties.next()?;
        if empties.next().is_none() {
            debug!(position = %first, "Only one square left");
            return Some(first);
        }

        let mut search = Search::new(mark);
        let best = search.best_move(board);
        self.last_stats = search.stats();
        debug!(
            position = ?best.map(|(pos, _)| pos),
            score = ?best.map(|(_, score)| score),
            nodes = self.last_stats.nodes,
            "Search complete"
        );
        best.map(|(pos, _)| pos)
    }

    fn name(&self) -> &str {
        "minimax"
    }
}
