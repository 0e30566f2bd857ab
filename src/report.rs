//! One-shot answers for the non-interactive commands.

use derive_more::{Display, Error};
use derive_new::new;
use noughts_core::rules::{self, winning_line};
use noughts_core::{
    Board, GameStatus, Heuristic, Line, Mark, Minimax, MoveSelector, Position, StrategyKind,
};
use serde::Serialize;
use tracing::{debug, instrument};

/// Why no move could be suggested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SuggestError {
    /// The board is already won or drawn.
    #[display("Game is already over")]
    GameOver,
}

/// A recommended move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct Suggestion {
    /// Strategy that chose the move.
    pub strategy: StrategyKind,
    /// Side the move is for.
    pub mark: Mark,
    /// The chosen square.
    pub position: Position,
    /// Board index of the chosen square.
    pub index: usize,
    /// Positions searched, for minimax.
    pub nodes: Option<u64>,
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.index, self.position)?;
        if let Some(nodes) = self.nodes {
            write!(f, " after {} positions", nodes)?;
        }
        Ok(())
    }
}

/// Asks `kind` for `mark`'s move on `board`.
///
/// `mark` defaults to the side to move by piece count.
///
/// # Errors
///
/// Returns [`SuggestError::GameOver`] for a won or full board.
#[instrument(skip(board), fields(board = %board))]
pub fn suggest(
    board: &Board,
    kind: StrategyKind,
    mark: Option<Mark>,
    seed: Option<u64>,
) -> Result<Suggestion, SuggestError> {
    if rules::status(board).is_over() {
        return Err(SuggestError::GameOver);
    }
    let mark = mark.unwrap_or_else(|| board.next_mark());

    let (position, nodes) = match kind {
        StrategyKind::Heuristic => (Heuristic::new().select_move(board, mark), None),
        StrategyKind::Minimax => {
            let mut minimax = seed.map_or_else(Minimax::new, Minimax::seeded);
            let position = minimax.select_move(board, mark);
            (position, Some(minimax.last_stats().nodes))
        }
    };
    // A board that is not over always has an empty square.
    let position = position.ok_or(SuggestError::GameOver)?;
    debug!(%position, ?nodes, "Suggestion ready");

    Ok(Suggestion::new(kind, mark, position, position.to_index(), nodes))
}

/// Classification of a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    /// Compact board text.
    pub board: String,
    /// Derived status.
    pub status: GameStatus,
    /// Completed line for a win.
    pub line: Option<Line>,
    /// Side to move while the game is in progress.
    pub to_move: Option<Mark>,
}

impl std::fmt::Display for StatusReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.status, self.line, self.to_move) {
            (GameStatus::Won(mark), Some([a, b, c]), _) => write!(
                f,
                "{} wins (line {}-{}-{})",
                mark,
                a.to_index(),
                b.to_index(),
                c.to_index()
            ),
            (GameStatus::Won(mark), None, _) => write!(f, "{} wins", mark),
            (GameStatus::Draw, _, _) => write!(f, "draw"),
            (GameStatus::InProgress, _, Some(mark)) => write!(f, "in progress ({} to move)", mark),
            (GameStatus::InProgress, _, None) => write!(f, "in progress"),
        }
    }
}

/// Derives the status of `board` from the line table.
#[instrument(skip(board), fields(board = %board))]
pub fn classify(board: &Board) -> StatusReport {
    let status = rules::status(board);
    StatusReport {
        board: board.to_string(),
        status,
        line: winning_line(board).map(|(_, line)| line),
        to_move: (!status.is_over()).then(|| board.next_mark()),
    }
}
