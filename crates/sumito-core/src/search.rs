use crate::position::Position;
use crate::types::{Move, Score};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchLimits {
    /// Plies to look ahead; `None` uses the searcher's own default.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` when the side to move has no move or the game is decided.
    pub best_move: Option<Move>,
    pub score: Score,
    pub nodes_searched: u64,
}

/// Anything that picks a move for the side to move of a position.
pub trait Searcher {
    fn search(&mut self, position: &Position, limits: SearchLimits) -> SearchResult;
}
