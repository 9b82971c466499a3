use sumito_core::{
    apply_move_unchecked, legal_moves, Board, Color, Move, Position, Score, SearchLimits,
    SearchResult, Searcher,
};
use tracing::{debug, info};

use crate::classical::{evaluate, EvalBreakdown};
use crate::error::EngineError;

/// Colour played by the computer in the interactive game.
pub const AI_COLOR: Color = Color::Black;

/// Outcome of a one-ply selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub mv: Move,
    pub score: Score,
    pub breakdown: EvalBreakdown,
    pub candidates: usize,
}

/// Picks the move whose resulting board scores highest, looking one ply
/// ahead only.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySelector;

impl GreedySelector {
    pub fn new() -> Self {
        Self
    }

    /// Scores every legal move of `color`. The first move reaching the
    /// best score wins.
    pub fn select(&self, board: &Board, color: Color) -> Result<Selection, EngineError> {
        let moves = legal_moves(board, color);
        let mut best: Option<Selection> = None;

        for &mv in &moves {
            let (score, breakdown) = evaluate(&apply_move_unchecked(board, mv));
            debug!(%mv, %score, %breakdown, "candidate");
            if best.map_or(true, |current| score > current.score) {
                best = Some(Selection {
                    mv,
                    score,
                    breakdown,
                    candidates: moves.len(),
                });
            }
        }

        let selection = best.ok_or(EngineError::NoLegalMoves(color))?;
        info!(
            side = %color,
            mv = %selection.mv,
            score = %selection.score,
            candidates = selection.candidates,
            "selected move"
        );
        Ok(selection)
    }
}

/// One-ply choice for the computer side.
pub fn choose_ai_move(board: &Board) -> Result<Move, EngineError> {
    GreedySelector::new()
        .select(board, AI_COLOR)
        .map(|selection| selection.mv)
}

impl Searcher for GreedySelector {
    fn search(&mut self, position: &Position, _limits: SearchLimits) -> SearchResult {
        let selection = if position.is_game_over() {
            None
        } else {
            self.select(&position.board, position.turn).ok()
        };
        match selection {
            Some(selection) => SearchResult {
                best_move: Some(selection.mv),
                score: selection.score,
                nodes_searched: selection.candidates as u64,
            },
            None => SearchResult {
                best_move: None,
                score: evaluate(&position.board).0,
                nodes_searched: 0,
            },
        }
    }
}
