use sumito_core::{
    apply_move_unchecked, game_result, legal_moves, Board, Color, Evaluator, GameResult, Move,
    Position, Score, SearchLimits, SearchResult, Searcher,
};
use tracing::{debug, trace};

use crate::classical::ClassicalEval;

const DEFAULT_MAX_DEPTH: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaBetaConfig {
    pub max_depth: u8,
}

impl Default for AlphaBetaConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphaBetaResult {
    pub best_move: Option<Move>,
    pub score: Score,
    pub depth: u8,
    pub nodes: u64,
}

/// Fixed-depth minimax with alpha-beta pruning. White maximizes the
/// evaluator's score, Black minimizes it.
pub struct AlphaBetaSearcher {
    eval: Box<dyn Evaluator>,
    max_depth: u8,
    nodes: u64,
}

impl std::fmt::Debug for AlphaBetaSearcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlphaBetaSearcher")
            .field("eval", &"<Evaluator>")
            .field("max_depth", &self.max_depth)
            .field("nodes", &self.nodes)
            .finish()
    }
}

impl Default for AlphaBetaSearcher {
    fn default() -> Self {
        Self::new(AlphaBetaConfig::default())
    }
}

impl AlphaBetaSearcher {
    pub fn new(config: AlphaBetaConfig) -> Self {
        Self::with_eval(config, Box::new(ClassicalEval::new()))
    }

    pub fn with_eval(config: AlphaBetaConfig, eval: Box<dyn Evaluator>) -> Self {
        Self {
            eval,
            max_depth: config.max_depth,
            nodes: 0,
        }
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Nodes visited since the last call to `search_with_info` (or since
    /// construction when only `search` has been used).
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Minimax value of `board` with `maximizing` set when White is to move.
    /// A decided board scores `+inf` (White won) or `-inf` (Black won)
    /// whatever the remaining depth.
    pub fn search(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Score {
        self.nodes += 1;

        match game_result(board) {
            GameResult::Won(Color::White) => return Score::INFINITY,
            GameResult::Won(Color::Black) => return Score::NEG_INFINITY,
            GameResult::Ongoing => {}
        }
        if depth == 0 {
            return self.eval.evaluate(board);
        }

        if maximizing {
            let mut best = Score::NEG_INFINITY;
            for mv in legal_moves(board, Color::White) {
                let child = apply_move_unchecked(board, mv);
                let score = self.search(&child, depth - 1, alpha, beta, false);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    trace!(%mv, depth, alpha = alpha.0, beta = beta.0, "beta cut-off");
                    break;
                }
            }
            best
        } else {
            let mut best = Score::INFINITY;
            for mv in legal_moves(board, Color::Black) {
                let child = apply_move_unchecked(board, mv);
                let score = self.search(&child, depth - 1, alpha, beta, true);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    trace!(%mv, depth, alpha = alpha.0, beta = beta.0, "alpha cut-off");
                    break;
                }
            }
            best
        }
    }

    /// Full-window search from `board` to the configured depth.
    pub fn evaluate_board(&mut self, board: &Board, maximizing: bool) -> Score {
        self.search(
            board,
            self.max_depth,
            Score::NEG_INFINITY,
            Score::INFINITY,
            maximizing,
        )
    }

    /// Searches every root move of the side to move and returns the best
    /// one. Ties keep the move enumerated first.
    pub fn search_with_info(
        &mut self,
        position: &Position,
        limits: SearchLimits,
    ) -> AlphaBetaResult {
        self.nodes = 0;
        let depth = limits.depth.unwrap_or(self.max_depth);
        let maximizing = position.turn == Color::White;

        if depth == 0 || position.is_game_over() {
            let score = self.search(
                &position.board,
                0,
                Score::NEG_INFINITY,
                Score::INFINITY,
                maximizing,
            );
            return AlphaBetaResult {
                best_move: None,
                score,
                depth: 0,
                nodes: self.nodes,
            };
        }

        let mut alpha = Score::NEG_INFINITY;
        let mut beta = Score::INFINITY;
        let mut best_move = None;
        let mut best_score = if maximizing {
            Score::NEG_INFINITY
        } else {
            Score::INFINITY
        };

        for mv in position.moves() {
            let child = apply_move_unchecked(&position.board, mv);
            let score = self.search(&child, depth - 1, alpha, beta, !maximizing);
            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if best_move.is_none() || improves {
                best_move = Some(mv);
                best_score = score;
            }
            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
            if beta <= alpha {
                trace!(%mv, depth, "root cut-off");
                break;
            }
        }

        debug!(
            side = %position.turn,
            depth,
            nodes = self.nodes,
            score = %best_score,
            best = ?best_move.map(|mv| mv.to_string()),
            "search finished"
        );

        AlphaBetaResult {
            best_move,
            score: best_score,
            depth,
            nodes: self.nodes,
        }
    }
}

impl Searcher for AlphaBetaSearcher {
    fn search(&mut self, position: &Position, limits: SearchLimits) -> SearchResult {
        let result = self.search_with_info(position, limits);
        SearchResult {
            best_move: result.best_move,
            score: result.score,
            nodes_searched: result.nodes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sumito_core::layout::parse_layout;

    fn full_window(searcher: &mut AlphaBetaSearcher, board: &Board, depth: u8, max: bool) -> Score {
        searcher.search(board, depth, Score::NEG_INFINITY, Score::INFINITY, max)
    }

    #[test]
    fn default_depth_is_three() {
        assert_eq!(AlphaBetaConfig::default().max_depth, 3);
        assert_eq!(AlphaBetaSearcher::default().max_depth(), 3);
    }

    #[test]
    fn depth_zero_is_static_score() {
        let mut searcher = AlphaBetaSearcher::default();
        let board = Board::new();
        assert_eq!(full_window(&mut searcher, &board, 0, true), Score(7880));
        assert_eq!(full_window(&mut searcher, &board, 0, false), Score(7880));
    }

    #[test]
    fn start_values_by_depth() {
        let mut searcher = AlphaBetaSearcher::default();
        let board = Board::new();
        assert_eq!(full_window(&mut searcher, &board, 1, true), Score(9200));
        assert_eq!(full_window(&mut searcher, &board, 1, false), Score(7400));
        assert_eq!(full_window(&mut searcher, &board, 2, true), Score(7700));
    }

    #[test]
    fn decided_board_ignores_depth() {
        let mut searcher = AlphaBetaSearcher::default();
        let black_won = parse_layout("9/9/9/9/9/9/9/bb7/wb7").unwrap();
        assert_eq!(full_window(&mut searcher, &black_won, 3, true), Score::NEG_INFINITY);
        assert_eq!(full_window(&mut searcher, &black_won, 0, false), Score::NEG_INFINITY);
    }

    #[test]
    fn evaluate_board_uses_configured_depth() {
        let board = Board::new();
        let mut shallow = AlphaBetaSearcher::new(AlphaBetaConfig { max_depth: 1 });
        assert_eq!(shallow.evaluate_board(&board, true), Score(9200));
        let mut deeper = AlphaBetaSearcher::new(AlphaBetaConfig { max_depth: 2 });
        assert_eq!(deeper.evaluate_board(&board, true), Score(7700));
        assert_eq!(
            deeper.evaluate_board(&board, true),
            full_window(&mut deeper, &board, 2, true)
        );
    }

    #[test]
    fn counts_nodes() {
        let mut searcher = AlphaBetaSearcher::default();
        full_window(&mut searcher, &Board::new(), 1, true);
        // root plus one leaf per legal White move
        assert_eq!(searcher.nodes(), 41);
    }
}
