use crate::board::Board;
use crate::types::Score;

/// Static scoring of a board. Higher is better for White, the maximizing side.
pub trait Evaluator {
    fn evaluate(&self, board: &Board) -> Score;
}
