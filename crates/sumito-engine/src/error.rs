use sumito_core::Color;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("{0} has no legal moves")]
    NoLegalMoves(Color),
}
