use crate::movegen::is_legal;
use crate::position::Position;
use crate::types::{Direction, Move, Square};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("expected \"row col DIRECTION\"")]
    Format,
    #[error("invalid coordinate '{0}'")]
    Coordinate(String),
    #[error("unknown direction '{0}'")]
    Direction(String),
    #[error("illegal move {0}")]
    Illegal(Move),
}

/// Parses `"row col DIRECTION"`, e.g. `"5 3 up"`.
pub fn parse_move(text: &str) -> Result<Move, NotationError> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    let [row, col, dir] = parts.as_slice() else {
        return Err(NotationError::Format);
    };

    let row = parse_coordinate(row)?;
    let col = parse_coordinate(col)?;
    let from = Square::new(row, col)
        .ok_or_else(|| NotationError::Coordinate(format!("{row} {col}")))?;
    let direction =
        Direction::from_name(dir).ok_or_else(|| NotationError::Direction(dir.to_string()))?;
    Ok(Move::new(from, direction))
}

pub fn move_to_text(mv: &Move) -> String {
    mv.to_string()
}

/// Parses a move and checks it for the side to move.
pub fn parse_legal_move(text: &str, position: &Position) -> Result<Move, NotationError> {
    let mv = parse_move(text)?;
    if is_legal(&position.board, position.turn, mv) {
        Ok(mv)
    } else {
        Err(NotationError::Illegal(mv))
    }
}

fn parse_coordinate(text: &str) -> Result<u8, NotationError> {
    text.parse::<u8>()
        .map_err(|_| NotationError::Coordinate(text.to_string()))
}
