use thiserror::Error;

use crate::board::{Board, BoardError};
use crate::game::game_result;
use crate::layout::{encode_position_text, parse_position_text, LayoutError};
use crate::movegen::{apply_move_unchecked, is_legal, legal_moves, MoveError};
use crate::types::{Color, GameResult, Move, MoveList, Square};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("{0}")]
    Layout(#[from] LayoutError),
    #[error("board error")]
    Board(#[from] BoardError),
    #[error(transparent)]
    Move(#[from] MoveError),
    #[error("piece on {0} does not belong to the side to move")]
    WrongTurn(Square),
    #[error("game is already over")]
    GameOver,
}

/// Board plus side to move. Every move yields a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub board: Board,
    pub turn: Color,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Color::White,
        }
    }

    pub const fn from_parts(board: Board, turn: Color) -> Self {
        Self { board, turn }
    }

    pub fn from_layout(text: &str) -> Result<Self, PositionError> {
        let (board, turn) = parse_position_text(text)?;
        Ok(Self { board, turn })
    }

    pub fn layout(&self) -> String {
        encode_position_text(&self.board, self.turn)
    }

    pub fn result(&self) -> GameResult {
        game_result(&self.board)
    }

    pub fn is_game_over(&self) -> bool {
        self.result().is_over()
    }

    /// Legal moves for the side to move; empty once the game is decided.
    pub fn moves(&self) -> MoveList {
        if self.is_game_over() {
            MoveList::new()
        } else {
            legal_moves(&self.board, self.turn)
        }
    }

    pub fn remaining(&self, color: Color) -> u8 {
        self.board.count(color)
    }

    pub fn make_move(&self, mv: &Move) -> Result<Self, PositionError> {
        if self.is_game_over() {
            return Err(PositionError::GameOver);
        }
        match self.board.get(mv.from) {
            None => return Err(MoveError::EmptySource(mv.from).into()),
            Some(owner) if owner != self.turn => return Err(PositionError::WrongTurn(mv.from)),
            Some(_) => {}
        }
        if !is_legal(&self.board, self.turn, *mv) {
            return Err(MoveError::Illegal(*mv).into());
        }
        Ok(self.play_unchecked(mv))
    }

    /// Applies a move already known to be legal for the side to move.
    pub fn play_unchecked(&self, mv: &Move) -> Self {
        Self {
            board: apply_move_unchecked(&self.board, *mv),
            turn: self.turn.opponent(),
        }
    }

    /// Same board with the other side to move.
    pub fn pass(&self) -> Self {
        Self {
            board: self.board,
            turn: self.turn.opponent(),
        }
    }
}
