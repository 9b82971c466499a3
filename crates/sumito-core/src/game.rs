use crate::board::Board;
use crate::constants::ELIMINATION_THRESHOLD;
use crate::position::{Position, PositionError};
use crate::types::{Color, GameResult, Move, MoveList};

/// White is checked first, so a board where both sides are down to the
/// threshold counts as a Black win.
pub fn game_result(board: &Board) -> GameResult {
    if is_eliminated(board, Color::White) {
        GameResult::Won(Color::Black)
    } else if is_eliminated(board, Color::Black) {
        GameResult::Won(Color::White)
    } else {
        GameResult::Ongoing
    }
}

pub fn is_eliminated(board: &Board, color: Color) -> bool {
    board.count(color) <= ELIMINATION_THRESHOLD
}

/// A game in progress: the current position and the number of half-moves
/// played so far.
#[derive(Debug, Clone, Default)]
pub struct Game {
    position: Position,
    move_number: u32,
}

impl Game {
    pub fn new() -> Self {
        Self::from_position(Position::new())
    }

    pub fn from_position(position: Position) -> Self {
        Self {
            position,
            move_number: 0,
        }
    }

    pub fn from_layout(text: &str) -> Result<Self, PositionError> {
        Ok(Self::from_position(Position::from_layout(text)?))
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn board(&self) -> &Board {
        &self.position.board
    }

    pub fn turn(&self) -> Color {
        self.position.turn
    }

    pub fn moves(&self) -> MoveList {
        self.position.moves()
    }

    pub fn make_move(&mut self, mv: &Move) -> Result<(), PositionError> {
        self.position = self.position.make_move(mv)?;
        self.move_number = self.move_number.saturating_add(1);
        Ok(())
    }

    /// Hands the turn over without moving, for a side left with no legal move.
    pub fn pass(&mut self) {
        self.position = self.position.pass();
        self.move_number = self.move_number.saturating_add(1);
    }

    pub fn result(&self) -> GameResult {
        self.position.result()
    }

    pub fn is_game_over(&self) -> bool {
        self.position.is_game_over()
    }

    pub fn remaining(&self, color: Color) -> u8 {
        self.position.remaining(color)
    }

    pub fn move_number(&self) -> u32 {
        self.move_number
    }
}
