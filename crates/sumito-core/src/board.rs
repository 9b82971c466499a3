use crate::constants::{starting_squares, BOARD_SIZE, SQUARES};
use crate::types::{Color, Direction, Square};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("square out of bounds")]
    OutOfBounds,
    #[error("square already occupied")]
    Occupied,
}

/// 9x9 grid of single-piece cells. Every cell is a legal slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Color>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.setup_starting_position();
        board
    }

    pub const fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Piece on `square`; squares outside the grid read as empty.
    pub fn get(&self, square: Square) -> Option<Color> {
        square_coords(square).and_then(|(r, c)| self.cells[r][c])
    }

    pub fn cell_at(&self, row: u8, col: u8) -> Result<Option<Color>, BoardError> {
        let square = Square::new(row, col).ok_or(BoardError::OutOfBounds)?;
        Ok(self.get(square))
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    pub fn put(&mut self, color: Color, square: Square) -> Result<(), BoardError> {
        let (r, c) = square_coords(square).ok_or(BoardError::OutOfBounds)?;
        let cell = &mut self.cells[r][c];
        if cell.is_some() {
            return Err(BoardError::Occupied);
        }
        *cell = Some(color);
        Ok(())
    }

    pub fn remove(&mut self, square: Square) -> Result<Option<Color>, BoardError> {
        let (r, c) = square_coords(square).ok_or(BoardError::OutOfBounds)?;
        Ok(self.cells[r][c].take())
    }

    pub(crate) fn set(&mut self, square: Square, cell: Option<Color>) {
        if let Some((r, c)) = square_coords(square) {
            self.cells[r][c] = cell;
        }
    }

    pub fn count(&self, color: Color) -> u8 {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Some(color))
            .count() as u8
    }

    pub fn occupied(&self) -> impl Iterator<Item = (Square, Color)> + '_ {
        SQUARES
            .into_iter()
            .filter_map(|square| self.get(square).map(|color| (square, color)))
    }

    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.occupied()
            .filter(move |(_, owner)| *owner == color)
            .map(|(square, _)| square)
    }

    /// Length of the run of `color` pieces starting at `from` along `dir`.
    pub fn run_length(&self, from: Square, dir: Direction, color: Color) -> u8 {
        let mut len = 0;
        let mut cursor = Some(from);
        while let Some(square) = cursor {
            if self.get(square) != Some(color) {
                break;
            }
            len += 1;
            cursor = square.step(dir);
        }
        len
    }

    fn setup_starting_position(&mut self) {
        for color in Color::ALL {
            for &(row, col) in starting_squares(color) {
                self.set(Square::new_unchecked(row, col), Some(color));
            }
        }
    }
}

fn square_coords(square: Square) -> Option<(usize, usize)> {
    let (r, c) = (usize::from(square.row), usize::from(square.col));
    if r >= BOARD_SIZE || c >= BOARD_SIZE {
        return None;
    }
    Some((r, c))
}
