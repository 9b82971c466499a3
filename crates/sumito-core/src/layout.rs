//! Compact text form of a board: nine rows from the top, separated by `/`,
//! digits for runs of empty cells, `w` and `b` for pieces. A position adds the
//! side to move after a space, e.g. `"9/9/9/9/4w4/9/9/9/9 b"`.

use crate::board::{Board, BoardError};
use crate::constants::BOARD_SIZE;
use crate::types::{Color, Square};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("expected 9 rows, received {0}")]
    Rows(usize),
    #[error("row {row} describes {cells} cells")]
    Width { row: usize, cells: usize },
    #[error("invalid piece '{0}'")]
    Piece(char),
    #[error("invalid side to move '{0}'")]
    Turn(String),
    #[error("board error")]
    Board(#[from] BoardError),
}

pub fn parse_layout(layout: &str) -> Result<Board, LayoutError> {
    let rows: Vec<&str> = layout.trim().split('/').collect();
    if rows.len() != BOARD_SIZE {
        return Err(LayoutError::Rows(rows.len()));
    }

    let mut board = Board::empty();
    for (ri, row_desc) in rows.into_iter().enumerate() {
        let mut col = 0usize;
        for ch in row_desc.chars() {
            if let Some(n) = ch.to_digit(10) {
                col += n as usize;
                continue;
            }
            let color = Color::from_code(ch).ok_or(LayoutError::Piece(ch))?;
            if col < BOARD_SIZE {
                board.put(color, Square::new_unchecked(ri as u8, col as u8))?;
            }
            col += 1;
        }
        if col != BOARD_SIZE {
            return Err(LayoutError::Width {
                row: ri,
                cells: col,
            });
        }
    }
    Ok(board)
}

pub fn encode_layout(board: &Board) -> String {
    let mut placement = String::with_capacity(BOARD_SIZE * (BOARD_SIZE + 1));
    for row in 0..BOARD_SIZE as u8 {
        let mut empties = 0u8;
        for col in 0..BOARD_SIZE as u8 {
            match board.get(Square::new_unchecked(row, col)) {
                Some(color) => {
                    if empties > 0 {
                        placement.push(char::from_digit(u32::from(empties), 10).unwrap_or('1'));
                        empties = 0;
                    }
                    placement.push(color.to_code());
                }
                None => empties += 1,
            }
        }
        if empties > 0 {
            placement.push(char::from_digit(u32::from(empties), 10).unwrap_or('1'));
        }
        if usize::from(row) + 1 < BOARD_SIZE {
            placement.push('/');
        }
    }
    placement
}

/// Parses `"<layout> <w|b>"`. A missing turn field means White to move.
pub fn parse_position_text(text: &str) -> Result<(Board, Color), LayoutError> {
    let mut parts = text.split_whitespace();
    let board = parse_layout(parts.next().unwrap_or_default())?;
    let turn = match parts.next() {
        None => Color::White,
        Some(code) => {
            let mut chars = code.chars();
            match (chars.next().and_then(Color::from_code), chars.next()) {
                (Some(color), None) => color,
                _ => return Err(LayoutError::Turn(code.to_string())),
            }
        }
    };
    if let Some(extra) = parts.next() {
        return Err(LayoutError::Turn(extra.to_string()));
    }
    Ok((board, turn))
}

pub fn encode_position_text(board: &Board, turn: Color) -> String {
    format!("{} {}", encode_layout(board), turn.to_code())
}
