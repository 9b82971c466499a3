use crate::types::{Color, Square};

pub const BOARD_SIZE: usize = 9;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Upper bound on generated moves: every square, every direction.
pub const MAX_MOVES: usize = NUM_SQUARES * 4;

pub const STARTING_PIECES: u8 = 14;
pub const PIECES_TO_LOSE: u8 = 6;
/// A side at or below this count has lost.
pub const ELIMINATION_THRESHOLD: u8 = STARTING_PIECES - PIECES_TO_LOSE;

/// Longest own run that may push or be pushed.
pub const MAX_PUSHING_RUN: u8 = 3;

pub const SQUARES: [Square; NUM_SQUARES] = {
    let mut squares = [Square::new_unchecked(0, 0); NUM_SQUARES];
    let mut i = 0;
    while i < NUM_SQUARES {
        squares[i] = Square::new_unchecked((i / BOARD_SIZE) as u8, (i % BOARD_SIZE) as u8);
        i += 1;
    }
    squares
};

pub const WHITE_START: [(u8, u8); STARTING_PIECES as usize] = [
    (0, 6),
    (0, 7),
    (0, 8),
    (1, 5),
    (1, 6),
    (1, 7),
    (1, 8),
    (2, 4),
    (2, 5),
    (2, 6),
    (2, 7),
    (3, 4),
    (3, 5),
    (3, 6),
];

pub const BLACK_START: [(u8, u8); STARTING_PIECES as usize] = [
    (5, 2),
    (5, 3),
    (5, 4),
    (6, 1),
    (6, 2),
    (6, 3),
    (6, 4),
    (7, 0),
    (7, 1),
    (7, 2),
    (7, 3),
    (8, 0),
    (8, 1),
    (8, 2),
];

pub const START_LAYOUT: &str = "6www/5wwww/4wwww1/4www2/9/2bbb4/1bbbb4/bbbb5/bbb6";
pub const START_POSITION: &str = "6www/5wwww/4wwww1/4www2/9/2bbb4/1bbbb4/bbbb5/bbb6 w";

pub const fn starting_squares(color: Color) -> &'static [(u8, u8); STARTING_PIECES as usize] {
    match color {
        Color::White => &WHITE_START,
        Color::Black => &BLACK_START,
    }
}
