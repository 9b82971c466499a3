use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, MAX_MOVES};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub const ALL: [Self; 2] = [Self::White, Self::Black];

    pub const fn to_code(self) -> char {
        match self {
            Self::White => 'w',
            Self::Black => 'b',
        }
    }

    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'w' => Some(Self::White),
            'b' => Some(Self::Black),
            _ => None,
        }
    }

    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Black => "Black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Direction {
    /// Enumeration order used by move generation.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// `(row, col)` step.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|dir| dir.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Square `steps` cells away along `dir`, or `None` past the edge.
    pub fn offset(self, dir: Direction, steps: u8) -> Option<Self> {
        let (dr, dc) = dir.delta();
        let row = i16::from(self.row) + i16::from(dr) * i16::from(steps);
        let col = i16::from(self.col) + i16::from(dc) * i16::from(steps);
        if row < 0 || col < 0 {
            return None;
        }
        Self::new(u8::try_from(row).ok()?, u8::try_from(col).ok()?)
    }

    pub fn step(self, dir: Direction) -> Option<Self> {
        self.offset(dir, 1)
    }

    pub fn neighbors(self) -> impl Iterator<Item = Square> {
        Direction::ALL.into_iter().filter_map(move |dir| self.step(dir))
    }

    /// Chebyshev distance to the centre cell `(4, 4)`.
    pub fn distance_from_center(self) -> u8 {
        let center = (BOARD_SIZE / 2) as u8;
        self.row.abs_diff(center).max(self.col.abs_diff(center))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub direction: Direction,
}

impl Move {
    pub const fn new(from: Square, direction: Direction) -> Self {
        Self { from, direction }
    }

    /// Square the moving piece lands on, `None` if it would leave the board.
    pub fn destination(&self) -> Option<Square> {
        self.from.step(self.direction)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from, self.direction)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    Won(Color),
}

impl GameResult {
    pub const fn winner(self) -> Option<Color> {
        match self {
            Self::Ongoing => None,
            Self::Won(color) => Some(color),
        }
    }

    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won(_))
    }
}

/// Evaluation score. Wins are reported as `INFINITY` / `NEG_INFINITY`.
#[repr(transparent)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Score(pub i32);

impl Score {
    pub const INFINITY: Self = Self(i32::MAX);
    pub const NEG_INFINITY: Self = Self(-i32::MAX);

    pub const fn is_win(self) -> bool {
        self.0 == i32::MAX || self.0 == -i32::MAX
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::INFINITY => f.write_str("+inf"),
            Self::NEG_INFINITY => f.write_str("-inf"),
            Self(value) => write!(f, "{value}"),
        }
    }
}

pub type MoveList = ArrayVec<Move, MAX_MOVES>;
