use std::fmt;

use serde::Serialize;
use sumito_core::{
    board::Board,
    eval::Evaluator,
    movegen::LineProbe,
    types::{Color, Direction, Score, Square},
};

const PUSH_TWO_OFF: i32 = 375;
const PUSH_ONE_OFF: i32 = 350;
const BREAK_LINE_WITH_THREE: i32 = 225;
const BREAK_LINE_WITH_TWO: i32 = 220;
const COVER: i32 = 150;
const GROUP_OF_THREE: i32 = 125;
const GROUP_OF_TWO: i32 = 100;

/// Rings from the centre that still earn a bonus, and the value per ring.
const CENTER_RINGS: i32 = 5;
const CENTER_STEP: i32 = 10;

const NUM_CRITERIA: usize = 8;

/// The scoring rules of the evaluator, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    PushTwoOff,
    PushOneOff,
    BreakLineWithThree,
    BreakLineWithTwo,
    Cover,
    GroupOfThree,
    GroupOfTwo,
    Centralize,
}

impl Criterion {
    pub const ALL: [Self; NUM_CRITERIA] = [
        Self::PushTwoOff,
        Self::PushOneOff,
        Self::BreakLineWithThree,
        Self::BreakLineWithTwo,
        Self::Cover,
        Self::GroupOfThree,
        Self::GroupOfTwo,
        Self::Centralize,
    ];

    /// Stable key used in logs and fixtures.
    pub const fn key(self) -> &'static str {
        match self {
            Self::PushTwoOff => "push_two_off",
            Self::PushOneOff => "push_one_off",
            Self::BreakLineWithThree => "break_line_with_three",
            Self::BreakLineWithTwo => "break_line_with_two",
            Self::Cover => "cover",
            Self::GroupOfThree => "group_of_three",
            Self::GroupOfTwo => "group_of_two",
            Self::Centralize => "centralize",
        }
    }

    /// Fixed weight, `None` for centralization which depends on the square.
    pub const fn weight(self) -> Option<i32> {
        match self {
            Self::PushTwoOff => Some(PUSH_TWO_OFF),
            Self::PushOneOff => Some(PUSH_ONE_OFF),
            Self::BreakLineWithThree => Some(BREAK_LINE_WITH_THREE),
            Self::BreakLineWithTwo => Some(BREAK_LINE_WITH_TWO),
            Self::Cover => Some(COVER),
            Self::GroupOfThree => Some(GROUP_OF_THREE),
            Self::GroupOfTwo => Some(GROUP_OF_TWO),
            Self::Centralize => None,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// How many times each criterion fired while scoring a board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalBreakdown {
    counts: [u32; NUM_CRITERIA],
}

impl EvalBreakdown {
    pub fn get(&self, criterion: Criterion) -> u32 {
        self.counts[criterion.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Criteria that fired at least once, with their counts.
    pub fn fired(&self) -> impl Iterator<Item = (Criterion, u32)> + '_ {
        Criterion::ALL
            .into_iter()
            .map(|criterion| (criterion, self.get(criterion)))
            .filter(|(_, count)| *count > 0)
    }

    fn add(&mut self, criterion: Criterion, times: u32) {
        self.counts[criterion.index()] += times;
    }
}

impl fmt::Display for EvalBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (criterion, count) in self.fired() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{}={count}", criterion.key())?;
            first = false;
        }
        if first {
            f.write_str("none")?;
        }
        Ok(())
    }
}

/// Hand-written tactical evaluator. Every piece of either colour adds to
/// the same total, so the score is not relative to a side.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicalEval;

impl ClassicalEval {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate_with_breakdown(&self, board: &Board) -> (Score, EvalBreakdown) {
        evaluate(board)
    }
}

impl Evaluator for ClassicalEval {
    fn evaluate(&self, board: &Board) -> Score {
        evaluate(board).0
    }
}

/// Scores `board` and reports which criteria contributed.
pub fn evaluate(board: &Board) -> (Score, EvalBreakdown) {
    let mut breakdown = EvalBreakdown::default();
    let mut total = 0i32;

    for (square, color) in board.occupied() {
        let covers = covering_pairs(board, square, color);
        for dir in Direction::ALL {
            total += score_line(board, square, dir, color, covers, &mut breakdown);
        }
    }

    (Score(total), breakdown)
}

/// `(5 - ring) * 10`, where the ring is the Chebyshev distance to (4, 4).
pub fn centralization_bonus(square: Square) -> i32 {
    (CENTER_RINGS - i32::from(square.distance_from_center())) * CENTER_STEP
}

fn score_line(
    board: &Board,
    square: Square,
    dir: Direction,
    color: Color,
    covers: u32,
    breakdown: &mut EvalBreakdown,
) -> i32 {
    let probe = LineProbe::new(board, square, dir, color);
    let allies = probe.allies;
    let opponents = if probe.outnumbers() { probe.opponents } else { 0 };
    let mut score = 0;

    if let Some(criterion) = push_criterion(square, dir, allies, opponents) {
        breakdown.add(criterion, 1);
        score += criterion.weight().unwrap_or_default();
    }

    if covers > 0 {
        breakdown.add(Criterion::Cover, covers);
        score += COVER * covers as i32;
    }

    match allies {
        3 => {
            breakdown.add(Criterion::GroupOfThree, 1);
            score += GROUP_OF_THREE;
        }
        2 => {
            breakdown.add(Criterion::GroupOfTwo, 1);
            score += GROUP_OF_TWO;
        }
        1 => {
            breakdown.add(Criterion::Centralize, 1);
            score += centralization_bonus(square);
        }
        _ => {}
    }

    score
}

fn push_criterion(square: Square, dir: Direction, allies: u8, opponents: u8) -> Option<Criterion> {
    match (allies, opponents) {
        (a, 2) if a >= 3 && square.offset(dir, 3).is_none() => Some(Criterion::PushTwoOff),
        (a, 1) if a >= 2 && square.offset(dir, 2).is_none() => Some(Criterion::PushOneOff),
        (3, 1 | 2) => Some(Criterion::BreakLineWithThree),
        (2, 1) => Some(Criterion::BreakLineWithTwo),
        _ => None,
    }
}

/// Own pieces orthogonally adjacent to an opposing neighbour of `square`.
fn covering_pairs(board: &Board, square: Square, color: Color) -> u32 {
    let opponent = color.opponent();
    square
        .neighbors()
        .filter(|n| board.get(*n) == Some(opponent))
        .map(|n| {
            n.neighbors()
                .filter(|nn| board.get(*nn) == Some(color))
                .count() as u32
        })
        .sum()
}
