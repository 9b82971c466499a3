use arrayvec::ArrayVec;
use thiserror::Error;

use crate::board::Board;
use crate::constants::{BOARD_SIZE, MAX_PUSHING_RUN};
use crate::types::{Color, Direction, Move, MoveList, Square};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("no piece on source square {0}")]
    EmptySource(Square),
    #[error("illegal move {0}")]
    Illegal(Move),
}

/// Runs seen from a square along one direction: first the mover's own
/// pieces, then the opposing pieces directly behind them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineProbe {
    pub allies: u8,
    pub opponents: u8,
    /// First square past the opposing run, `None` when that is off the board.
    pub beyond: Option<Square>,
}

impl LineProbe {
    pub fn new(board: &Board, from: Square, dir: Direction, color: Color) -> Self {
        let mut cursor = Some(from);
        let mut allies = 0u8;
        while let Some(square) = cursor.filter(|sq| board.get(*sq) == Some(color)) {
            allies += 1;
            cursor = square.step(dir);
        }

        let opponent = color.opponent();
        let mut opponents = 0u8;
        while let Some(square) = cursor.filter(|sq| board.get(*sq) == Some(opponent)) {
            opponents += 1;
            cursor = square.step(dir);
        }

        Self {
            allies,
            opponents,
            beyond: cursor,
        }
    }

    /// The opposing run can be pushed by the ally run, ignoring what lies beyond.
    pub const fn outnumbers(&self) -> bool {
        self.opponents > 0 && self.allies > self.opponents
    }
}

pub fn is_legal(board: &Board, color: Color, mv: Move) -> bool {
    if board.get(mv.from) != Some(color) {
        return false;
    }
    let Some(dest) = mv.destination() else {
        return false;
    };

    let occupant = board.get(dest);
    if occupant.is_none() {
        return true;
    }

    let probe = LineProbe::new(board, mv.from, mv.direction, color);
    if probe.outnumbers()
        && probe.allies <= MAX_PUSHING_RUN
        && open_or_edge(board, probe.beyond)
    {
        return true;
    }

    if occupant == Some(color) {
        return ally_line_can_shift(board, dest, mv.direction, color);
    }

    false
}

/// The own run starting at `dest` may slide one step: it is short enough and
/// no piece of it would leave the board.
fn ally_line_can_shift(board: &Board, dest: Square, dir: Direction, color: Color) -> bool {
    let run = board.run_length(dest, dir, color);
    let past = dest.offset(dir, run);
    if run > MAX_PUSHING_RUN || !open_or_edge(board, past) {
        return false;
    }
    (1..=run).all(|i| dest.offset(dir, i).is_some())
}

fn open_or_edge(board: &Board, square: Option<Square>) -> bool {
    square.map_or(true, |sq| board.is_empty(sq))
}

pub fn legal_moves(board: &Board, color: Color) -> MoveList {
    let mut moves = MoveList::new();
    for from in board.pieces(color) {
        generate_moves_for_square(board, color, from, &mut moves);
    }
    moves
}

pub fn generate_moves_for_square(board: &Board, color: Color, from: Square, out: &mut MoveList) {
    for dir in Direction::ALL {
        let mv = Move::new(from, dir);
        if is_legal(board, color, mv) {
            out.push(mv);
        }
    }
}

pub fn has_legal_move(board: &Board, color: Color) -> bool {
    board.pieces(color).any(|from| {
        Direction::ALL
            .into_iter()
            .any(|dir| is_legal(board, color, Move::new(from, dir)))
    })
}

/// Validates `mv` for the owner of its source square and returns the
/// resulting board.
pub fn apply_move(board: &Board, mv: Move) -> Result<Board, MoveError> {
    let mover = board.get(mv.from).ok_or(MoveError::EmptySource(mv.from))?;
    if !is_legal(board, mover, mv) {
        return Err(MoveError::Illegal(mv));
    }
    Ok(apply_move_unchecked(board, mv))
}

/// Slides the contiguous occupied line starting at `mv.from` one step along
/// the move direction, dropping whatever crosses the edge. Covers single
/// steps, own-line shifts and pushes alike. `mv` must be legal on `board`.
pub fn apply_move_unchecked(board: &Board, mv: Move) -> Board {
    let mut next = *board;
    let dir = mv.direction;
    let Some(dest) = mv.destination() else {
        return next;
    };

    if board.is_empty(dest) {
        next.set(dest, board.get(mv.from));
        next.set(mv.from, None);
        return next;
    }

    let mut line: ArrayVec<Square, BOARD_SIZE> = ArrayVec::new();
    let mut cursor = Some(mv.from);
    while let Some(square) = cursor.filter(|sq| !board.is_empty(*sq)) {
        line.push(square);
        cursor = square.step(dir);
    }

    for &square in line.iter().rev() {
        if let Some(target) = square.step(dir) {
            next.set(target, board.get(square));
        }
        next.set(square, None);
    }
    next
}

/// Number of `victim` pieces `mv` would push off the board.
pub fn pieces_pushed_off(board: &Board, mv: Move, victim: Color) -> u8 {
    let before = board.count(victim);
    before - apply_move_unchecked(board, mv).count(victim)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("valid square")
    }

    fn board_with(white: &[(u8, u8)], black: &[(u8, u8)]) -> Board {
        let mut board = Board::empty();
        for &(r, c) in white {
            board.put(Color::White, sq(r, c)).unwrap();
        }
        for &(r, c) in black {
            board.put(Color::Black, sq(r, c)).unwrap();
        }
        board
    }

    #[test]
    fn probe_counts_both_runs() {
        let board = board_with(&[(4, 0), (4, 1), (4, 2)], &[(4, 3), (4, 4)]);
        let probe = LineProbe::new(&board, sq(4, 0), Direction::Right, Color::White);
        assert_eq!(probe.allies, 3);
        assert_eq!(probe.opponents, 2);
        assert_eq!(probe.beyond, Some(sq(4, 5)));
        assert!(probe.outnumbers());

        let edge = board_with(&[(4, 4)], &[(4, 7), (4, 8)]);
        let probe = LineProbe::new(&edge, sq(4, 7), Direction::Right, Color::Black);
        assert_eq!((probe.allies, probe.opponents, probe.beyond), (2, 0, None));
    }

    #[test]
    fn move_into_empty_cell() {
        let board = board_with(&[(4, 4)], &[]);
        assert!(is_legal(&board, Color::White, Move::new(sq(4, 4), Direction::Up)));
        assert!(!is_legal(&board, Color::Black, Move::new(sq(4, 4), Direction::Up)));
        assert!(!is_legal(&board, Color::White, Move::new(sq(3, 4), Direction::Up)));
    }

    #[test]
    fn single_piece_cannot_leave_the_board() {
        let board = board_with(&[(0, 0)], &[]);
        assert!(!is_legal(&board, Color::White, Move::new(sq(0, 0), Direction::Up)));
        assert!(!is_legal(&board, Color::White, Move::new(sq(0, 0), Direction::Left)));
        assert_eq!(legal_moves(&board, Color::White).len(), 2);
    }

    #[test]
    fn equal_runs_cannot_push() {
        let board = board_with(&[(4, 2), (4, 3)], &[(4, 4), (4, 5)]);
        assert!(!is_legal(&board, Color::White, Move::new(sq(4, 2), Direction::Right)));
    }

    #[test]
    fn four_allies_cannot_push() {
        let board = board_with(&[(4, 0), (4, 1), (4, 2), (4, 3)], &[(4, 4)]);
        assert!(!is_legal(&board, Color::White, Move::new(sq(4, 0), Direction::Right)));
        assert!(is_legal(&board, Color::White, Move::new(sq(4, 1), Direction::Right)));
    }

    #[test]
    fn push_blocked_by_piece_behind() {
        let own_behind = board_with(&[(4, 2), (4, 3), (4, 5)], &[(4, 4)]);
        assert!(!is_legal(&own_behind, Color::White, Move::new(sq(4, 2), Direction::Right)));

        let opponent_tail = board_with(&[(4, 2), (4, 3)], &[(4, 4), (4, 5), (4, 6)]);
        assert!(!is_legal(&opponent_tail, Color::White, Move::new(sq(4, 2), Direction::Right)));
    }

    #[test]
    fn ally_line_shift_needs_room() {
        let board = board_with(&[(4, 4), (4, 5), (4, 6)], &[]);
        assert!(is_legal(&board, Color::White, Move::new(sq(4, 4), Direction::Right)));

        let at_edge = board_with(&[(4, 6), (4, 7), (4, 8)], &[]);
        assert!(!is_legal(&at_edge, Color::White, Move::new(sq(4, 6), Direction::Right)));
        assert!(is_legal(&at_edge, Color::White, Move::new(sq(4, 8), Direction::Left)));
    }

    #[test]
    fn ally_line_of_five_is_too_long() {
        let board = board_with(&[(4, 0), (4, 1), (4, 2), (4, 3), (4, 4)], &[]);
        assert!(!is_legal(&board, Color::White, Move::new(sq(4, 0), Direction::Right)));
        assert!(is_legal(&board, Color::White, Move::new(sq(4, 1), Direction::Right)));
    }

    #[test]
    fn enumeration_is_row_major_then_direction_order() {
        let board = board_with(&[(4, 4), (2, 2)], &[]);
        let moves = legal_moves(&board, Color::White);
        let expected = [
            Move::new(sq(2, 2), Direction::Up),
            Move::new(sq(2, 2), Direction::Down),
            Move::new(sq(2, 2), Direction::Left),
            Move::new(sq(2, 2), Direction::Right),
            Move::new(sq(4, 4), Direction::Up),
            Move::new(sq(4, 4), Direction::Down),
            Move::new(sq(4, 4), Direction::Left),
            Move::new(sq(4, 4), Direction::Right),
        ];
        assert_eq!(moves.as_slice(), &expected);
    }

    #[test]
    fn apply_single_step() {
        let board = board_with(&[(4, 4)], &[]);
        let next = apply_move(&board, Move::new(sq(4, 4), Direction::Left)).unwrap();
        assert_eq!(next.get(sq(4, 3)), Some(Color::White));
        assert_eq!(next.get(sq(4, 4)), None);
        assert_eq!(board.get(sq(4, 4)), Some(Color::White));
    }

    #[test]
    fn apply_push_off_edge() {
        let board = board_with(&[(4, 5), (4, 6), (4, 7)], &[(4, 8)]);
        let mv = Move::new(sq(4, 5), Direction::Right);
        assert_eq!(pieces_pushed_off(&board, mv, Color::Black), 1);
        let next = apply_move(&board, mv).unwrap();
        assert_eq!(next.count(Color::Black), 0);
        assert_eq!(next.count(Color::White), 3);
        assert_eq!(next.get(sq(4, 5)), None);
        assert_eq!(next.get(sq(4, 8)), Some(Color::White));
    }

    #[test]
    fn apply_rejects_bad_moves() {
        let board = board_with(&[(0, 0)], &[]);
        assert_eq!(
            apply_move(&board, Move::new(sq(1, 1), Direction::Up)),
            Err(MoveError::EmptySource(sq(1, 1)))
        );
        let off = Move::new(sq(0, 0), Direction::Up);
        assert_eq!(apply_move(&board, off), Err(MoveError::Illegal(off)));
    }

    #[test]
    fn has_legal_move_agrees_with_generation() {
        let board = Board::new();
        for color in Color::ALL {
            assert_eq!(
                has_legal_move(&board, color),
                !legal_moves(&board, color).is_empty()
            );
        }
        assert!(!has_legal_move(&Board::empty(), Color::White));
    }
}
