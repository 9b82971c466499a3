pub mod board;
pub mod constants;
pub mod eval;
pub mod game;
pub mod layout;
pub mod movegen;
pub mod notation;
pub mod position;
pub mod search;
pub mod types;

pub use board::{Board, BoardError};
pub use constants::{
    BOARD_SIZE, ELIMINATION_THRESHOLD, NUM_SQUARES, SQUARES, START_LAYOUT, START_POSITION,
    STARTING_PIECES,
};
pub use eval::Evaluator;
pub use game::{game_result, is_eliminated, Game};
pub use layout::{encode_layout, parse_layout, LayoutError};
pub use movegen::{
    apply_move, apply_move_unchecked, has_legal_move, is_legal, legal_moves, pieces_pushed_off,
    LineProbe, MoveError,
};
pub use notation::{move_to_text, parse_legal_move, parse_move, NotationError};
pub use position::{Position, PositionError};
pub use search::{SearchLimits, SearchResult, Searcher};
pub use types::{Color, Direction, GameResult, Move, MoveList, Score, Square};
