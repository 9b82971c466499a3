use sumito_core::{
    apply_move_unchecked, game_result, legal_moves, parse_layout, Board, Color, Direction,
    Evaluator, GameResult, Move, Position, Score, SearchLimits, Searcher, Square,
};
use sumito_engine::{AlphaBetaConfig, AlphaBetaSearcher, ClassicalEval, GreedySelector};

const MIDGAME: &str = "5www1/5wwww/4wwwww/6w2/b1b2w3/bb1b5/1bbbb4/1bbb5/1bb6";
const CONTACT: &str = "6www/5wwww/4wwww1/6w2/3bww3/2b1b4/1bbbb4/bbbb5/bbb6";

fn mv(row: u8, col: u8, direction: Direction) -> Move {
    Move::new(Square::new_unchecked(row, col), direction)
}

fn limits(depth: u8) -> SearchLimits {
    SearchLimits { depth: Some(depth) }
}

/// Plain minimax without pruning, used as the reference value.
fn minimax(board: &Board, depth: u8, maximizing: bool) -> Score {
    match game_result(board) {
        GameResult::Won(Color::White) => return Score::INFINITY,
        GameResult::Won(Color::Black) => return Score::NEG_INFINITY,
        GameResult::Ongoing => {}
    }
    if depth == 0 {
        return ClassicalEval::new().evaluate(board);
    }
    let color = if maximizing { Color::White } else { Color::Black };
    let scores = legal_moves(board, color)
        .into_iter()
        .map(|mv| minimax(&apply_move_unchecked(board, mv), depth - 1, !maximizing));
    if maximizing {
        scores.max().unwrap_or(Score::NEG_INFINITY)
    } else {
        scores.min().unwrap_or(Score::INFINITY)
    }
}

fn tree_size(board: &Board, depth: u8, maximizing: bool) -> u64 {
    if depth == 0 || game_result(board).is_over() {
        return 1;
    }
    let color = if maximizing { Color::White } else { Color::Black };
    1 + legal_moves(board, color)
        .into_iter()
        .map(|mv| tree_size(&apply_move_unchecked(board, mv), depth - 1, !maximizing))
        .sum::<u64>()
}

#[test]
fn search_returns_legal_move() {
    let position = Position::new();
    let mut searcher = AlphaBetaSearcher::default();

    let result = searcher.search_with_info(&position, limits(2));

    let best_move = result.best_move.expect("search should return move");
    assert!(position.moves().contains(&best_move));
    assert_eq!(best_move, mv(2, 4, Direction::Down));
    assert_eq!(result.score, Score(7700));
    assert_eq!(result.depth, 2);
    assert!(result.nodes > 0);
}

#[test]
fn black_minimizes_at_the_root() {
    let position = Position::from_parts(Board::new(), Color::Black);
    let mut searcher = AlphaBetaSearcher::default();

    let result = searcher.search_with_info(&position, limits(2));

    assert_eq!(result.best_move, Some(mv(5, 4, Direction::Down)));
    assert_eq!(result.score, Score(7730));
}

#[test]
fn search_finds_winning_push() {
    // ten white, nine black: pushing one more black piece off wins
    let position = Position::from_layout("9/9/9/9/9/9/wwwwwwwww/w8/bbbbbbbbb w").unwrap();
    let mut searcher = AlphaBetaSearcher::default();

    let result = searcher.search_with_info(&position, limits(3));

    assert_eq!(result.best_move, Some(mv(6, 0, Direction::Down)));
    assert_eq!(result.score, Score::INFINITY);
    assert!(result.score.is_win());
}

#[test]
fn decided_position_has_no_best_move() {
    let position = Position::from_layout("9/9/9/9/9/9/9/bb7/wb7 w").unwrap();
    let mut searcher = AlphaBetaSearcher::default();

    let result = searcher.search_with_info(&position, limits(3));

    assert!(result.best_move.is_none());
    assert_eq!(result.score, Score::NEG_INFINITY);
}

#[test]
fn depth_zero_matches_static_eval() {
    let mut searcher = AlphaBetaSearcher::default();
    for layout in [MIDGAME, CONTACT] {
        let board = parse_layout(layout).unwrap();
        let expected = ClassicalEval::new().evaluate(&board);
        for maximizing in [true, false] {
            let score = searcher.search(&board, 0, Score::NEG_INFINITY, Score::INFINITY, maximizing);
            assert_eq!(score, expected, "{layout}");
        }
    }
    let result = searcher.search_with_info(&Position::new(), limits(0));
    assert!(result.best_move.is_none());
    assert_eq!(result.score, Score(7880));
}

#[test]
fn pruning_agrees_with_plain_minimax() {
    let cases = [(CONTACT, 3), (MIDGAME, 2), (sumito_core::START_LAYOUT, 2)];
    for (layout, depth) in cases {
        let board = parse_layout(layout).unwrap();
        for maximizing in [true, false] {
            let mut searcher = AlphaBetaSearcher::default();
            let pruned =
                searcher.search(&board, depth, Score::NEG_INFINITY, Score::INFINITY, maximizing);
            assert_eq!(
                pruned,
                minimax(&board, depth, maximizing),
                "{layout} depth {depth} maximizing {maximizing}"
            );
        }
    }
}

#[test]
fn pruning_visits_fewer_nodes() {
    let board = parse_layout(MIDGAME).unwrap();
    let mut searcher = AlphaBetaSearcher::default();

    let score = searcher.search(&board, 3, Score::NEG_INFINITY, Score::INFINITY, true);

    assert_eq!(score, Score(8000));
    assert_eq!(searcher.nodes(), 9_972);
    assert_eq!(tree_size(&board, 3, true), 65_023);
}

#[test]
fn configured_depth_is_used_without_limit() {
    let mut searcher = AlphaBetaSearcher::new(AlphaBetaConfig { max_depth: 1 });
    let result = searcher.search_with_info(&Position::new(), SearchLimits::default());
    assert_eq!(result.depth, 1);
    assert_eq!(result.best_move, Some(mv(2, 4, Direction::Down)));
    assert_eq!(result.score, Score(9200));
}

#[test]
fn searcher_trait_returns_result() {
    let position = Position::new();
    let mut searcher = AlphaBetaSearcher::default();

    let result = Searcher::search(&mut searcher, &position, limits(1));

    assert!(result.best_move.is_some());
    assert!(result.nodes_searched > 0);
}

#[test]
fn greedy_searcher_plays_side_to_move() {
    let mut selector = GreedySelector::new();
    let black = Position::from_parts(Board::new(), Color::Black);

    let result = selector.search(&black, SearchLimits::default());

    assert_eq!(result.best_move, Some(mv(6, 4, Direction::Up)));
    assert_eq!(result.score, Score(9200));
    assert_eq!(result.nodes_searched, 40);
}
