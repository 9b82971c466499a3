pub mod alphabeta;
pub mod classical;
pub mod error;
pub mod logging;
pub mod selector;
pub mod selfplay;

pub use alphabeta::{AlphaBetaConfig, AlphaBetaResult, AlphaBetaSearcher};
pub use classical::{centralization_bonus, evaluate, ClassicalEval, Criterion, EvalBreakdown};
pub use error::EngineError;
pub use logging::init_logging;
pub use selector::{choose_ai_move, GreedySelector, Selection, AI_COLOR};
pub use selfplay::{play_game, AiKind, GameRecord, Outcome, SelfPlayConfig};
