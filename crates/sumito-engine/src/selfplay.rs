use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use sumito_core::{move_to_text, Color, Game, GameResult, SearchLimits, Searcher};
use tracing::{debug, info};

use crate::alphabeta::{AlphaBetaConfig, AlphaBetaSearcher};
use crate::selector::GreedySelector;

/// Which move chooser plays a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiKind {
    Greedy,
    AlphaBeta { depth: u8 },
}

impl AiKind {
    /// Parses `greedy`, `alphabeta` or `alphabeta:<depth>`.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim().to_ascii_lowercase();
        match text.split_once(':') {
            None if text == "greedy" => Some(Self::Greedy),
            None if text == "alphabeta" => Some(Self::AlphaBeta {
                depth: AlphaBetaConfig::default().max_depth,
            }),
            Some(("alphabeta", depth)) => depth.parse().ok().map(|depth| Self::AlphaBeta { depth }),
            _ => None,
        }
    }

    pub fn searcher(self) -> Box<dyn Searcher> {
        match self {
            Self::Greedy => Box::new(GreedySelector::new()),
            Self::AlphaBeta { depth } => {
                Box::new(AlphaBetaSearcher::new(AlphaBetaConfig { max_depth: depth }))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    WhiteWin,
    BlackWin,
    /// Neither side could move on consecutive turns.
    Stalemate,
    MoveLimit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<String>,
    pub result: Outcome,
    pub total_moves: u32,
    pub final_layout: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfPlayConfig {
    pub white: AiKind,
    pub black: AiKind,
    pub max_moves: u32,
    /// Leading plies played uniformly at random so repeated games differ.
    pub random_opening: u32,
    pub seed: u64,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            white: AiKind::AlphaBeta {
                depth: AlphaBetaConfig::default().max_depth,
            },
            black: AiKind::Greedy,
            max_moves: 200,
            random_opening: 0,
            seed: 0,
        }
    }
}

/// Plays one game between the two configured choosers. A side without a
/// legal move passes; two passes in a row end the game as a stalemate.
pub fn play_game(config: &SelfPlayConfig) -> GameRecord {
    let mut game = Game::new();
    let mut white = config.white.searcher();
    let mut black = config.black.searcher();
    let mut moves = Vec::new();
    let mut consecutive_passes = 0u8;
    let mut rng = StdRng::seed_from_u64(config.seed);

    let outcome = loop {
        if let GameResult::Won(winner) = game.result() {
            break match winner {
                Color::White => Outcome::WhiteWin,
                Color::Black => Outcome::BlackWin,
            };
        }
        if game.move_number() >= config.max_moves {
            break Outcome::MoveLimit;
        }

        let chosen = if game.move_number() < config.random_opening {
            game.moves().as_slice().choose(&mut rng).copied()
        } else {
            let searcher = match game.turn() {
                Color::White => white.as_mut(),
                Color::Black => black.as_mut(),
            };
            searcher.search(game.position(), SearchLimits::default()).best_move
        };

        match chosen {
            Some(mv) => {
                if let Err(err) = game.make_move(&mv) {
                    debug!(%mv, %err, "searcher returned an unplayable move");
                    break Outcome::Stalemate;
                }
                consecutive_passes = 0;
                moves.push(move_to_text(&mv));
            }
            None => {
                consecutive_passes += 1;
                if consecutive_passes >= 2 {
                    break Outcome::Stalemate;
                }
                debug!(side = %game.turn(), "no legal move, passing");
                game.pass();
            }
        }
    };

    info!(
        result = ?outcome,
        moves = game.move_number(),
        white = game.remaining(Color::White),
        black = game.remaining(Color::Black),
        "game finished"
    );

    GameRecord {
        moves,
        result: outcome,
        total_moves: game.move_number(),
        final_layout: game.position().layout(),
    }
}
