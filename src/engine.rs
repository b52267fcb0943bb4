//! AI engine selecting moves for either side
//!
//! The engine picks one of two strategies:
//!
//! 1. **Random**: any legal move, drawn uniformly
//! 2. **Minimax**: depth-limited alpha-beta search over the fixed throw
//!
//! A minimax configuration with depth 0 falls back to a random pick.
//!
//! # Example
//!
//! ```
//! use tab::{AIEngine, Board, Difficulty, Side};
//!
//! let mut engine = AIEngine::with_seed(Difficulty::Hard.into(), 7);
//! let board = Board::new(4).unwrap();
//!
//! let result = engine.get_move_with_stats(&board, Side::SideB, 1);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Side};
use crate::rules::Move;
use crate::search::{random_move, Searcher};

/// How the AI picks its move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    Random,
    #[default]
    Minimax,
}

/// Strategy and search depth of one AI player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub strategy: Strategy,
    /// Plies searched by minimax, including the root move
    pub depth: u8,
}

impl Default for AiConfig {
    fn default() -> Self {
        Difficulty::default().into()
    }
}

/// Named AI strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl From<Difficulty> for AiConfig {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                strategy: Strategy::Random,
                depth: 0,
            },
            Difficulty::Medium => Self {
                strategy: Strategy::Minimax,
                depth: 2,
            },
            Difficulty::Hard => Self {
                strategy: Strategy::Minimax,
                depth: 3,
            },
        }
    }
}

/// Which strategy produced the result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    Random,
    Minimax,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Chosen move, `None` when the side cannot move
    pub best_move: Option<Move>,
    /// Minimax score of the move; 0 for random picks
    pub score: i32,
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Pick a move for `side` under `config`.
///
/// The board is only read; every simulated move happens on copies.
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    side: Side,
    throw: u8,
    config: AiConfig,
    rng: &mut R,
) -> MoveResult {
    let start = Instant::now();

    let result = if config.strategy == Strategy::Random || config.depth == 0 {
        MoveResult {
            best_move: random_move(board, side, throw, rng),
            score: 0,
            search_type: SearchType::Random,
            time_ms: 0,
            nodes: 0,
        }
    } else {
        let found = Searcher::new(side).search(board, throw, config.depth);
        MoveResult {
            best_move: found.best_move,
            score: found.score,
            search_type: SearchType::Minimax,
            time_ms: 0,
            nodes: found.stats.nodes,
        }
    };

    let time_ms = start.elapsed().as_millis() as u64;
    debug!(
        %side,
        throw,
        strategy = ?result.search_type,
        best = ?result.best_move,
        score = result.score,
        time_ms,
        "ai move"
    );
    MoveResult { time_ms, ..result }
}

/// AI player with its own random source.
///
/// # Example
///
/// ```
/// use tab::{AIEngine, Board, Difficulty, Side};
///
/// let mut engine = AIEngine::new(Difficulty::Medium.into());
/// let board = Board::new(4).unwrap();
/// if let Some(mov) = engine.get_move(&board, Side::SideA, 1) {
///     println!("Play {mov}");
/// }
/// ```
pub struct AIEngine {
    config: AiConfig,
    rng: StdRng,
}

impl AIEngine {
    /// Engine seeded from the operating system.
    #[must_use]
    pub fn new(config: AiConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Engine with a reproducible random source.
    #[must_use]
    pub fn with_seed(config: AiConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn config(&self) -> AiConfig {
        self.config
    }

    /// Best move for the given position, or `None` if `side` cannot move.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, side: Side, throw: u8) -> Option<Move> {
        self.get_move_with_stats(board, side, throw).best_move
    }

    /// Best move with search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, side: Side, throw: u8) -> MoveResult {
        select_move(board, side, throw, self.config, &mut self.rng)
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new(AiConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PieceId, PieceSnapshot, Pos};
    use crate::rules::legal_moves;

    fn capture_position() -> Board {
        let mut board = Board::empty(4).unwrap();
        for piece in [
            PieceSnapshot::moved(PieceId::new(Side::SideB, 0), Pos::new(1, 1)),
            PieceSnapshot::moved(PieceId::new(Side::SideB, 1), Pos::new(2, 3)),
            PieceSnapshot::moved(PieceId::new(Side::SideA, 0), Pos::new(1, 3)),
            PieceSnapshot::fresh(PieceId::new(Side::SideA, 1), Pos::new(3, 0)),
        ] {
            board.place(piece).unwrap();
        }
        board
    }

    #[test]
    fn test_difficulty_levels() {
        assert_eq!(
            AiConfig::from(Difficulty::Easy),
            AiConfig {
                strategy: Strategy::Random,
                depth: 0
            }
        );
        assert_eq!(AiConfig::from(Difficulty::Medium).depth, 2);
        assert_eq!(AiConfig::from(Difficulty::Hard).depth, 3);
        assert_eq!(AiConfig::default(), AiConfig::from(Difficulty::Medium));
    }

    #[test]
    fn test_random_strategy_returns_legal_move() {
        let board = Board::new(5).unwrap();
        let mut engine = AIEngine::with_seed(Difficulty::Easy.into(), 1);
        let result = engine.get_move_with_stats(&board, Side::SideA, 1);
        assert_eq!(result.search_type, SearchType::Random);
        assert!(legal_moves(&board, Side::SideA, 1).contains(&result.best_move.unwrap()));
    }

    #[test]
    fn test_zero_depth_minimax_is_random() {
        let config = AiConfig {
            strategy: Strategy::Minimax,
            depth: 0,
        };
        let board = Board::new(4).unwrap();
        let result = AIEngine::with_seed(config, 1).get_move_with_stats(&board, Side::SideB, 1);
        assert_eq!(result.search_type, SearchType::Random);
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_minimax_strategy_matches_searcher() {
        let board = capture_position();
        let mut engine = AIEngine::with_seed(Difficulty::Hard.into(), 1);
        let result = engine.get_move_with_stats(&board, Side::SideB, 2);
        let direct = Searcher::new(Side::SideB).search(&board, 2, 3);

        assert_eq!(result.search_type, SearchType::Minimax);
        assert_eq!(result.best_move, direct.best_move);
        assert_eq!(result.score, direct.score);
        assert_eq!(result.nodes, direct.stats.nodes);
    }

    #[test]
    fn test_no_move_reported_as_none() {
        let board = Board::new(4).unwrap();
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let mut engine = AIEngine::with_seed(difficulty.into(), 5);
            assert_eq!(engine.get_move(&board, Side::SideA, 4), None);
        }
    }

    #[test]
    fn test_seeded_engines_agree() {
        let board = Board::new(6).unwrap();
        let mut first = AIEngine::with_seed(Difficulty::Easy.into(), 99);
        let mut second = AIEngine::with_seed(Difficulty::Easy.into(), 99);
        for throw in [1, 1, 1] {
            assert_eq!(
                first.get_move(&board, Side::SideB, throw),
                second.get_move(&board, Side::SideB, throw)
            );
        }
    }

    #[test]
    fn test_config_parses_from_toml() {
        let config: AiConfig = toml::from_str("strategy = \"random\"\ndepth = 4").unwrap();
        assert_eq!(config.strategy, Strategy::Random);
        assert_eq!(config.depth, 4);

        let config: AiConfig = toml::from_str("depth = 1").unwrap();
        assert_eq!(config.strategy, Strategy::Minimax);
    }
}
