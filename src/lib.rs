//! Tâb rule engine and AI
//!
//! An engine for the Tâb family of race-and-capture games:
//! - Four lanes of `N` columns, each side starting with `N` pieces on its home lane
//! - Pieces follow a serpentine track through the transit lanes into the
//!   opponent's home lane
//! - A piece's first move needs a throw of 1 (a "tâb")
//! - Landing on an opposing piece captures it
//! - A side wins once the opponent has no pieces left
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation, track topology and snapshots
//! - [`rules`]: Candidate generation, validation, execution and win detection
//! - [`eval`]: Position evaluation
//! - [`search`]: Minimax with alpha-beta pruning and random selection
//! - [`engine`]: AI engine choosing a strategy per difficulty
//! - [`game`]: Turn controller for throws and moves
//! - [`selfplay`]: AI-vs-AI games
//!
//! # Quick Start
//!
//! ```
//! use tab::{AIEngine, Difficulty, Game, Side, ThrowOutcome};
//!
//! let mut game = Game::new(4, Side::SideA).unwrap();
//! let mut engine = AIEngine::with_seed(Difficulty::Medium.into(), 1);
//!
//! // A throw of 1 lets the last piece of the home lane start
//! assert_eq!(game.throw_sticks(1).unwrap(), ThrowOutcome::MustMove);
//! let mov = engine.get_move(game.board(), Side::SideA, 1).unwrap();
//! let played = game.play(mov.piece, Some(mov.to)).unwrap();
//!
//! // A tâb grants another throw
//! assert_eq!(played.next, Side::SideA);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod selfplay;
pub mod throw;

// Re-export commonly used types for convenience
pub use board::{Board, BoardSnapshot, PieceId, PieceSnapshot, PieceState, Pos, Side};
pub use config::{MatchConfig, PlayerConfig};
pub use engine::{select_move, AIEngine, AiConfig, Difficulty, MoveResult, SearchType, Strategy};
pub use error::{BoardError, ConfigError, GameError, IllegalMove};
pub use game::{Game, PlayOutcome, ThrowOutcome};
pub use rules::{Move, MoveOutcome};
pub use throw::StickThrow;
