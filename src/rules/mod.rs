//! Game rules for Tâb
//!
//! This module implements the rule set including:
//! - Candidate generation along each side's serpentine track
//! - Move validation (first move, home return, blocking, entry limits)
//! - Move execution with capture
//! - Win detection

pub mod execute;
pub mod movegen;
pub mod validate;
pub mod win;

use crate::board::{PieceId, Pos};

// Re-exports for convenient access
pub use execute::{apply_move, move_piece, MoveOutcome};
pub use movegen::{
    candidate_destinations, has_legal_move, is_frozen, legal_moves, movable_pieces, next_position,
    possible_moves,
};
pub use validate::{check_move, is_valid};
pub use win::{check_winner, is_game_over};

/// A piece and the cell it moves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub piece: PieceId,
    pub to: Pos,
}

impl Move {
    #[inline]
    pub fn new(piece: PieceId, to: Pos) -> Self {
        Self { piece, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.piece, self.to)
    }
}
