//! Wholesale board snapshots
//!
//! A snapshot lists every piece with its history flags. It is how a state
//! produced elsewhere (a saved game, a remote authority) is adopted as-is.

use serde::{Deserialize, Serialize};

use crate::error::BoardError;

use super::board::Board;
use super::piece::{Piece, PieceId};
use super::Pos;

/// One piece in a [`BoardSnapshot`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub id: PieceId,
    pub pos: Pos,
    #[serde(default)]
    pub has_moved: bool,
    #[serde(default)]
    pub has_entered_opponent_line: bool,
}

impl PieceSnapshot {
    /// A piece that has not moved yet
    pub fn fresh(id: PieceId, pos: Pos) -> Self {
        Self {
            id,
            pos,
            has_moved: false,
            has_entered_opponent_line: false,
        }
    }

    /// A piece that has moved; the entry flag is set when `pos` is in the
    /// opponent's home lane.
    pub fn moved(id: PieceId, pos: Pos) -> Self {
        Self {
            id,
            pos,
            has_moved: true,
            has_entered_opponent_line: pos.lane == id.side.opponent_home_lane(),
        }
    }

    /// Mark the piece as having already visited the opponent's home lane
    pub fn entered(mut self) -> Self {
        self.has_moved = true;
        self.has_entered_opponent_line = true;
        self
    }
}

impl From<&Piece> for PieceSnapshot {
    fn from(piece: &Piece) -> Self {
        Self {
            id: piece.id(),
            pos: piece.pos(),
            has_moved: piece.has_moved(),
            has_entered_opponent_line: piece.has_entered_opponent_line(),
        }
    }
}

/// Full board state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub columns: usize,
    #[serde(default)]
    pub pieces: Vec<PieceSnapshot>,
}

impl Board {
    /// Capture the current state
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            columns: self.columns(),
            pieces: self.all_pieces().map(PieceSnapshot::from).collect(),
        }
    }

    /// Build a board from a snapshot, rejecting inconsistent layouts.
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Result<Self, BoardError> {
        let mut board = Board::empty(snapshot.columns)?;
        for piece in &snapshot.pieces {
            board.place(*piece)?;
        }
        Ok(board)
    }
}
