//! Pieces and their movement history

use serde::{Deserialize, Serialize};

use super::{Pos, Side};

/// Stable piece identifier: owner plus the column it was set up on.
///
/// Identifiers survive board clones, which lets the search name a piece
/// in a simulated position and the caller replay the choice on the live board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceId {
    pub side: Side,
    pub index: u8,
}

impl PieceId {
    #[inline]
    pub fn new(side: Side, index: u8) -> Self {
        Self { side, index }
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.side, self.index)
    }
}

/// Classification derived from a piece's position and history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceState {
    /// Has not moved since setup
    NotMoved,
    /// Moved, and not currently in the opponent's home lane
    InPlay,
    /// Currently in the opponent's home lane
    Veteran,
}

/// A piece on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    pos: Pos,
    has_moved: bool,
    has_entered_opponent_line: bool,
}

impl Piece {
    /// Piece standing on its setup cell
    pub(crate) fn new(id: PieceId, pos: Pos) -> Self {
        Self {
            id,
            pos,
            has_moved: false,
            has_entered_opponent_line: false,
        }
    }

    /// Piece with explicit history (snapshot adoption)
    pub(crate) fn with_history(
        id: PieceId,
        pos: Pos,
        has_moved: bool,
        has_entered_opponent_line: bool,
    ) -> Self {
        Self {
            id,
            pos,
            has_moved,
            has_entered_opponent_line,
        }
    }

    #[inline]
    pub fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub fn owner(&self) -> Side {
        self.id.side
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    #[inline]
    pub fn lane(&self) -> u8 {
        self.pos.lane
    }

    #[inline]
    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    #[inline]
    pub fn has_entered_opponent_line(&self) -> bool {
        self.has_entered_opponent_line
    }

    /// Whether the piece sits in the opponent's home lane
    #[inline]
    pub fn in_opponent_home(&self) -> bool {
        self.pos.lane == self.owner().opponent_home_lane()
    }

    /// Whether the piece sits in its own home lane
    #[inline]
    pub fn in_own_home(&self) -> bool {
        self.pos.lane == self.owner().home_lane()
    }

    /// Current classification, computed from position and flags.
    pub fn state(&self) -> PieceState {
        if !self.has_moved {
            PieceState::NotMoved
        } else if self.in_opponent_home() {
            PieceState::Veteran
        } else {
            PieceState::InPlay
        }
    }

    /// Relocate after a successful move. Flags only ever turn on.
    pub(crate) fn move_to(&mut self, pos: Pos) {
        self.pos = pos;
        self.has_moved = true;
        if self.in_opponent_home() {
            self.has_entered_opponent_line = true;
        }
    }
}
