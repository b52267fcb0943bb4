//! Board representation for Tâb

pub mod board;
pub mod piece;
pub mod snapshot;
pub mod topology;


use serde::{Deserialize, Serialize};

// Re-exports
pub use board::Board;
pub use piece::{Piece, PieceId, PieceState};
pub use snapshot::{BoardSnapshot, PieceSnapshot};
pub use topology::{index_of, lane_ascends, position_at};

/// Board height (lanes 0..=3)
pub const LANES: usize = 4;

/// Narrowest playable board
pub const MIN_COLUMNS: usize = 2;

/// Widest board representable with byte coordinates
pub const MAX_COLUMNS: usize = u8::MAX as usize;

/// The two players.
///
/// `SideA` starts on lane 3, `SideB` on lane 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Side {
    SideA,
    SideB,
}

impl Side {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::SideA => Side::SideB,
            Side::SideB => Side::SideA,
        }
    }

    /// Lane where this side's pieces start
    #[inline]
    pub fn home_lane(self) -> u8 {
        match self {
            Side::SideA => 3,
            Side::SideB => 0,
        }
    }

    /// Lane where the opponent's pieces start
    #[inline]
    pub fn opponent_home_lane(self) -> u8 {
        self.opponent().home_lane()
    }

    /// Transit lane from which an overflowing move may branch into two lanes
    #[inline]
    pub fn choice_lane(self) -> u8 {
        match self {
            Side::SideA => 1,
            Side::SideB => 2,
        }
    }

    /// Lanes reachable when a move overflows the choice lane, in lane order
    #[inline]
    pub fn choice_targets(self) -> [u8; 2] {
        match self {
            Side::SideA => [0, 2],
            Side::SideB => [1, 3],
        }
    }

    /// Lanes in the order this side's track visits them
    #[inline]
    pub fn lane_order(self) -> [u8; LANES] {
        match self {
            Side::SideA => [3, 2, 1, 0],
            Side::SideB => [0, 1, 2, 3],
        }
    }

    /// How far along this side's track a lane is (own home = 0, opponent home = 3)
    #[inline]
    pub fn progress(self, lane: u8) -> u8 {
        debug_assert!((lane as usize) < LANES);
        match self {
            Side::SideA => 3 - lane,
            Side::SideB => lane,
        }
    }

    /// Both sides, `SideA` first
    pub const ALL: [Side; 2] = [Side::SideA, Side::SideB];
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::SideA => write!(f, "side A"),
            Side::SideB => write!(f, "side B"),
        }
    }
}

/// Cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub lane: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(lane: u8, col: u8) -> Self {
        debug_assert!((lane as usize) < LANES);
        Self { lane, col }
    }

    /// Grid offset for a board of `columns` columns
    #[inline]
    pub fn to_index(self, columns: usize) -> usize {
        self.lane as usize * columns + self.col as usize
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lane, self.col)
    }
}
