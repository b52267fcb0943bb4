//! Win detection
//!
//! A side wins once the opponent has no pieces left. The check is the
//! caller's job after every successful move; the executor never calls it.

use crate::board::{Board, Side};

/// Winner of the position, if any.
#[inline]
pub fn check_winner(board: &Board) -> Option<Side> {
    if board.piece_count(Side::SideA) == 0 {
        Some(Side::SideB)
    } else if board.piece_count(Side::SideB) == 0 {
        Some(Side::SideA)
    } else {
        None
    }
}

/// Whether the position is decided
#[inline]
pub fn is_game_over(board: &Board) -> bool {
    check_winner(board).is_some()
}
