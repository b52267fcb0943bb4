//! Candidate generation
//!
//! A throw yields 0, 1 or 2 candidate destinations:
//! - inside a lane, the cell `throw` steps ahead along the side's track
//! - overflowing a home lane (0 or 3), the adjacent transit lane
//! - overflowing the side's choice lane, both lanes beyond it
//!
//! Overflow is always re-entered from the entry end of the target lane,
//! following that lane's own direction.

use crate::board::topology::{lane_entry, steps_to_leave};
use crate::board::{index_of, position_at, Board, PieceId, Pos, Side};

use super::validate::is_valid;
use super::Move;

/// Raw next cell along the owner's track, before any lane choice.
pub fn next_position(board: &Board, id: PieceId, throw: u8) -> Option<Pos> {
    let piece = board.piece(id)?;
    let columns = board.columns();
    let index = index_of(piece.pos(), piece.owner(), columns)?;
    position_at(index + throw as usize, piece.owner(), columns)
}

/// Every destination the geometry allows, legal or not.
pub fn candidate_destinations(board: &Board, id: PieceId, throw: u8) -> Vec<Pos> {
    let mut candidates = Vec::with_capacity(2);
    if throw == 0 {
        return candidates;
    }
    let Some(piece) = board.piece(id) else {
        return candidates;
    };

    let columns = board.columns();
    let pos = piece.pos();
    let side = piece.owner();
    let steps = throw as usize;
    let leave_at = steps_to_leave(pos, columns);

    let is_home_lane = pos.lane == 0 || pos.lane == 3;
    if steps < leave_at || (!is_home_lane && pos.lane != side.choice_lane()) {
        candidates.extend(next_position(board, id, throw));
        return candidates;
    }

    let overflow = steps - leave_at;
    match pos.lane {
        0 => candidates.extend(lane_entry(1, overflow, columns)),
        3 => candidates.extend(lane_entry(2, overflow, columns)),
        _ => {
            for target in side.choice_targets() {
                candidates.extend(lane_entry(target, overflow, columns));
            }
        }
    }
    candidates
}

/// Whether a piece is frozen in the opponent's home lane.
///
/// A piece that reached the opponent's home lane waits there until its own
/// home lane is empty.
#[inline]
pub fn is_frozen(board: &Board, id: PieceId) -> bool {
    board.piece(id).is_some_and(|piece| {
        piece.in_opponent_home() && board.has_piece_in_lane(piece.owner(), piece.owner().home_lane())
    })
}

/// Legal destinations for a piece and throw.
///
/// # Example
///
/// ```
/// use tab::{Board, PieceId, Pos, Side};
/// use tab::rules::possible_moves;
///
/// let board = Board::new(4).unwrap();
/// // The last piece of side A's home lane steps into lane 2
/// let moves = possible_moves(&board, PieceId::new(Side::SideA, 3), 1);
/// assert_eq!(moves, vec![Pos::new(2, 3)]);
/// ```
pub fn possible_moves(board: &Board, id: PieceId, throw: u8) -> Vec<Pos> {
    if throw == 0 || is_frozen(board, id) {
        return Vec::new();
    }
    candidate_destinations(board, id, throw)
        .into_iter()
        .filter(|&pos| is_valid(board, id, throw, Some(pos)))
        .collect()
}

/// All legal `(piece, destination)` pairs for a side, piece by piece.
pub fn legal_moves(board: &Board, side: Side, throw: u8) -> Vec<Move> {
    board
        .pieces(side)
        .iter()
        .flat_map(|piece| {
            let id = piece.id();
            possible_moves(board, id, throw)
                .into_iter()
                .map(move |to| Move::new(id, to))
        })
        .collect()
}

/// Pieces of a side with at least one legal destination
pub fn movable_pieces(board: &Board, side: Side, throw: u8) -> Vec<PieceId> {
    board
        .pieces(side)
        .iter()
        .map(|piece| piece.id())
        .filter(|&id| !possible_moves(board, id, throw).is_empty())
        .collect()
}

/// Whether a side can move at all with this throw
#[inline]
pub fn has_legal_move(board: &Board, side: Side, throw: u8) -> bool {
    board
        .pieces(side)
        .iter()
        .any(|piece| !possible_moves(board, piece.id(), throw).is_empty())
}
