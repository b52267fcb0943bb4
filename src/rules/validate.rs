//! Move legality
//!
//! Rules are checked in a fixed order and the first violation is reported:
//! 1. the throw is nonzero and the piece is on the board
//! 2. an unmoved piece starts only with a throw of 1
//! 3. a destination exists: the raw next cell, or a candidate the move
//!    generator produced for this piece and throw
//! 4. a piece that has left its home lane never returns to it
//! 5. a piece cannot land on a friendly piece
//! 6. the opponent's home lane may be entered only once
//! 7. no shuffling inside the own home lane while friendly pieces hold the
//!    opponent's home lane

use crate::board::{Board, Piece, PieceId, PieceState, Pos};
use crate::error::IllegalMove;

use super::movegen::{candidate_destinations, next_position};

/// Check a move and resolve its destination.
///
/// `candidate` must be one of the destinations
/// [`candidate_destinations`] lists for this piece and throw; without one
/// the raw next cell along the piece's track is used.
pub fn check_move(
    board: &Board,
    id: PieceId,
    throw: u8,
    candidate: Option<Pos>,
) -> Result<Pos, IllegalMove> {
    if throw == 0 {
        return Err(IllegalMove::ZeroThrow);
    }
    let piece = board.piece(id).ok_or(IllegalMove::UnknownPiece(id))?;

    if piece.state() == PieceState::NotMoved && throw != 1 {
        return Err(IllegalMove::FirstMoveNeedsTab(throw));
    }

    let dest = match candidate {
        Some(pos) if candidate_destinations(board, id, throw).contains(&pos) => pos,
        Some(pos) => return Err(IllegalMove::NotACandidate(pos)),
        None => next_position(board, id, throw).ok_or(IllegalMove::NoDestination(throw))?,
    };

    check_placement(board, piece, dest)?;
    Ok(dest)
}

/// Rules 4 to 7 for a resolved destination
fn check_placement(board: &Board, piece: &Piece, dest: Pos) -> Result<(), IllegalMove> {
    let side = piece.owner();
    let home = side.home_lane();
    let opponent_home = side.opponent_home_lane();

    if dest.lane == home && piece.lane() != home && piece.has_moved() {
        return Err(IllegalMove::ReturnHome);
    }

    if board.get(dest).is_some_and(|occupant| occupant.side == side) {
        return Err(IllegalMove::BlockedByOwnPiece(dest));
    }

    if dest.lane == opponent_home
        && piece.lane() != opponent_home
        && piece.has_entered_opponent_line()
    {
        return Err(IllegalMove::OpponentLaneReentry);
    }

    if piece.lane() == home && dest.lane == home && board.has_piece_in_lane(side, opponent_home) {
        return Err(IllegalMove::HomeLaneLocked);
    }

    Ok(())
}

/// Whether a move passes every rule.
#[inline]
pub fn is_valid(board: &Board, id: PieceId, throw: u8, candidate: Option<Pos>) -> bool {
    check_move(board, id, throw, candidate).is_ok()
}
