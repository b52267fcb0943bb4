//! Move execution with capture

use tracing::trace;

use crate::board::{Board, PieceId, Pos};
use crate::error::IllegalMove;

use super::validate::check_move;
use super::Move;

/// Result of a successful move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub piece: PieceId,
    pub from: Pos,
    pub to: Pos,
    /// Opposing piece removed from the destination, if any
    pub captured: Option<PieceId>,
}

impl MoveOutcome {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Move a piece after revalidating it.
///
/// `candidate` picks one of the generated destinations (see
/// [`super::possible_moves`]); without it the raw next cell is used. An
/// illegal move is reported without touching the board.
///
/// ```
/// use tab::{Board, PieceId, Pos, Side};
/// use tab::rules::move_piece;
///
/// let mut board = Board::new(4).unwrap();
/// let id = PieceId::new(Side::SideB, 0);
/// let outcome = move_piece(&mut board, id, 1, None).unwrap();
/// assert_eq!(outcome.to, Pos::new(1, 0));
/// assert!(!outcome.is_capture());
/// ```
pub fn move_piece(
    board: &mut Board,
    id: PieceId,
    throw: u8,
    candidate: Option<Pos>,
) -> Result<MoveOutcome, IllegalMove> {
    let to = check_move(board, id, throw, candidate)?;
    let from = board
        .piece(id)
        .map(|piece| piece.pos())
        .ok_or(IllegalMove::UnknownPiece(id))?;

    let captured = board.relocate(id, to);
    trace!(piece = %id, %from, %to, captured = ?captured, "moved");

    Ok(MoveOutcome {
        piece: id,
        from,
        to,
        captured,
    })
}

/// Apply a generated move
#[inline]
pub fn apply_move(board: &mut Board, mov: Move, throw: u8) -> Result<MoveOutcome, IllegalMove> {
    move_piece(board, mov.piece, throw, Some(mov.to))
}
