//! Uniform random move selection

use rand::Rng;

use crate::board::{Board, Side};
use crate::rules::{legal_moves, Move};

/// Any legal move for `side`, drawn uniformly.
///
/// Returns `None` when the side cannot move with this throw.
pub fn random_move<R: Rng + ?Sized>(
    board: &Board,
    side: Side,
    throw: u8,
    rng: &mut R,
) -> Option<Move> {
    let moves = legal_moves(board, side, throw);
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.random_range(0..moves.len())])
}
