//! Heuristic evaluation function for Tâb positions
//!
//! Positions are scored for the maximizing side from:
//! - Material (pieces still in play)
//! - Pieces holding the opponent's home lane
//! - Progress of the maximizer's pieces along its own track
//! - Veterans on both sides

use crate::board::{Board, PieceState, Side};

/// Evaluation weights
pub struct EvalScore;

impl EvalScore {
    /// Decided position
    pub const WIN: i32 = 1000;
    /// Each piece of material
    pub const PIECE: i32 = 100;
    /// Each piece standing in the opposing home lane
    pub const OPPONENT_HOME: i32 = 50;
    /// Each lane of progress of a maximizer piece
    pub const PROGRESS: i32 = 10;
    /// Each veteran
    pub const VETERAN: i32 = 15;
}

/// Evaluate the board from the perspective of `maximizer`.
///
/// Returns `-EvalScore::WIN` when the maximizer has no pieces left and
/// `EvalScore::WIN` when the opponent has none. The progress term only
/// counts the maximizer's pieces, so the score is not symmetric between
/// the two sides.
#[must_use]
pub fn evaluate(board: &Board, maximizer: Side) -> i32 {
    let minimizer = maximizer.opponent();

    let max_count = board.piece_count(maximizer) as i32;
    let min_count = board.piece_count(minimizer) as i32;
    if max_count == 0 {
        return -EvalScore::WIN;
    }
    if min_count == 0 {
        return EvalScore::WIN;
    }

    let material = (max_count - min_count) * EvalScore::PIECE;

    let max_in_opponent_home = board.count_in_lane(maximizer, maximizer.opponent_home_lane()) as i32;
    let min_in_opponent_home = board.count_in_lane(minimizer, minimizer.opponent_home_lane()) as i32;
    let home_pressure = (max_in_opponent_home - min_in_opponent_home) * EvalScore::OPPONENT_HOME;

    let progress: i32 = board
        .pieces(maximizer)
        .iter()
        .map(|piece| maximizer.progress(piece.lane()) as i32)
        .sum();

    let veterans = (count_veterans(board, maximizer) - count_veterans(board, minimizer))
        * EvalScore::VETERAN;

    material + home_pressure + progress * EvalScore::PROGRESS + veterans
}

#[inline]
fn count_veterans(board: &Board, side: Side) -> i32 {
    board
        .pieces(side)
        .iter()
        .filter(|piece| piece.state() == PieceState::Veteran)
        .count() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PieceId, PieceSnapshot, Pos};

    fn sample_board() -> Board {
        let mut board = Board::empty(4).unwrap();
        board
            .place(PieceSnapshot::moved(PieceId::new(Side::SideB, 0), Pos::new(3, 1)))
            .unwrap();
        board
            .place(PieceSnapshot::moved(PieceId::new(Side::SideB, 1), Pos::new(1, 0)))
            .unwrap();
        board
            .place(PieceSnapshot::fresh(PieceId::new(Side::SideA, 0), Pos::new(3, 0)))
            .unwrap();
        board
    }

    #[test]
    fn test_start_position_is_even() {
        let board = Board::new(3).unwrap();
        assert_eq!(evaluate(&board, Side::SideA), 0);
        assert_eq!(evaluate(&board, Side::SideB), 0);
    }

    #[test]
    fn test_weighted_terms() {
        let board = sample_board();
        // material 100, home pressure 50, progress (3 + 1) * 10, veterans 15
        assert_eq!(evaluate(&board, Side::SideB), 205);
        // material -100, home pressure -50, progress 0, veterans -15
        assert_eq!(evaluate(&board, Side::SideA), -165);
    }

    #[test]
    fn test_decided_positions() {
        let mut board = Board::empty(3).unwrap();
        board
            .place(PieceSnapshot::fresh(PieceId::new(Side::SideB, 0), Pos::new(0, 0)))
            .unwrap();
        assert_eq!(evaluate(&board, Side::SideB), EvalScore::WIN);
        assert_eq!(evaluate(&board, Side::SideA), -EvalScore::WIN);
    }

    #[test]
    fn test_progress_rewards_advanced_pieces() {
        let mut behind = Board::new(3).unwrap();
        let mut ahead = Board::new(3).unwrap();
        crate::rules::move_piece(&mut behind, PieceId::new(Side::SideB, 0), 1, None).unwrap();
        crate::rules::move_piece(&mut ahead, PieceId::new(Side::SideB, 0), 1, None).unwrap();
        crate::rules::move_piece(&mut ahead, PieceId::new(Side::SideB, 0), 3, None).unwrap();
        assert!(evaluate(&ahead, Side::SideB) > evaluate(&behind, Side::SideB));
    }
}
