//! Minimax search with alpha-beta pruning
//!
//! The throw is fixed for the whole tree: the search only decides which
//! piece and destination to pick for a throw that has already been made,
//! and both sides are assumed to keep throwing the same value.
//!
//! Every simulated move is played on a clone of the parent position, so the
//! caller's board is never touched.
//!
//! # Example
//!
//! ```
//! use tab::{Board, Side};
//! use tab::search::Searcher;
//!
//! let board = Board::new(4).unwrap();
//! let mut searcher = Searcher::new(Side::SideB);
//!
//! let result = searcher.search(&board, 1, 2);
//! if let Some(best) = result.best_move {
//!     println!("Best move: {best}");
//! }
//! ```

use tracing::{debug, trace};

use crate::board::{Board, Side};
use crate::eval::{evaluate, EvalScore};
use crate::rules::{apply_move, legal_moves, Move};

/// Infinity score for alpha-beta bounds
const INF: i32 = i32::MAX;

/// Search counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited below the root
    pub nodes: u64,
    /// Branches abandoned because `beta <= alpha`
    pub cutoffs: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` when the side cannot move
    pub best_move: Option<Move>,
    /// Score of the best move from the maximizer's perspective
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    pub stats: SearchStats,
}

/// Depth-limited minimax searcher for one side.
#[derive(Debug, Clone)]
pub struct Searcher {
    maximizer: Side,
    pruning: bool,
    stats: SearchStats,
}

impl Searcher {
    /// Searcher playing `maximizer`, with alpha-beta pruning.
    pub fn new(maximizer: Side) -> Self {
        Self {
            maximizer,
            pruning: true,
            stats: SearchStats::default(),
        }
    }

    /// Full-width searcher. Slower, same answers; used to check pruning.
    pub fn without_pruning(maximizer: Side) -> Self {
        Self {
            pruning: false,
            ..Self::new(maximizer)
        }
    }

    #[inline]
    pub fn maximizer(&self) -> Side {
        self.maximizer
    }

    /// Counters of the last search
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Pick the best move for the maximizer.
    ///
    /// Each root move is scored by a full-window minimax of the reply tree
    /// with `depth - 1` plies. The first move with a strictly greater score
    /// wins ties.
    pub fn search(&mut self, board: &Board, throw: u8, depth: u8) -> SearchResult {
        self.stats = SearchStats::default();

        let mut best_move = None;
        let mut best_score = -INF;

        for mov in legal_moves(board, self.maximizer, throw) {
            let Some(child) = simulate(board, mov, throw) else {
                continue;
            };
            let score = self.minimax(&child, depth.saturating_sub(1), false, -INF, INF, throw);
            trace!(%mov, score, "root move");

            if score > best_score {
                best_score = score;
                best_move = Some(mov);
            }
        }

        if best_move.is_none() {
            best_score = evaluate(board, self.maximizer);
        }

        debug!(
            side = %self.maximizer,
            throw,
            depth,
            best = ?best_move,
            score = best_score,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "search finished"
        );

        SearchResult {
            best_move,
            score: best_score,
            depth,
            stats: self.stats,
        }
    }

    /// Minimax value of `board` with `depth` plies left.
    ///
    /// At depth 0 this is exactly [`evaluate`].
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        throw: u8,
    ) -> i32 {
        self.stats.nodes += 1;

        let minimizer = self.maximizer.opponent();
        if depth == 0 {
            return evaluate(board, self.maximizer);
        }
        if board.piece_count(self.maximizer) == 0 {
            return -EvalScore::WIN;
        }
        if board.piece_count(minimizer) == 0 {
            return EvalScore::WIN;
        }

        let to_move = if maximizing { self.maximizer } else { minimizer };
        let moves = legal_moves(board, to_move, throw);
        if moves.is_empty() {
            return evaluate(board, self.maximizer);
        }

        if maximizing {
            let mut max_eval = -INF;
            for mov in moves {
                let Some(child) = simulate(board, mov, throw) else {
                    continue;
                };
                let score = self.minimax(&child, depth - 1, false, alpha, beta, throw);
                max_eval = max_eval.max(score);
                alpha = alpha.max(score);
                if self.pruning && beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            max_eval
        } else {
            let mut min_eval = INF;
            for mov in moves {
                let Some(child) = simulate(board, mov, throw) else {
                    continue;
                };
                let score = self.minimax(&child, depth - 1, true, alpha, beta, throw);
                min_eval = min_eval.min(score);
                beta = beta.min(score);
                if self.pruning && beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            min_eval
        }
    }
}

/// Position after `mov`, on a fresh copy.
#[inline]
fn simulate(board: &Board, mov: Move, throw: u8) -> Option<Board> {
    let mut child = board.clone();
    apply_move(&mut child, mov, throw).ok()?;
    Some(child)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PieceId, PieceSnapshot, Pos};
    use crate::rules::move_piece;

    fn a(index: u8) -> PieceId {
        PieceId::new(Side::SideA, index)
    }

    fn b(index: u8) -> PieceId {
        PieceId::new(Side::SideB, index)
    }

    fn board_with(columns: usize, pieces: &[PieceSnapshot]) -> Board {
        let mut board = Board::empty(columns).unwrap();
        for &piece in pieces {
            board.place(piece).unwrap();
        }
        board
    }

    fn capture_position() -> Board {
        board_with(
            4,
            &[
                PieceSnapshot::moved(b(0), Pos::new(1, 1)),
                PieceSnapshot::moved(b(1), Pos::new(2, 3)),
                PieceSnapshot::moved(a(0), Pos::new(1, 3)),
                PieceSnapshot::fresh(a(1), Pos::new(3, 0)),
            ],
        )
    }

    /// A few plies into a 3-column game
    fn midgame_position() -> Board {
        let mut board = Board::new(3).unwrap();
        move_piece(&mut board, b(0), 1, None).unwrap();
        move_piece(&mut board, a(2), 1, None).unwrap();
        move_piece(&mut board, b(1), 1, None).unwrap();
        move_piece(&mut board, a(1), 1, None).unwrap();
        board
    }

    #[test]
    fn test_depth_zero_is_static_evaluation() {
        let positions = [Board::new(3).unwrap(), capture_position(), midgame_position()];
        for board in &positions {
            for side in Side::ALL {
                let mut searcher = Searcher::new(side);
                for maximizing in [true, false] {
                    for throw in [1, 2, 3, 4, 6] {
                        assert_eq!(
                            searcher.minimax(board, 0, maximizing, -INF, INF, throw),
                            evaluate(board, side)
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_search_takes_capture() {
        let board = capture_position();
        let mut searcher = Searcher::new(Side::SideB);
        let result = searcher.search(&board, 2, 1);

        assert_eq!(result.best_move, Some(Move::new(b(0), Pos::new(1, 3))));
        // material 100, progress (1 + 2) * 10
        assert_eq!(result.score, 130);
    }

    #[test]
    fn test_search_sees_win() {
        let board = board_with(
            4,
            &[
                PieceSnapshot::moved(b(0), Pos::new(1, 1)),
                PieceSnapshot::moved(a(0), Pos::new(1, 3)),
            ],
        );
        for depth in 1..=3 {
            let result = Searcher::new(Side::SideB).search(&board, 2, depth);
            assert_eq!(result.best_move, Some(Move::new(b(0), Pos::new(1, 3))));
            assert_eq!(result.score, EvalScore::WIN);
        }
    }

    #[test]
    fn test_no_move_when_immobilized() {
        // Every piece is unmoved and the throw is not a 1
        let board = Board::new(4).unwrap();
        let result = Searcher::new(Side::SideA).search(&board, 3, 2);
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let board = midgame_position();
        let before = board.clone();
        let _ = Searcher::new(Side::SideB).search(&board, 2, 3);
        assert_eq!(board, before);
    }

    #[test]
    fn test_pruning_matches_full_width() {
        let positions = [Board::new(3).unwrap(), capture_position(), midgame_position()];
        for board in &positions {
            for side in Side::ALL {
                for throw in [1, 2, 3] {
                    for depth in 1..=4 {
                        let mut pruned = Searcher::new(side);
                        let mut full = Searcher::without_pruning(side);
                        let fast = pruned.search(board, throw, depth);
                        let slow = full.search(board, throw, depth);

                        assert_eq!(fast.best_move, slow.best_move);
                        assert_eq!(fast.score, slow.score);
                        assert!(fast.stats.nodes <= slow.stats.nodes);
                        assert_eq!(slow.stats.cutoffs, 0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_result_is_legal_on_live_board() {
        let mut board = midgame_position();
        let result = Searcher::new(Side::SideB).search(&board, 1, 3);
        let best = result.best_move.unwrap();
        assert!(move_piece(&mut board, best.piece, 1, Some(best.to)).is_ok());
    }
}
