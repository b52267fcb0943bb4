//! Turn controller
//!
//! A [`Game`] owns the board and drives the throw, move and turn-passing
//! cycle:
//!
//! 1. The side to act throws the sticks with [`Game::throw_sticks`].
//! 2. Without a legal move the throw is lost: the same side throws again
//!    after a repeating throw, otherwise the turn passes.
//! 3. Otherwise the side plays one piece with [`Game::play`]. The side keeps
//!    the turn after a repeating throw.
//!
//! The game ends when one side has no pieces left, or by forfeit.

use tracing::debug;

use crate::board::{Board, PieceId, Pos, Side};
use crate::error::{BoardError, GameError, IllegalMove};
use crate::rules::{
    self, check_winner, has_legal_move, is_frozen, move_piece, MoveOutcome,
};
use crate::throw::value_repeats;

/// What happened after a throw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrowOutcome {
    /// The side must now play a piece
    MustMove,
    /// No legal move, but the throw repeats: the same side throws again
    ThrowAgain,
    /// No legal move: the turn goes to the opponent
    TurnPassed,
}

/// Result of a played move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    pub mov: MoveOutcome,
    /// Set when the move ended the game
    pub winner: Option<Side>,
    /// Side to act next
    pub next: Side,
}

/// Game state: board, side to act, pending throw and result.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_act: Side,
    pending: Option<u8>,
    winner: Option<Side>,
    throws: u32,
}

impl Game {
    /// New game on the setup layout.
    pub fn new(columns: usize, first: Side) -> Result<Self, BoardError> {
        Ok(Self::from_board(Board::new(columns)?, first))
    }

    /// Resume from an arbitrary position.
    pub fn from_board(board: Board, to_act: Side) -> Self {
        let winner = check_winner(&board);
        Self {
            board,
            to_act,
            pending: None,
            winner,
            throws: 0,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn to_act(&self) -> Side {
        self.to_act
    }

    /// Throw waiting to be played
    #[inline]
    pub fn pending_throw(&self) -> Option<u8> {
        self.pending
    }

    #[inline]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Throws made so far
    #[inline]
    pub fn throws(&self) -> u32 {
        self.throws
    }

    /// Record a throw for the side to act.
    pub fn throw_sticks(&mut self, throw: u8) -> Result<ThrowOutcome, GameError> {
        self.ensure_running()?;
        if self.pending.is_some() {
            return Err(GameError::ThrowPending);
        }
        if throw == 0 {
            return Err(IllegalMove::ZeroThrow.into());
        }
        self.throws += 1;

        let side = self.to_act;
        if has_legal_move(&self.board, side, throw) {
            self.pending = Some(throw);
            return Ok(ThrowOutcome::MustMove);
        }

        if value_repeats(throw) {
            debug!(%side, throw, "no legal move, throwing again");
            Ok(ThrowOutcome::ThrowAgain)
        } else {
            self.to_act = side.opponent();
            debug!(%side, throw, "no legal move, turn passes");
            Ok(ThrowOutcome::TurnPassed)
        }
    }

    /// Play `piece` with the pending throw.
    ///
    /// `candidate` picks between the destinations of a choice point; it must
    /// be one of the cells [`rules::possible_moves`] would list.
    pub fn play(
        &mut self,
        piece: PieceId,
        candidate: Option<Pos>,
    ) -> Result<PlayOutcome, GameError> {
        self.ensure_running()?;
        let throw = self.pending.ok_or(GameError::NoThrowPending)?;
        if piece.side != self.to_act {
            return Err(GameError::NotYourPiece {
                piece,
                to_act: self.to_act,
            });
        }
        if is_frozen(&self.board, piece) {
            return Err(GameError::Frozen(piece));
        }
        let mov = move_piece(&mut self.board, piece, throw, candidate)?;
        self.pending = None;

        let side = self.to_act;
        self.winner = check_winner(&self.board);
        if let Some(winner) = self.winner {
            debug!(%winner, "game over");
        } else if !value_repeats(throw) {
            self.to_act = side.opponent();
        }
        debug!(%side, %piece, to = %mov.to, next = %self.to_act, "turn played");

        Ok(PlayOutcome {
            mov,
            winner: self.winner,
            next: self.to_act,
        })
    }

    /// Give up the pending throw; the turn passes.
    pub fn pass(&mut self) -> Result<Side, GameError> {
        self.ensure_running()?;
        self.pending.take().ok_or(GameError::NoThrowPending)?;
        self.to_act = self.to_act.opponent();
        Ok(self.to_act)
    }

    /// `side` resigns; returns the winner.
    pub fn forfeit(&mut self, side: Side) -> Result<Side, GameError> {
        self.ensure_running()?;
        let winner = side.opponent();
        self.winner = Some(winner);
        self.pending = None;
        debug!(%side, "forfeit");
        Ok(winner)
    }

    /// Pieces of `side` with at least one legal destination for `throw`.
    pub fn movable_pieces(&self, side: Side, throw: u8) -> Vec<PieceId> {
        rules::movable_pieces(&self.board, side, throw)
    }

    fn ensure_running(&self) -> Result<(), GameError> {
        if self.is_over() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }
}
