//! Board structure with per-side piece collections

use crate::error::BoardError;

use super::piece::{Piece, PieceId};
use super::snapshot::PieceSnapshot;
use super::{Pos, Side, LANES, MAX_COLUMNS, MIN_COLUMNS};

/// Game board.
///
/// The grid stores piece identifiers; the pieces themselves live in the
/// owning side's collection. A piece is in its side's collection iff the
/// grid cell at its position points back to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: usize,
    grid: Vec<Option<PieceId>>,
    side_a: Vec<Piece>,
    side_b: Vec<Piece>,
}

impl Board {
    /// Starting layout: one piece per column on each side's home lane.
    ///
    /// ```
    /// use tab::{Board, Side};
    ///
    /// let board = Board::new(9).unwrap();
    /// assert_eq!(board.piece_count(Side::SideA), 9);
    /// assert_eq!(board.piece_count(Side::SideB), 9);
    /// ```
    pub fn new(columns: usize) -> Result<Self, BoardError> {
        let mut board = Self::empty(columns)?;
        for side in Side::ALL {
            for col in 0..columns as u8 {
                let id = PieceId::new(side, col);
                board.place(PieceSnapshot::fresh(id, Pos::new(side.home_lane(), col)))?;
            }
        }
        Ok(board)
    }

    /// Board with no pieces on it
    pub fn empty(columns: usize) -> Result<Self, BoardError> {
        if !(MIN_COLUMNS..=MAX_COLUMNS).contains(&columns) {
            return Err(BoardError::InvalidColumns(columns));
        }
        Ok(Self {
            columns,
            grid: vec![None; LANES * columns],
            side_a: Vec::with_capacity(columns),
            side_b: Vec::with_capacity(columns),
        })
    }

    /// Put a piece on an empty cell.
    pub fn place(&mut self, snapshot: PieceSnapshot) -> Result<(), BoardError> {
        let PieceSnapshot { id, pos, .. } = snapshot;
        if !self.contains(pos) {
            return Err(BoardError::OutOfBounds { piece: id, pos });
        }
        if self.piece(id).is_some() {
            return Err(BoardError::DuplicatePiece(id));
        }
        if self.get(pos).is_some() {
            return Err(BoardError::CellOccupied(pos));
        }

        self.grid[pos.to_index(self.columns)] = Some(id);
        self.pieces_mut(id.side).push(Piece::with_history(
            id,
            pos,
            snapshot.has_moved,
            snapshot.has_entered_opponent_line,
        ));
        Ok(())
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Whether `pos` lies on this board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.lane as usize) < LANES && (pos.col as usize) < self.columns
    }

    /// Identifier of the piece at `pos`
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<PieceId> {
        if !self.contains(pos) {
            return None;
        }
        self.grid[pos.to_index(self.columns)]
    }

    /// Piece at `pos`
    pub fn piece_at(&self, pos: Pos) -> Option<&Piece> {
        self.get(pos).and_then(|id| self.piece(id))
    }

    /// Look up a piece still in play
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces(id.side).iter().find(|p| p.id() == id)
    }

    /// Pieces in play for a side
    #[inline]
    pub fn pieces(&self, side: Side) -> &[Piece] {
        match side {
            Side::SideA => &self.side_a,
            Side::SideB => &self.side_b,
        }
    }

    #[inline]
    fn pieces_mut(&mut self, side: Side) -> &mut Vec<Piece> {
        match side {
            Side::SideA => &mut self.side_a,
            Side::SideB => &mut self.side_b,
        }
    }

    /// Every piece in play, side A first
    pub fn all_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.side_a.iter().chain(self.side_b.iter())
    }

    #[inline]
    pub fn piece_count(&self, side: Side) -> usize {
        self.pieces(side).len()
    }

    /// Pieces on the board for both sides
    #[inline]
    pub fn total_pieces(&self) -> usize {
        self.side_a.len() + self.side_b.len()
    }

    /// Number of `side`'s pieces in `lane`
    pub fn count_in_lane(&self, side: Side, lane: u8) -> usize {
        self.pieces(side).iter().filter(|p| p.lane() == lane).count()
    }

    /// Whether any of `side`'s pieces is in `lane`
    pub fn has_piece_in_lane(&self, side: Side, lane: u8) -> bool {
        self.pieces(side).iter().any(|p| p.lane() == lane)
    }

    /// Move a piece, capturing whatever opposing piece holds `to`.
    ///
    /// Legality is the caller's concern (see [`crate::rules::move_piece`]).
    /// Returns the captured piece, if any.
    pub(crate) fn relocate(&mut self, id: PieceId, to: Pos) -> Option<PieceId> {
        let columns = self.columns;
        let from = self.piece(id)?.pos();

        self.grid[from.to_index(columns)] = None;

        let captured = self.grid[to.to_index(columns)].filter(|victim| victim.side != id.side);
        if let Some(victim) = captured {
            self.pieces_mut(victim.side).retain(|p| p.id() != victim);
        }

        if let Some(piece) = self.pieces_mut(id.side).iter_mut().find(|p| p.id() == id) {
            piece.move_to(to);
        }
        self.grid[to.to_index(columns)] = Some(id);
        captured
    }
}

impl std::fmt::Display for Board {
    /// Lane 0 on top. Upper case marks pieces that have moved.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.columns {
            write!(f, "{:3}", c)?;
        }
        writeln!(f)?;

        for lane in 0..LANES as u8 {
            write!(f, "{:2} ", lane)?;
            for col in 0..self.columns as u8 {
                let ch = match self.piece_at(Pos::new(lane, col)) {
                    Some(p) => {
                        let ch = match p.owner() {
                            Side::SideA => 'a',
                            Side::SideB => 'b',
                        };
                        if p.has_moved() {
                            ch.to_ascii_uppercase()
                        } else {
                            ch
                        }
                    }
                    None => '.',
                };
                write!(f, "{:>3}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
