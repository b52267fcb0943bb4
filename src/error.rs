//! Error types

use std::path::PathBuf;

use crate::board::{PieceId, Pos, Side, MAX_COLUMNS, MIN_COLUMNS};

/// Errors building or adopting a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board needs between {min} and {max} columns, got {0}", min = MIN_COLUMNS, max = MAX_COLUMNS)]
    InvalidColumns(usize),

    #[error("piece {piece} placed off the board at {pos}")]
    OutOfBounds { piece: PieceId, pos: Pos },

    #[error("piece {0} appears more than once")]
    DuplicatePiece(PieceId),

    #[error("cell {0} holds more than one piece")]
    CellOccupied(Pos),
}

/// Reason a move was rejected. Variants follow the order the rules are checked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("a throw of zero moves nothing")]
    ZeroThrow,

    #[error("piece {0} is not on the board")]
    UnknownPiece(PieceId),

    #[error("a piece's first move needs a throw of 1, got {0}")]
    FirstMoveNeedsTab(u8),

    #[error("no cell {0} steps ahead")]
    NoDestination(u8),

    #[error("cell {0} is not a destination for this piece and throw")]
    NotACandidate(Pos),

    #[error("a piece cannot return to its home lane")]
    ReturnHome,

    #[error("cell {0} holds a friendly piece")]
    BlockedByOwnPiece(Pos),

    #[error("a piece may enter the opponent's home lane only once")]
    OpponentLaneReentry,

    #[error("home lane is locked while friendly pieces hold the opponent's home lane")]
    HomeLaneLocked,
}

/// Errors driving a [`crate::Game`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("the game is over")]
    GameOver,

    #[error("no throw is pending")]
    NoThrowPending,

    #[error("a throw is already pending")]
    ThrowPending,

    #[error("it is {to_act}'s turn, piece {piece} cannot move")]
    NotYourPiece { piece: PieceId, to_act: Side },

    #[error("piece {0} is frozen in the opponent's home lane")]
    Frozen(PieceId),

    #[error("illegal move: {0}")]
    Illegal(#[from] IllegalMove),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Errors loading match configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        assert_eq!(
            BoardError::InvalidColumns(1).to_string(),
            "board needs between 2 and 255 columns, got 1"
        );
        assert_eq!(
            BoardError::CellOccupied(Pos::new(2, 3)).to_string(),
            "cell (2, 3) holds more than one piece"
        );
    }

    #[test]
    fn test_illegal_move_display() {
        assert_eq!(
            IllegalMove::FirstMoveNeedsTab(3).to_string(),
            "a piece's first move needs a throw of 1, got 3"
        );
    }

    #[test]
    fn test_game_error_wraps_illegal_move() {
        let err: GameError = IllegalMove::ReturnHome.into();
        assert_eq!(
            err.to_string(),
            "illegal move: a piece cannot return to its home lane"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("columns must be >= 2".to_string());
        assert_eq!(err.to_string(), "config validation error: columns must be >= 2");
    }
}
