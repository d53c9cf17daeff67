//! Error types for the rules core.
//!
//! Only conditions a caller can act on are surfaced here. An out-of-bounds square is
//! unrepresentable (see [`Square`](crate::core::square::Square)) and a move that would
//! leave the mover in check is a normal [`MoveOutcome`](crate::game::MoveOutcome).

use crate::chess::piece::Color;

/// Errors that can occur in the rules core.
#[derive(Debug, thiserror::Error)]
pub enum ChessError {
    /// No king of this color is on the board; check and mate cannot be decided.
    #[error("no {color} king on the board")]
    NoKingFound { color: Color },

    /// A square name could not be parsed or lies outside the board.
    #[error("invalid square: {name:?}")]
    InvalidSquare { name: String },

    /// The standard arrangement does not fit these board dimensions.
    #[error("standard layout needs 8 files and at least 4 ranks, board is {files}x{ranks}")]
    UnsupportedLayout { files: u8, ranks: u8 },

    /// Board sides must be between 1 and 16.
    #[error("unsupported board size {files}x{ranks}")]
    UnsupportedDims { files: u8, ranks: u8 },

    /// A configuration value is out of range.
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("failed to read config: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Result type alias for rules-core operations
pub type ChessResult<T> = Result<T, ChessError>;
