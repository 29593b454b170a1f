use std::fmt;
use std::str::FromStr;

use chess::{Board, Color};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },
}

/// A board position as handed to the engine: its FEN and the side to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    fen: String,
    side_to_move: Color,
}

impl Position {
    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        let fen = fen.trim();
        let board = Board::from_str(fen).map_err(|e| PositionError::InvalidFen {
            fen: fen.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            fen: fen.to_string(),
            side_to_move: board.side_to_move(),
        })
    }

    pub(crate) fn new(fen: String, side_to_move: Color) -> Self {
        Self { fen, side_to_move }
    }

    #[inline]
    pub fn fen(&self) -> &str {
        &self.fen
    }

    /// Engine scores are relative to this side.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        Self::from_fen(fen)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fen)
    }
}
