use std::str::FromStr;

use chess::{Board, Color};

use crate::moves::{is_capture, is_pawn_move, parse_move, MoveError};
use crate::position::{Position, PositionError};

/// A legal move from the list together with the position it leads to.
#[derive(Debug, Clone)]
pub struct PlayedMove {
    /// Index of the move in the input list.
    pub index: usize,
    pub text: String,
    pub position: Position,
}

/// A move that could not be applied. The board is left unchanged.
#[derive(Debug, Clone)]
pub struct IllegalMove {
    pub index: usize,
    pub text: String,
    pub error: MoveError,
}

#[derive(Debug, Clone, Default)]
pub struct GameLine {
    pub played: Vec<PlayedMove>,
    pub skipped: Vec<IllegalMove>,
}

impl GameLine {
    pub fn positions(&self) -> Vec<Position> {
        self.played.iter().map(|p| p.position.clone()).collect()
    }
}

/// Replays moves on a board while keeping the FEN move counters.
pub struct Replay {
    board: Board,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for Replay {
    fn default() -> Self {
        Self {
            board: Board::default(),
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl Replay {
    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        let board = Board::from_str(fen.trim()).map_err(|e| PositionError::InvalidFen {
            fen: fen.trim().to_string(),
            reason: e.to_string(),
        })?;

        let mut counters = fen.split_whitespace().skip(4);
        let halfmove_clock = counters
            .next()
            .and_then(|c| c.parse::<u32>().ok())
            .unwrap_or(0);
        let fullmove_number = counters
            .next()
            .and_then(|c| c.parse::<u32>().ok())
            .unwrap_or(1)
            .max(1);

        Ok(Self {
            board,
            halfmove_clock,
            fullmove_number,
        })
    }

    /// Applies a move given in SAN or UCI notation and returns the resulting position.
    pub fn play(&mut self, text: &str) -> Result<Position, MoveError> {
        let mv = parse_move(&self.board, text)?;

        if is_pawn_move(&self.board, mv) || is_capture(&self.board, mv) {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if self.board.side_to_move() == Color::Black {
            self.fullmove_number += 1;
        }

        self.board = self.board.make_move_new(mv);

        Ok(self.position())
    }

    pub fn fen(&self) -> String {
        // The board renders placement, side, castling and en passant; counters are ours
        let board_fen = self.board.to_string();
        let fields: Vec<&str> = board_fen.split_whitespace().take(4).collect();

        format!(
            "{} {} {}",
            fields.join(" "),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    pub fn position(&self) -> Position {
        Position::new(self.fen(), self.board.side_to_move())
    }
}

/// Replays `moves` from the standard start position.
///
/// Illegal or unparseable moves are skipped and reported; later moves are
/// applied to the board as it was before the skipped move.
pub fn positions_from_moves<S: AsRef<str>>(moves: &[S]) -> GameLine {
    replay_moves(Replay::default(), moves)
}

pub fn replay_moves<S: AsRef<str>>(mut replay: Replay, moves: &[S]) -> GameLine {
    let mut line = GameLine::default();

    for (index, text) in moves.iter().enumerate() {
        let text = text.as_ref();
        match replay.play(text) {
            Ok(position) => line.played.push(PlayedMove {
                index,
                text: text.to_string(),
                position,
            }),
            Err(error) => line.skipped.push(IllegalMove {
                index,
                text: text.to_string(),
                error,
            }),
        }
    }

    line
}
