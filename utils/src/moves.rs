use chess::{Board, ChessMove, File, MoveGen, Piece, Rank, Square};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("empty move")]
    Empty,
    #[error("cannot parse move '{0}'")]
    Unparseable(String),
    #[error("illegal move '{0}'")]
    Illegal(String),
    #[error("ambiguous move '{0}'")]
    Ambiguous(String),
}

/// Resolve a move written in SAN (`Nf3`, `exd5`, `O-O`, `e8=Q+`) or in UCI
/// long algebraic notation (`e2e4`, `e7e8q`) against the legal moves of `board`.
pub fn parse_move(board: &Board, text: &str) -> Result<ChessMove, MoveError> {
    let clean = text
        .trim()
        .trim_end_matches(|c: char| matches!(c, '+' | '#' | '!' | '?'));

    if clean.is_empty() {
        return Err(MoveError::Empty);
    }

    if let Some(mv) = parse_uci_notation(clean) {
        return if board.legal(mv) {
            Ok(mv)
        } else {
            Err(MoveError::Illegal(text.to_string()))
        };
    }

    parse_san(board, clean).map_err(|kind| kind.with_text(text))
}

#[inline]
pub fn is_capture(board: &Board, mv: ChessMove) -> bool {
    board.piece_on(mv.get_dest()).is_some()
}

#[inline]
pub fn is_pawn_move(board: &Board, mv: ChessMove) -> bool {
    board.piece_on(mv.get_source()) == Some(Piece::Pawn)
}

fn parse_uci_notation(text: &str) -> Option<ChessMove> {
    let bytes = text.as_bytes();
    if bytes.len() != 4 && bytes.len() != 5 {
        return None;
    }

    let source = square(bytes[0], bytes[1])?;
    let dest = square(bytes[2], bytes[3])?;
    let promotion = match bytes.get(4) {
        Some(&b) => Some(promotion_piece(b.to_ascii_uppercase())?),
        None => None,
    };

    Some(ChessMove::new(source, dest, promotion))
}

enum SanError {
    Unparseable,
    Illegal,
    Ambiguous,
}

impl SanError {
    fn with_text(self, text: &str) -> MoveError {
        match self {
            SanError::Unparseable => MoveError::Unparseable(text.to_string()),
            SanError::Illegal => MoveError::Illegal(text.to_string()),
            SanError::Ambiguous => MoveError::Ambiguous(text.to_string()),
        }
    }
}

fn parse_san(board: &Board, san: &str) -> Result<ChessMove, SanError> {
    match san {
        "O-O" | "0-0" => return find_castle(board, true),
        "O-O-O" | "0-0-0" => return find_castle(board, false),
        _ => {}
    }

    let (piece, rest) = match san.as_bytes()[0] {
        b'K' => (Piece::King, &san[1..]),
        b'Q' => (Piece::Queen, &san[1..]),
        b'R' => (Piece::Rook, &san[1..]),
        b'B' => (Piece::Bishop, &san[1..]),
        b'N' => (Piece::Knight, &san[1..]),
        _ => (Piece::Pawn, san),
    };

    let mut body: Vec<u8> = rest
        .bytes()
        .filter(|b| !matches!(b, b'x' | b'-' | b'='))
        .collect();

    let mut promotion = None;
    if piece == Piece::Pawn {
        if let Some(&last) = body.last() {
            if last.is_ascii_alphabetic() {
                promotion = Some(promotion_piece(last.to_ascii_uppercase()).ok_or(SanError::Unparseable)?);
                body.pop();
            }
        }
    }

    if body.len() < 2 || body.len() > 4 {
        return Err(SanError::Unparseable);
    }

    let (hint, target) = body.split_at(body.len() - 2);
    let dest = square(target[0], target[1]).ok_or(SanError::Unparseable)?;

    let mut from_file = None;
    let mut from_rank = None;
    for &b in hint {
        match b {
            b'a'..=b'h' => from_file = Some(File::from_index((b - b'a') as usize)),
            b'1'..=b'8' => from_rank = Some(Rank::from_index((b - b'1') as usize)),
            _ => return Err(SanError::Unparseable),
        }
    }

    let mut candidates = MoveGen::new_legal(board).filter(|mv| {
        mv.get_dest() == dest
            && mv.get_promotion() == promotion
            && board.piece_on(mv.get_source()) == Some(piece)
            && from_file.map_or(true, |f| mv.get_source().get_file() == f)
            && from_rank.map_or(true, |r| mv.get_source().get_rank() == r)
    });

    match (candidates.next(), candidates.next()) {
        (Some(mv), None) => Ok(mv),
        (Some(_), Some(_)) => Err(SanError::Ambiguous),
        (None, _) => Err(SanError::Illegal),
    }
}

fn find_castle(board: &Board, king_side: bool) -> Result<ChessMove, SanError> {
    MoveGen::new_legal(board)
        .find(|mv| {
            let from = mv.get_source().get_file().to_index();
            let to = mv.get_dest().get_file().to_index();
            board.piece_on(mv.get_source()) == Some(Piece::King)
                && if king_side {
                    to == from + 2
                } else {
                    from == to + 2
                }
        })
        .ok_or(SanError::Illegal)
}

fn square(file: u8, rank: u8) -> Option<Square> {
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }
    Some(Square::make_square(
        Rank::from_index((rank - b'1') as usize),
        File::from_index((file - b'a') as usize),
    ))
}

fn promotion_piece(b: u8) -> Option<Piece> {
    match b {
        b'Q' => Some(Piece::Queen),
        b'R' => Some(Piece::Rook),
        b'B' => Some(Piece::Bishop),
        b'N' => Some(Piece::Knight),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn board(fen: &str) -> Board {
        Board::from_str(fen).unwrap()
    }

    fn uci(board: &Board, text: &str) -> String {
        parse_move(board, text).unwrap().to_string()
    }

    #[test]
    fn test_pawn_and_piece_moves() {
        let start = Board::default();
        assert_eq!(uci(&start, "e4"), "e2e4");
        assert_eq!(uci(&start, "b3"), "b2b3");
        assert_eq!(uci(&start, "Nf3"), "g1f3");
        assert_eq!(uci(&start, "Nc3"), "b1c3");
    }

    #[test]
    fn test_uci_notation() {
        let start = Board::default();
        assert_eq!(uci(&start, "e2e4"), "e2e4");
        assert_eq!(
            parse_move(&start, "e2e5"),
            Err(MoveError::Illegal("e2e5".to_string()))
        );
    }

    #[test]
    fn test_captures_and_check_suffix() {
        // 1. e4 d5
        let b = board("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2");
        assert_eq!(uci(&b, "exd5"), "e4d5");

        // Queen trade with check
        let b = board("rnbqkbnr/ppp2ppp/8/4p3/8/1P6/PBP1PPPP/RN1QKBNR w KQkq - 0 4");
        assert_eq!(uci(&b, "Qxd8+"), "d1d8");
    }

    #[test]
    fn test_castling() {
        let b = board("r3k2r/pppq1ppp/2npbn2/4p3/4P3/2NPBN2/PPPQ1PPP/R3K2R w KQkq - 0 1");
        assert_eq!(uci(&b, "O-O"), "e1g1");
        assert_eq!(uci(&b, "O-O-O"), "e1c1");
        assert_eq!(uci(&b, "0-0"), "e1g1");
    }

    #[test]
    fn test_disambiguation() {
        // Knights on b1 and f3 can both reach d2
        let b = board("4k3/8/8/8/8/5N2/8/1N2K3 w - - 0 1");
        assert!(matches!(
            parse_move(&b, "Nd2"),
            Err(MoveError::Ambiguous(_))
        ));
        assert_eq!(uci(&b, "Nbd2"), "b1d2");
        assert_eq!(uci(&b, "Nfd2"), "f3d2");
    }

    #[test]
    fn test_promotion() {
        let b = board("8/4P3/8/8/8/8/8/k1K5 w - - 0 1");
        assert_eq!(uci(&b, "e8=Q"), "e7e8q");
        assert_eq!(uci(&b, "e8N+"), "e7e8n");
        assert_eq!(uci(&b, "e7e8r"), "e7e8r");
        assert!(matches!(
            parse_move(&b, "e8=K"),
            Err(MoveError::Unparseable(_))
        ));
    }

    #[test]
    fn test_illegal_and_garbage() {
        let start = Board::default();
        assert!(matches!(parse_move(&start, "e5"), Err(MoveError::Illegal(_))));
        assert!(matches!(parse_move(&start, "O-O"), Err(MoveError::Illegal(_))));
        assert!(matches!(
            parse_move(&start, "Zz9"),
            Err(MoveError::Unparseable(_))
        ));
        assert_eq!(parse_move(&start, "  "), Err(MoveError::Empty));
    }
}
