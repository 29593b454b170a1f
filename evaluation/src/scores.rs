use chess::Color;
use uci::ScoreKind;

use crate::EvaluationResult;

/// Converts an engine score, which is relative to the side to move, into a
/// White-positive [`EvaluationResult`].
///
/// Returns `None` for `mate 0`, which carries no mate distance.
pub fn normalize(kind: ScoreKind, raw: i32, side_to_move: Color) -> Option<EvaluationResult> {
    let value = match side_to_move {
        Color::White => raw,
        Color::Black => raw.saturating_neg(),
    };

    match kind {
        ScoreKind::Centipawns => Some(EvaluationResult::Centipawn(value)),
        ScoreKind::MateIn if value == 0 => None,
        ScoreKind::MateIn => Some(EvaluationResult::Mate {
            moves: value.unsigned_abs(),
            winner: if value > 0 { Color::White } else { Color::Black },
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centipawns_white_to_move() {
        let result = normalize(ScoreKind::Centipawns, 30, Color::White).unwrap();
        assert_eq!(result, EvaluationResult::Centipawn(30));
        assert_eq!(result.to_string(), "+0.3");
    }

    #[test]
    fn test_centipawns_black_to_move() {
        // cp 5 with Black to move is -5 for White
        let result = normalize(ScoreKind::Centipawns, 5, Color::Black).unwrap();
        assert_eq!(result.to_string(), "-0.1");
    }

    #[test]
    fn test_sign_flips_with_side_to_move() {
        for raw in [-2500, -101, -50, -1, 1, 7, 49, 100, 999] {
            let white = normalize(ScoreKind::Centipawns, raw, Color::White).unwrap();
            let black = normalize(ScoreKind::Centipawns, raw, Color::Black).unwrap();

            let (EvaluationResult::Centipawn(w), EvaluationResult::Centipawn(b)) = (white, black)
            else {
                panic!("Expected centipawn results")
            };
            assert_eq!(w, -b, "raw {}", raw);
            assert_eq!(w.signum(), -b.signum(), "raw {}", raw);
        }
    }

    #[test]
    fn test_mate_for_black() {
        let result = normalize(ScoreKind::MateIn, -3, Color::White).unwrap();
        assert_eq!(
            result,
            EvaluationResult::Mate {
                moves: 3,
                winner: Color::Black
            }
        );
    }

    #[test]
    fn test_mate_black_to_move() {
        // Black to move and mating: engine reports a positive mate score
        let result = normalize(ScoreKind::MateIn, 4, Color::Black).unwrap();
        assert_eq!(
            result,
            EvaluationResult::Mate {
                moves: 4,
                winner: Color::Black
            }
        );

        let result = normalize(ScoreKind::MateIn, -1, Color::Black).unwrap();
        assert_eq!(result.to_string(), "Mate in 1 (White wins)");
    }

    #[test]
    fn test_mate_zero_is_ignored() {
        assert_eq!(normalize(ScoreKind::MateIn, 0, Color::White), None);
        assert_eq!(normalize(ScoreKind::MateIn, 0, Color::Black), None);
    }

    #[test]
    fn test_extreme_values() {
        let result = normalize(ScoreKind::Centipawns, i32::MIN, Color::Black).unwrap();
        assert_eq!(result, EvaluationResult::Centipawn(i32::MAX));
    }
}
