use std::fmt;

use chess::Color;

/// Outcome of analysing one position, always from White's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationResult {
    /// White-relative centipawns. Displayed in pawns with one decimal.
    Centipawn(i32),
    /// Forced mate in `moves` moves for `winner`.
    Mate { moves: u32, winner: Color },
    Failed(String),
}

impl EvaluationResult {
    pub fn failed(reason: impl Into<String>) -> Self {
        EvaluationResult::Failed(reason.into())
    }

    #[inline]
    pub fn is_failed(&self) -> bool {
        matches!(self, EvaluationResult::Failed(_))
    }
}

/// Pawn units with one decimal, rounded like a binary double would be.
///
/// Most `x.x5` values are not exact in binary and round to the nearest side
/// (0.15 -> "0.1", 0.45 -> "0.5"). Exact ties (0.25, 0.75) round away from zero.
fn pawns(cp: i32) -> String {
    let magnitude = cp.unsigned_abs();
    if magnitude % 50 == 25 {
        let tenths = (magnitude + 5) / 10;
        format!("{}.{}", tenths / 10, tenths % 10)
    } else {
        format!("{:.1}", f64::from(magnitude) / 100.0)
    }
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationResult::Centipawn(cp) => {
                // Sign follows the unrounded score, so -4cp reads "-0.0"
                let sign = if *cp < 0 { '-' } else { '+' };
                write!(f, "{}{}", sign, pawns(*cp))
            }
            EvaluationResult::Mate { moves, winner } => {
                let side = match winner {
                    Color::White => "White",
                    Color::Black => "Black",
                };
                write!(f, "Mate in {} ({} wins)", moves, side)
            }
            EvaluationResult::Failed(reason) => write!(f, "Error ({})", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centipawn_display() {
        assert_eq!(EvaluationResult::Centipawn(30).to_string(), "+0.3");
        assert_eq!(EvaluationResult::Centipawn(-120).to_string(), "-1.2");
        assert_eq!(EvaluationResult::Centipawn(0).to_string(), "+0.0");
        assert_eq!(EvaluationResult::Centipawn(1234).to_string(), "+12.3");
    }

    #[test]
    fn test_centipawn_rounding() {
        assert_eq!(EvaluationResult::Centipawn(5).to_string(), "+0.1");
        assert_eq!(EvaluationResult::Centipawn(-5).to_string(), "-0.1");
        assert_eq!(EvaluationResult::Centipawn(44).to_string(), "+0.4");
        assert_eq!(EvaluationResult::Centipawn(-96).to_string(), "-1.0");
        assert_eq!(EvaluationResult::Centipawn(-4).to_string(), "-0.0");
    }

    #[test]
    fn test_centipawn_rounding_follows_binary_value() {
        let shown: Vec<String> = [15, 35, 85, 115, 45, -155]
            .iter()
            .map(|&cp| EvaluationResult::Centipawn(cp).to_string())
            .collect();
        assert_eq!(shown, vec!["+0.1", "+0.3", "+0.8", "+1.1", "+0.5", "-1.6"]);
    }

    #[test]
    fn test_centipawn_exact_ties() {
        assert_eq!(EvaluationResult::Centipawn(25).to_string(), "+0.3");
        assert_eq!(EvaluationResult::Centipawn(-75).to_string(), "-0.8");
        assert_eq!(EvaluationResult::Centipawn(125).to_string(), "+1.3");
    }

    #[test]
    fn test_mate_display() {
        let mate = EvaluationResult::Mate {
            moves: 2,
            winner: Color::White,
        };
        assert_eq!(mate.to_string(), "Mate in 2 (White wins)");

        let mate = EvaluationResult::Mate {
            moves: 7,
            winner: Color::Black,
        };
        assert_eq!(mate.to_string(), "Mate in 7 (Black wins)");
    }

    #[test]
    fn test_failed_display() {
        let failed = EvaluationResult::failed("timeout");
        assert!(failed.is_failed());
        assert_eq!(failed.to_string(), "Error (timeout)");
    }
}
