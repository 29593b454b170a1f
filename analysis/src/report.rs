use evaluation::EvaluationResult;
use utils::IllegalMove;

/// One analysed move: the position it produced and that position's evaluation.
#[derive(Debug, Clone)]
pub struct AnalyzedMove {
    pub index: usize,
    pub text: String,
    pub fen: String,
    pub result: EvaluationResult,
}

#[derive(Debug, Clone, Default)]
pub struct AnalysisReport {
    pub moves: Vec<AnalyzedMove>,
    pub skipped: Vec<IllegalMove>,
}

impl AnalysisReport {
    /// Display strings in move order, failures included.
    pub fn evaluations(&self) -> Vec<String> {
        self.moves.iter().map(|m| m.result.to_string()).collect()
    }

    pub fn results(&self) -> impl Iterator<Item = &EvaluationResult> {
        self.moves.iter().map(|m| &m.result)
    }

    pub fn failures(&self) -> usize {
        self.results().filter(|r| r.is_failed()).count()
    }
}
