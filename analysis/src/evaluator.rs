use engine::{EngineSession, SearchLimits};
use evaluation::EvaluationResult;
use log::warn;
use utils::Position;

/// Evaluates positions strictly one after another on a single session.
///
/// The session is borrowed exclusively for the lifetime of the evaluator, and
/// each `evaluate` call blocks until its request is resolved, so position
/// `n + 1` is never sent before position `n` has a result.
pub struct SequentialEvaluator<'a> {
    session: &'a mut EngineSession,
    limits: SearchLimits,
}

impl<'a> SequentialEvaluator<'a> {
    pub fn new(session: &'a mut EngineSession, limits: SearchLimits) -> Self {
        Self { session, limits }
    }

    /// One result per position, in input order. Failures never stop the batch.
    pub fn evaluate_all(&mut self, positions: &[Position]) -> Vec<EvaluationResult> {
        self.evaluate_with(positions, |_, _, _| {})
    }

    /// Like [`evaluate_all`](Self::evaluate_all), reporting each result as it is produced.
    pub fn evaluate_with<F>(&mut self, positions: &[Position], mut on_result: F) -> Vec<EvaluationResult>
    where
        F: FnMut(usize, &Position, &EvaluationResult),
    {
        let mut results = Vec::with_capacity(positions.len());

        for (index, position) in positions.iter().enumerate() {
            let result = self.evaluate_one(position);
            on_result(index, position, &result);
            results.push(result);
        }

        results
    }

    fn evaluate_one(&mut self, position: &Position) -> EvaluationResult {
        if self.session.is_faulted() {
            if let Err(e) = self.session.reinitialize() {
                warn!("Engine could not be restarted: {}", e);
                return EvaluationResult::failed(format!("engine unavailable ({})", e));
            }
        }

        self.session.evaluate(position, &self.limits)
    }
}
