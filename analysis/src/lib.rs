mod config;
mod evaluator;
mod report;

pub use config::AnalysisConfig;
pub use evaluator::SequentialEvaluator;
pub use report::{AnalysisReport, AnalyzedMove};

use std::error::Error;

use engine::{EngineSession, SearchLimits};
use log::{info, warn};
use utils::{positions_from_moves, replay_moves, GameLine, Replay};

/// Starts the configured engine and analyses `moves` with it.
///
/// Only failing to start the engine is an error; everything that goes wrong
/// for a single move or position is part of the report.
pub fn run<S: AsRef<str>>(
    config: &AnalysisConfig,
    moves: &[S],
) -> Result<AnalysisReport, Box<dyn Error>> {
    let line = match &config.start_fen {
        Some(fen) => replay_moves(Replay::from_fen(fen)?, moves),
        None => positions_from_moves(moves),
    };

    let mut session = EngineSession::spawn(config.launcher(), config.session)?;
    info!("Engine {} is ready", config.engine.display());

    Ok(analyze_line(&mut session, line, &config.limits))
}

/// Evaluates the position after every legal move of `moves`, played from the start position.
pub fn analyze_moves<S: AsRef<str>>(
    session: &mut EngineSession,
    moves: &[S],
    limits: &SearchLimits,
) -> AnalysisReport {
    analyze_line(session, positions_from_moves(moves), limits)
}

pub fn analyze_line(session: &mut EngineSession, line: GameLine, limits: &SearchLimits) -> AnalysisReport {
    for skipped in &line.skipped {
        warn!("Invalid move '{}' (#{}): {}", skipped.text, skipped.index + 1, skipped.error);
    }

    let positions = line.positions();
    let results = SequentialEvaluator::new(session, *limits).evaluate_with(
        &positions,
        |_, position, result| {
            info!("FEN: {} | Evaluation: {}", position, result);
        },
    );

    let moves = line
        .played
        .into_iter()
        .zip(results)
        .map(|(played, result)| AnalyzedMove {
            index: played.index,
            text: played.text,
            fen: played.position.fen().to_string(),
            result,
        })
        .collect();

    AnalysisReport {
        moves,
        skipped: line.skipped,
    }
}
