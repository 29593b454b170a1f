use std::path::PathBuf;

use engine::{EngineLauncher, SearchLimits, SessionConfig};

#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Engine binary, e.g. `stockfish`.
    pub engine: PathBuf,
    pub engine_args: Vec<String>,

    /// FEN to start from instead of the standard start position.
    pub start_fen: Option<String>,

    pub limits: SearchLimits,
    pub session: SessionConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            engine: PathBuf::from("stockfish"),
            engine_args: Vec::new(),
            start_fen: None,
            limits: SearchLimits::default(),
            session: SessionConfig::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn launcher(&self) -> EngineLauncher {
        self.engine_args
            .iter()
            .fold(EngineLauncher::new(&self.engine), |launcher, arg| {
                launcher.arg(arg.as_str())
            })
    }
}
