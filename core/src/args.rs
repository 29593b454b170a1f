use std::path::PathBuf;
use std::time::Duration;

use analysis::AnalysisConfig;
use clap::Parser;
use engine::{SearchLimits, SessionConfig, DEFAULT_DEPTH};

#[derive(Parser, Debug)]
#[command(name = "Vantage")]
#[command(author = "Jørgen Hanssen <jorgen@hanssen.io>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Evaluates the position after every move of a game with a UCI engine")]
pub struct Args {
    /// UCI engine binary.
    #[arg(short, long, default_value = "stockfish")]
    pub engine: PathBuf,

    /// Extra argument for the engine binary (repeatable).
    #[arg(long = "engine-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub engine_args: Vec<String>,

    /// Search depth in plies.
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    pub depth: u8,

    /// Time limit per position, in milliseconds.
    #[arg(short, long, default_value_t = 5000)]
    pub timeout_ms: u64,

    #[arg(long, default_value_t = 10_000)]
    pub handshake_timeout_ms: u64,

    /// How long to wait for a stopped search to report back.
    #[arg(long, default_value_t = 1000)]
    pub stop_grace_ms: u64,

    /// Play the moves from this position instead of the initial one.
    #[arg(long)]
    pub fen: Option<String>,

    /// Write the log to a file instead of the terminal.
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,

    /// Also log the engine conversation.
    #[arg(short, long)]
    pub verbose: bool,

    /// Moves in SAN or UCI notation. A sample game is used when empty.
    pub moves: Vec<String>,
}

impl Args {
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig {
            engine: self.engine.clone(),
            engine_args: self.engine_args.clone(),
            start_fen: self.fen.clone(),
            limits: SearchLimits {
                depth: self.depth,
                timeout: Duration::from_millis(self.timeout_ms),
            },
            session: SessionConfig {
                handshake_timeout: Duration::from_millis(self.handshake_timeout_ms),
                stop_grace: Duration::from_millis(self.stop_grace_ms),
            },
        }
    }
}
