use std::io;

use thiserror::Error;

/// Failures in creating or keeping the engine channel. Per-position
/// evaluation failures are not errors; they become `EvaluationResult::Failed`.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to start engine '{path}': {source}")]
    Spawn {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("engine process did not expose its {0}")]
    MissingPipe(&'static str),

    #[error("engine handshake failed: {0}")]
    Handshake(String),

    #[error("engine channel closed")]
    ChannelClosed,

    #[error("failed to write to engine: {0}")]
    Write(#[from] io::Error),

    #[error("session was not launched from a binary and cannot be restarted")]
    NotRestartable,
}
