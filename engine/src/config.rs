use std::time::Duration;

pub const DEFAULT_DEPTH: u8 = 15;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Limits for a single position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    pub depth: u8,
    pub timeout: Duration,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// How long to wait for `uciok` and `readyok` when starting the engine.
    pub handshake_timeout: Duration,

    /// How long the next request waits for the `bestmove` of a stopped search.
    pub stop_grace: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            handshake_timeout: Duration::from_millis(10_000),
            stop_grace: Duration::from_millis(1000),
        }
    }
}
