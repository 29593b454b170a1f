mod channel;
mod config;
mod error;
mod process;
mod session;

pub mod scripted;

pub use channel::EngineChannel;
pub use config::{SearchLimits, SessionConfig, DEFAULT_DEPTH, DEFAULT_TIMEOUT};
pub use error::SessionError;
pub use process::{EngineLauncher, EngineProcess};
pub use session::{
    EngineSession, SessionState, REASON_EXITED, REASON_IN_FLIGHT, REASON_NO_EVALUATION,
    REASON_TIMEOUT, REASON_UNAVAILABLE,
};
