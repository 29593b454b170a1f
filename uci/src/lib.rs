mod decoder;
mod encoder;

pub mod commands;

pub use commands::{EngineEvent, GoParams, Score, ScoreKind, UciCommand};
pub use decoder::Decoder;
pub use encoder::Encoder;
