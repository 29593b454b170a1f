use super::commands::{EngineEvent, Score};

/// Turns engine output lines into [`EngineEvent`]s.
///
/// Decoding never fails: anything that is not understood becomes
/// [`EngineEvent::Unrecognized`] and is left for the caller to ignore.
pub struct Decoder;

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    pub fn new() -> Self {
        Self
    }

    pub fn decode(&self, input: &str) -> EngineEvent {
        let input = input.trim();
        let mut tokens = input.split_whitespace();

        match tokens.next() {
            Some("info") => self.decode_info(tokens),
            Some("bestmove") => EngineEvent::BestMove(tokens.next().unwrap_or_default().to_string()),
            Some("uciok") => EngineEvent::UciOk,
            Some("readyok") => EngineEvent::ReadyOk,

            _ => EngineEvent::Unrecognized,
        }
    }

    fn decode_info<'a>(&self, tokens: impl Iterator<Item = &'a str>) -> EngineEvent {
        // Everything after "string" is free text
        let tokens: Vec<&str> = tokens.take_while(|t| *t != "string").collect();

        tokens
            .windows(3)
            .find(|w| w[0] == "score")
            .and_then(|w| parse_score(w[1], w[2]))
            .map(EngineEvent::ScoreUpdate)
            .unwrap_or(EngineEvent::Unrecognized)
    }
}

fn parse_score(kind: &str, value: &str) -> Option<Score> {
    let value = value.parse::<i32>().ok()?;

    match kind {
        "cp" => Some(Score::Centipawns(value)),
        "mate" => Some(Score::Mate(value)),
        _ => None,
    }
}
