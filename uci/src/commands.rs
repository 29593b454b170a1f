/// Commands sent from the analyser to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciCommand {
    Uci,
    IsReady,

    UciNewGame,
    Position { fen: String },
    Go(GoParams),

    Stop,
    Quit,
}

/// Messages received from the engine, one per output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ScoreUpdate(Score),
    BestMove(String),

    // Handshake replies
    UciOk,
    ReadyOk,

    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    Centipawns(i32), // centipawns, relative to the side to move
    Mate(i32),       // Positive for mate-in-n, negative for mated-in-n
}

impl Score {
    #[inline]
    pub fn kind(&self) -> ScoreKind {
        match self {
            Score::Centipawns(_) => ScoreKind::Centipawns,
            Score::Mate(_) => ScoreKind::MateIn,
        }
    }

    #[inline]
    pub fn value(&self) -> i32 {
        match *self {
            Score::Centipawns(cp) => cp,
            Score::Mate(moves) => moves,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreKind {
    Centipawns,
    MateIn,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoParams {
    // Search depth ply only.
    pub depth: Option<u8>,
}

impl GoParams {
    pub fn depth(depth: u8) -> Self {
        Self { depth: Some(depth) }
    }
}
