use std::io;
use std::sync::mpsc::{RecvTimeoutError, TryRecvError};
use std::time::{Duration, Instant};

use chess::Color;
use evaluation::{normalize, EvaluationResult};
use log::{debug, error, warn};
use uci::{Decoder, Encoder, EngineEvent, GoParams, Score, UciCommand};
use utils::Position;

use crate::channel::EngineChannel;
use crate::config::{SearchLimits, SessionConfig};
use crate::error::SessionError;
use crate::process::{EngineLauncher, EngineProcess};

pub const REASON_TIMEOUT: &str = "timeout";
pub const REASON_NO_EVALUATION: &str = "no evaluation produced";
pub const REASON_IN_FLIGHT: &str = "request already in flight";
pub const REASON_UNAVAILABLE: &str = "engine unavailable";
pub const REASON_EXITED: &str = "engine process exited";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingBestMove,
    TimedOut,
    /// The engine channel is gone. Nothing is accepted until re-initialized.
    Faulted,
}

/// Per-request state. Consumed by the one resolution of the request.
struct PendingRequest {
    side_to_move: Color,
    latest: Option<EvaluationResult>,
}

impl PendingRequest {
    fn new(side_to_move: Color) -> Self {
        Self {
            side_to_move,
            latest: None,
        }
    }

    /// Later scores come from deeper iterations and replace earlier ones.
    fn observe(&mut self, score: Score) {
        if let Some(result) = normalize(score.kind(), score.value(), self.side_to_move) {
            self.latest = Some(result);
        }
    }

    fn resolve(self, resolution: Resolution) -> EvaluationResult {
        match resolution {
            Resolution::BestMove => self
                .latest
                .unwrap_or_else(|| EvaluationResult::failed(REASON_NO_EVALUATION)),
            Resolution::Timeout => EvaluationResult::failed(REASON_TIMEOUT),
            Resolution::Fault(reason) => EvaluationResult::Failed(reason),
        }
    }
}

enum Resolution {
    BestMove,
    Timeout,
    Fault(String),
}

/// Owner of the single conversation with an analysis engine.
///
/// Requests are single-flight: `evaluate` takes `&mut self` and does not
/// return before the request is resolved by `bestmove`, by its timeout, or by
/// the engine going away.
pub struct EngineSession {
    // Declared before `process` so stdin closes before the process is reaped
    channel: EngineChannel,
    process: Option<EngineProcess>,
    launcher: Option<EngineLauncher>,

    config: SessionConfig,
    state: SessionState,
    decoder: Decoder,
    encoder: Encoder,

    // Searches that were stopped and whose bestmove has not been seen yet
    owed_best_moves: usize,
}

impl EngineSession {
    /// Wraps an already connected channel. No handshake is performed.
    pub fn new(channel: EngineChannel, config: SessionConfig) -> Self {
        Self {
            channel,
            process: None,
            launcher: None,
            config,
            state: SessionState::Idle,
            decoder: Decoder::new(),
            encoder: Encoder {},
            owed_best_moves: 0,
        }
    }

    /// Starts the engine binary and completes the UCI handshake.
    pub fn spawn(launcher: EngineLauncher, config: SessionConfig) -> Result<Self, SessionError> {
        let (process, channel) = launcher.launch()?;

        let mut session = Self::new(channel, config);
        session.process = Some(process);
        session.launcher = Some(launcher);
        session.initialize()?;

        Ok(session)
    }

    #[inline]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    pub fn is_faulted(&self) -> bool {
        self.state == SessionState::Faulted
    }

    /// `uci`/`uciok` followed by `isready`/`readyok`.
    pub fn initialize(&mut self) -> Result<(), SessionError> {
        let result = self.handshake();
        self.state = match result {
            Ok(()) => SessionState::Idle,
            Err(_) => SessionState::Faulted,
        };
        result
    }

    /// Replaces a launched engine with a fresh process.
    pub fn reinitialize(&mut self) -> Result<(), SessionError> {
        let launcher = self.launcher.clone().ok_or(SessionError::NotRestartable)?;

        log::info!("Restarting engine {}", launcher.path().display());
        self.state = SessionState::Faulted;
        self.shutdown();

        let (process, channel) = launcher.launch()?;
        self.channel = channel;
        self.process = Some(process);
        self.owed_best_moves = 0;

        self.initialize()
    }

    /// Evaluates one position. Always produces exactly one result.
    pub fn evaluate(&mut self, position: &Position, limits: &SearchLimits) -> EvaluationResult {
        match self.state {
            SessionState::Idle => {}
            SessionState::AwaitingBestMove | SessionState::TimedOut => {
                warn!("Rejected {}: another request is unresolved", position);
                return EvaluationResult::failed(REASON_IN_FLIGHT);
            }
            SessionState::Faulted => return EvaluationResult::failed(REASON_UNAVAILABLE),
        }

        self.settle();
        if self.is_faulted() {
            return EvaluationResult::failed(REASON_EXITED);
        }

        let request = PendingRequest::new(position.side_to_move());
        self.state = SessionState::AwaitingBestMove;

        let resolution = match self.start_search(position, limits) {
            Ok(()) => self.await_resolution(request, limits.timeout),
            Err(e) => (request, Resolution::Fault(format!("failed to write to engine: {}", e))),
        };

        self.finish(resolution)
    }

    fn start_search(&mut self, position: &Position, limits: &SearchLimits) -> io::Result<()> {
        self.send(&UciCommand::UciNewGame)?;
        self.send(&UciCommand::Position {
            fen: position.fen().to_string(),
        })?;
        self.send(&UciCommand::Go(GoParams::depth(limits.depth)))
    }

    fn await_resolution(
        &mut self,
        mut request: PendingRequest,
        timeout: Duration,
    ) -> (PendingRequest, Resolution) {
        let deadline = Instant::now() + timeout;

        loop {
            // A chatty engine must not keep the request alive past its deadline
            let now = Instant::now();
            if now >= deadline {
                return (request, Resolution::Timeout);
            }

            let line = match self.channel.lines.recv_timeout(deadline - now) {
                Ok(line) => line,
                Err(RecvTimeoutError::Timeout) => return (request, Resolution::Timeout),
                Err(RecvTimeoutError::Disconnected) => {
                    return (request, Resolution::Fault(REASON_EXITED.to_string()))
                }
            };
            debug!("Input: {:?}", line);

            match self.decoder.decode(&line) {
                EngineEvent::ScoreUpdate(score) => request.observe(score),
                EngineEvent::BestMove(best_move) => {
                    debug!("Engine finished with bestmove {}", best_move);
                    return (request, Resolution::BestMove);
                }
                _ => {}
            }
        }
    }

    fn finish(&mut self, (request, resolution): (PendingRequest, Resolution)) -> EvaluationResult {
        match &resolution {
            Resolution::BestMove => {
                self.state = SessionState::Idle;
            }
            Resolution::Timeout => {
                self.state = SessionState::TimedOut;
                warn!("Engine did not answer in time, stopping search");

                // Best effort, the result does not wait for the engine
                match self.send(&UciCommand::Stop) {
                    Ok(()) => self.owed_best_moves += 1,
                    Err(e) => debug!("Failed to send stop: {}", e),
                }
                self.state = SessionState::Idle;
            }
            Resolution::Fault(reason) => {
                error!("Engine fault: {}", reason);
                self.state = SessionState::Faulted;
            }
        }

        request.resolve(resolution)
    }

    /// Drops output left over from earlier requests before a new one starts.
    fn settle(&mut self) {
        loop {
            match self.channel.lines.try_recv() {
                Ok(line) => self.discard(&line),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.state = SessionState::Faulted;
                    return;
                }
            }
        }

        let deadline = Instant::now() + self.config.stop_grace;
        while self.owed_best_moves > 0 {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.channel.lines.recv_timeout(remaining) {
                Ok(line) => self.discard(&line),
                Err(RecvTimeoutError::Timeout) => {
                    debug!("Engine never acknowledged stop");
                    self.owed_best_moves = 0;
                }
                Err(RecvTimeoutError::Disconnected) => {
                    self.state = SessionState::Faulted;
                    return;
                }
            }
        }
    }

    fn discard(&mut self, line: &str) {
        debug!("Discarding stale output: {:?}", line);
        if let EngineEvent::BestMove(_) = self.decoder.decode(line) {
            self.owed_best_moves = self.owed_best_moves.saturating_sub(1);
        }
    }

    fn handshake(&mut self) -> Result<(), SessionError> {
        self.send(&UciCommand::Uci)?;
        self.wait_for(EngineEvent::UciOk, "uciok")?;

        self.send(&UciCommand::IsReady)?;
        self.wait_for(EngineEvent::ReadyOk, "readyok")
    }

    fn wait_for(&mut self, expected: EngineEvent, name: &str) -> Result<(), SessionError> {
        let deadline = Instant::now() + self.config.handshake_timeout;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.channel.lines.recv_timeout(remaining) {
                Ok(line) => {
                    debug!("Input: {:?}", line);
                    if self.decoder.decode(&line) == expected {
                        return Ok(());
                    }
                }
                Err(RecvTimeoutError::Timeout) => {
                    return Err(SessionError::Handshake(format!(
                        "no '{}' within {:?}",
                        name, self.config.handshake_timeout
                    )))
                }
                Err(RecvTimeoutError::Disconnected) => return Err(SessionError::ChannelClosed),
            }
        }
    }

    fn send(&mut self, command: &UciCommand) -> io::Result<()> {
        let line = self.encoder.encode(command);
        debug!("Output: {:?}", line);
        self.channel.send_line(&line)
    }

    fn shutdown(&mut self) {
        let _ = self.send(&UciCommand::Quit);
        self.process.take();
    }
}

impl Drop for EngineSession {
    fn drop(&mut self) {
        // The process (if any) is killed after this if "quit" is ignored
        let _ = self.send(&UciCommand::Quit);
    }
}
