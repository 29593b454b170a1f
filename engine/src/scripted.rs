//! In-process engine driven by a closure.
//!
//! Every command line written to the channel is handed to the script together
//! with a [`Replies`] handle. The script answers by sending lines, possibly
//! later from another thread, or simulates a crash with [`Replies::close`].

use std::io::{self, Write};
use std::sync::mpsc::{channel, Sender};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::channel::EngineChannel;

/// Sending half of a scripted engine's output.
#[derive(Clone)]
pub struct Replies {
    tx: Arc<Mutex<Option<Sender<String>>>>,
}

impl Replies {
    fn lock(&self) -> MutexGuard<'_, Option<Sender<String>>> {
        self.tx.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn send(&self, line: impl Into<String>) {
        if let Some(tx) = self.lock().as_ref() {
            let _ = tx.send(line.into());
        }
    }

    /// Ends the output stream, as if the engine process had exited.
    pub fn close(&self) {
        self.lock().take();
    }

    pub fn is_closed(&self) -> bool {
        self.lock().is_none()
    }
}

struct ScriptedWriter<F> {
    script: F,
    replies: Replies,
    buffer: Vec<u8>,
}

impl<F> Write for ScriptedWriter<F>
where
    F: FnMut(&str, &Replies) + Send,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.replies.is_closed() {
            return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "scripted engine has exited",
            ));
        }

        self.buffer.extend_from_slice(buf);
        while let Some(end) = self.buffer.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=end).collect();
            let line = String::from_utf8_lossy(&line);
            (self.script)(line.trim(), &self.replies);
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Builds a channel whose engine side is `script`.
pub fn scripted<F>(script: F) -> EngineChannel
where
    F: FnMut(&str, &Replies) + Send + 'static,
{
    let (tx, rx) = channel();
    let writer = ScriptedWriter {
        script,
        replies: Replies {
            tx: Arc::new(Mutex::new(Some(tx))),
        },
        buffer: Vec::new(),
    };

    EngineChannel::new(Box::new(writer), rx)
}

/// Answers the start-up handshake. Returns true if `command` was handled.
pub fn handshake(command: &str, replies: &Replies) -> bool {
    match command {
        "uci" => {
            replies.send("id name Scripted");
            replies.send("uciok");
            true
        }
        "isready" => {
            replies.send("readyok");
            true
        }
        _ => false,
    }
}
