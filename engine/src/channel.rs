use std::io::{self, BufRead, BufReader, Read, Write};
use std::sync::mpsc::{channel, Receiver};
use std::thread;

use log::debug;

/// Both directions of an engine conversation: a writer for commands and a
/// receiver fed with the engine's output lines.
///
/// The receiver disconnects once the engine side goes away.
pub struct EngineChannel {
    writer: Box<dyn Write + Send>,
    pub(crate) lines: Receiver<String>,
}

impl EngineChannel {
    pub fn new(writer: Box<dyn Write + Send>, lines: Receiver<String>) -> Self {
        Self { writer, lines }
    }

    /// Wraps a byte stream, reading it line by line on a background thread.
    pub fn from_streams<R>(writer: Box<dyn Write + Send>, reader: R) -> Self
    where
        R: Read + Send + 'static,
    {
        Self::new(writer, spawn_reader(reader))
    }

    pub(crate) fn send_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

fn spawn_reader<R>(reader: R) -> Receiver<String>
where
    R: Read + Send + 'static,
{
    let (tx, rx) = channel();

    thread::spawn(move || {
        let mut reader = BufReader::new(reader);
        let mut buffer = Vec::new();

        loop {
            buffer.clear();
            match reader.read_until(b'\n', &mut buffer) {
                Ok(0) => break,
                Ok(_) => {
                    // Bytes that are not UTF-8 are replaced, the line is still delivered
                    let line = String::from_utf8_lossy(&buffer);
                    let line = line.trim_end_matches(&['\n', '\r'][..]).to_string();
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    debug!("Engine output closed: {}", e);
                    break;
                }
            }
        }
    });

    rx
}
