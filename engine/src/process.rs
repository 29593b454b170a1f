use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::channel::EngineChannel;
use crate::error::SessionError;

const QUIT_GRACE: Duration = Duration::from_millis(100);

/// Knows how to start an engine binary. Kept by the session so a crashed
/// engine can be started again.
#[derive(Debug, Clone)]
pub struct EngineLauncher {
    path: PathBuf,
    args: Vec<String>,
}

impl EngineLauncher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn launch(&self) -> Result<(EngineProcess, EngineChannel), SessionError> {
        let mut child = Command::new(&self.path)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| SessionError::Spawn {
                path: self.path.display().to_string(),
                source,
            })?;

        let stdin = child.stdin.take().ok_or(SessionError::MissingPipe("stdin"))?;
        let stdout = child.stdout.take().ok_or(SessionError::MissingPipe("stdout"))?;

        log::debug!("Started engine {} (pid {})", self.path.display(), child.id());

        let channel = EngineChannel::from_streams(Box::new(stdin), stdout);
        Ok((EngineProcess { child }, channel))
    }
}

/// Owns the engine child process and makes sure it does not outlive us.
pub struct EngineProcess {
    child: Child,
}

impl Drop for EngineProcess {
    fn drop(&mut self) {
        // The session has already sent "quit"; give the engine a moment to exit
        let deadline = Instant::now() + QUIT_GRACE;
        loop {
            match self.child.try_wait() {
                Ok(Some(_)) => return,
                Ok(None) if Instant::now() < deadline => thread::sleep(Duration::from_millis(5)),
                _ => break,
            }
        }

        // Still running (or status unknown), force kill it
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_missing_binary() {
        let launcher = EngineLauncher::new("/nonexistent/path/to/engine");
        match launcher.launch() {
            Err(SessionError::Spawn { path, .. }) => {
                assert_eq!(path, "/nonexistent/path/to/engine")
            }
            Err(e) => panic!("Unexpected error: {}", e),
            Ok(_) => panic!("Expected spawn failure"),
        }
    }
}
