use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::error::ChannelError;
use crate::shared::*;

/// Writes the local input frame for the simulation, once per tick.
pub struct InputChannel {
    path: PathBuf,
    staging: PathBuf,
    closed: bool,
    attempts: u64,
    written: u64,
}

impl InputChannel {
    pub fn new(shared_dir: &Path) -> Self {
        Self {
            path: shared_dir.join(INPUT_FILE),
            staging: shared_dir.join(format!(".{}.tmp", INPUT_FILE)),
            closed: false,
            attempts: 0,
            written: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the input document with `frame`. Failures are logged and
    /// dropped; the simulation simply misses this tick's input.
    pub fn publish(&mut self, frame: &InputFrame) {
        if self.closed {
            debug!("input channel closed, dropping frame");
            return;
        }

        self.attempts += 1;
        match self.write(frame) {
            Ok(()) => self.written += 1,
            Err(err) => warn!("{}", err),
        }
    }

    /// Publishes the terminal quit frame and closes the channel. A failed
    /// staged write falls back to overwriting `input.json` in place.
    pub fn publish_quit(&mut self) {
        if self.closed {
            return;
        }

        let frame = InputFrame::quit();
        self.attempts += 1;
        let result = self.write(&frame).or_else(|err| {
            debug!("{}, retrying in place", err);
            self.write_in_place(&frame)
        });
        match result {
            Ok(()) => {
                self.written += 1;
                info!("quit frame published to {:?}", self.path);
            }
            Err(err) => warn!("{}", err),
        }
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Publish calls that reached the filesystem (successful or not).
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    // Staged then renamed so readers never see a torn document.
    fn write(&self, frame: &InputFrame) -> Result<(), ChannelError> {
        let failure = |source: std::io::Error| ChannelError::WriteFailure {
            path: self.path.clone(),
            source,
        };

        let json = serde_json::to_vec_pretty(frame).map_err(|e| failure(e.into()))?;
        fs::write(&self.staging, json).map_err(failure)?;
        fs::rename(&self.staging, &self.path).map_err(failure)
    }

    fn write_in_place(&self, frame: &InputFrame) -> Result<(), ChannelError> {
        let failure = |source: std::io::Error| ChannelError::WriteFailure {
            path: self.path.clone(),
            source,
        };

        let json = serde_json::to_vec_pretty(frame).map_err(|e| failure(e.into()))?;
        fs::write(&self.path, json).map_err(failure)
    }
}

/// Best-effort creation of the shared directory.
pub fn ensure_shared_dir(path: &Path) -> Result<(), ChannelError> {
    fs::create_dir_all(path).map_err(|source| ChannelError::DirectoryUnavailable {
        path: path.to_path_buf(),
        source,
    })
}
