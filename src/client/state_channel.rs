//! Polls the simulation's state document.
//!
//! Retry policy: none beyond the next tick. A missing, half-written or
//! corrupt document leaves the last good snapshot in force, forever if need
//! be. There is no locking, backoff or attempt limit.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{trace, warn};

use super::error::ChannelError;
use super::transform::RoomMetrics;
use crate::shared::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Poll {
    /// A new snapshot replaced the previous one.
    Updated,
    /// The previous snapshot is still authoritative.
    Unchanged,
}

pub struct StateChannel {
    path: PathBuf,
    snapshot: GameStateSnapshot,
    room: RoomMetrics,
    // Set once an unreadable document has been warned about.
    denied_reported: bool,
}

impl StateChannel {
    pub fn new(shared_dir: &Path) -> Self {
        Self {
            path: shared_dir.join(STATE_FILE),
            snapshot: GameStateSnapshot::default(),
            room: RoomMetrics::default(),
            denied_reported: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Last known good snapshot.
    pub fn snapshot(&self) -> &GameStateSnapshot {
        &self.snapshot
    }

    /// Room dimensions from the last snapshot that carried a tilemap.
    pub fn room(&self) -> &RoomMetrics {
        &self.room
    }

    pub fn poll(&mut self) -> Poll {
        match self.read() {
            Ok(snapshot) => {
                if let Some(tilemap) = &snapshot.tilemap {
                    self.room = RoomMetrics::from_tilemap(tilemap);
                }
                self.snapshot = snapshot;
                self.denied_reported = false;
                Poll::Updated
            }
            Err(err) => {
                self.report(&err);
                Poll::Unchanged
            }
        }
    }

    // A missing document is the normal pre-start state; a permission problem
    // is worth one warning.
    fn report(&mut self, err: &ChannelError) {
        match err {
            ChannelError::ChannelUnavailable { source, .. }
                if source.kind() == ErrorKind::PermissionDenied && !self.denied_reported =>
            {
                self.denied_reported = true;
                warn!("{}", err);
            }
            ChannelError::ChannelUnavailable { .. } => trace!("{}", err),
            _ => warn!("{}", err),
        }
    }

    fn read(&self) -> Result<GameStateSnapshot, ChannelError> {
        let bytes = fs::read(&self.path).map_err(|source| match source.kind() {
            ErrorKind::NotFound | ErrorKind::PermissionDenied => ChannelError::ChannelUnavailable {
                path: self.path.clone(),
                source,
            },
            // Anything else mid-read is treated like a torn document.
            _ => ChannelError::MalformedDocument {
                path: self.path.clone(),
                source: serde_json::Error::io(source),
            },
        })?;

        GameStateSnapshot::from_slice(&bytes).map_err(|source| ChannelError::MalformedDocument {
            path: self.path.clone(),
            source,
        })
    }
}
