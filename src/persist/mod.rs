//! Persistence Module
//!
//! Durable backing for a store: snapshot file encoding and the background
//! committer that writes snapshots without blocking callers.
//!
//! ## Responsibilities
//! - Encode/decode the entry map as a checksummed snapshot file
//! - Atomically replace the live snapshot (temp file + rename)
//! - Run one committer thread per store, fed by a channel
//! - Hand callers an optional completion signal per commit
//!
//! ## Durability Model
//! A commit is a full-map snapshot write. Commits are processed in order but
//! asynchronously; a caller that drops the [`Commit`] handle gets
//! fire-and-forget semantics, a caller that waits on it observes the write's
//! outcome. Failures nobody waits on are logged and swallowed.

mod committer;
mod snapshot;

pub(crate) use committer::Committer;
pub(crate) use snapshot::load;

use crossbeam::channel::Receiver;

use crate::error::{KvError, Result};

/// Completion handle for a single enqueued commit
///
/// Dropping the handle detaches from the commit without cancelling it.
pub struct Commit {
    rx: Receiver<Result<()>>,
}

impl Commit {
    pub(crate) fn new(rx: Receiver<Result<()>>) -> Self {
        Self { rx }
    }

    /// Block until the committer has processed this commit, returning its
    /// outcome. Errors if the committer shut down before acknowledging.
    pub fn wait(self) -> Result<()> {
        self.rx
            .recv()
            .unwrap_or_else(|_| Err(KvError::Commit("committer shut down".to_string())))
    }
}
