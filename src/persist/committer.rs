//! Background committer
//!
//! One thread per store drains a channel of snapshot jobs and writes each to
//! disk in order. Callers never block on the write; they receive a [`Commit`]
//! handle they can wait on or drop.

use std::collections::HashMap;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

use crossbeam::channel::{bounded, unbounded, Sender};
use tracing::{debug, error};

use crate::error::{KvError, Result};
use crate::value::Value;

use super::snapshot;
use super::Commit;

/// A snapshot queued for durable write
struct CommitJob {
    entries: HashMap<String, Value>,
    done: Sender<Result<()>>,
}

/// Owns the committer thread for one store
pub(crate) struct Committer {
    tx: Option<Sender<CommitJob>>,
    worker: Option<JoinHandle<()>>,
}

impl Committer {
    /// Spawn the committer thread writing snapshots to `path`
    pub(crate) fn spawn(store_name: &str, path: PathBuf, fsync: bool) -> Self {
        let (tx, rx) = unbounded::<CommitJob>();
        let name = store_name.to_string();

        let worker = thread::Builder::new()
            .name(format!("lightkv-commit-{}", store_name))
            .spawn(move || {
                while let Ok(job) = rx.recv() {
                    let result = snapshot::write(&path, &job.entries, fsync);
                    match &result {
                        Ok(()) => {
                            debug!(store = %name, entries = job.entries.len(), "snapshot committed")
                        }
                        Err(e) => error!(store = %name, error = %e, "commit failed"),
                    }
                    // Receiver may have been dropped (fire-and-forget)
                    let _ = job.done.send(result);
                }
                debug!(store = %name, "committer shut down");
            })
            .ok();

        Self {
            tx: Some(tx),
            worker,
        }
    }

    /// Enqueue a snapshot for durable write
    pub(crate) fn commit(&self, entries: HashMap<String, Value>) -> Commit {
        let (done_tx, done_rx) = bounded(1);

        match &self.tx {
            Some(tx) => {
                let job = CommitJob {
                    entries,
                    done: done_tx.clone(),
                };
                if tx.send(job).is_err() {
                    let _ = done_tx
                        .send(Err(KvError::Commit("committer unavailable".to_string())));
                }
            }
            None => {
                let _ = done_tx.send(Err(KvError::Commit("committer unavailable".to_string())));
            }
        }

        Commit::new(done_rx)
    }
}

impl Drop for Committer {
    /// Closes the channel and waits for queued commits to drain
    fn drop(&mut self) {
        self.tx.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
