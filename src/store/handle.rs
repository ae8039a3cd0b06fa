//! Store handle implementation

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::debug;

use crate::config::Config;
use crate::error::{KvError, Result};
use crate::persist::{self, Commit, Committer};
use crate::value::Value;

/// File extension for store snapshot files
const STORE_EXTENSION: &str = "lkv";

/// A named, durable, typed key-value store
///
/// ## Concurrency Model
///
/// - **Reads** (get/contains): read lock on the entry map, never touch disk
/// - **Writes** (save/remove): write lock, then a snapshot of the full map is
///   enqueued to the committer while the lock is held, so commits reach the
///   channel in the same order their effects were applied
/// - The committer thread is the only writer to the snapshot file
///
/// `Store` is `Send + Sync`; share it behind an `Arc` for concurrent callers.
/// Dropping the last handle drains queued commits before returning.
pub struct Store {
    /// Store name, fixed at open
    name: String,

    /// Path of the snapshot file
    path: PathBuf,

    /// Live entries (many concurrent readers, exclusive writer)
    entries: RwLock<HashMap<String, Value>>,

    /// Background snapshot writer for this store
    committer: Committer,
}

impl Store {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Open or create the named store under `config.data_dir`
    ///
    /// On open:
    /// 1. Validate the name
    /// 2. Create the data directory if it doesn't exist
    /// 3. Load and checksum-verify the existing snapshot, if any
    /// 4. Spawn the committer thread
    pub fn open(name: &str, config: &Config) -> Result<Self> {
        Self::validate_name(name)?;

        fs::create_dir_all(&config.data_dir)?;
        // Not with_extension: a dot in the name would truncate it
        let path = config.data_dir.join(format!("{}.{}", name, STORE_EXTENSION));

        let entries = persist::load(&path)?;
        debug!(store = %name, path = %path.display(), entries = entries.len(), "store opened");

        let committer = Committer::spawn(name, path.clone(), config.fsync);

        Ok(Self {
            name: name.to_string(),
            path,
            entries: RwLock::new(entries),
            committer,
        })
    }

    /// A store name becomes a file name, so it must be a single non-empty
    /// path component.
    fn validate_name(name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(KvError::InvalidName("name is empty".to_string()));
        }
        if name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(KvError::InvalidName(format!(
                "name is not a valid file stem: {:?}",
                name
            )));
        }
        Ok(())
    }

    // =========================================================================
    // Write Operations
    // =========================================================================

    /// Save a boolean under `key`, overwriting any previous entry
    pub fn save_boolean(&self, key: impl Into<String>, value: bool) -> Commit {
        self.save_value(key.into(), Value::Bool(value))
    }

    /// Save a 32-bit integer under `key`, overwriting any previous entry
    pub fn save_int(&self, key: impl Into<String>, value: i32) -> Commit {
        self.save_value(key.into(), Value::Int(value))
    }

    /// Save a 32-bit float under `key`, overwriting any previous entry
    pub fn save_float(&self, key: impl Into<String>, value: f32) -> Commit {
        self.save_value(key.into(), Value::Float(value))
    }

    /// Save a 64-bit integer under `key`, overwriting any previous entry
    pub fn save_long(&self, key: impl Into<String>, value: i64) -> Commit {
        self.save_value(key.into(), Value::Long(value))
    }

    /// Save a string under `key`, overwriting any previous entry
    pub fn save_string(&self, key: impl Into<String>, value: impl Into<String>) -> Commit {
        self.save_value(key.into(), Value::Str(value.into()))
    }

    /// Save every entry of the map, staged as a single commit
    pub fn save_boolean_batch(&self, entries: HashMap<String, bool>) -> Commit {
        self.save_values(entries.into_iter().map(|(k, v)| (k, Value::Bool(v))))
    }

    /// Save every entry of the map, staged as a single commit
    pub fn save_int_batch(&self, entries: HashMap<String, i32>) -> Commit {
        self.save_values(entries.into_iter().map(|(k, v)| (k, Value::Int(v))))
    }

    /// Save every entry of the map, staged as a single commit
    pub fn save_float_batch(&self, entries: HashMap<String, f32>) -> Commit {
        self.save_values(entries.into_iter().map(|(k, v)| (k, Value::Float(v))))
    }

    /// Save every entry of the map, staged as a single commit
    pub fn save_long_batch(&self, entries: HashMap<String, i64>) -> Commit {
        self.save_values(entries.into_iter().map(|(k, v)| (k, Value::Long(v))))
    }

    /// Save every entry of the map, staged as a single commit
    pub fn save_string_batch(&self, entries: HashMap<String, String>) -> Commit {
        self.save_values(entries.into_iter().map(|(k, v)| (k, Value::Str(v))))
    }

    /// Remove the entry for `key` if present; absent keys are a no-op
    pub fn remove(&self, key: &str) -> Commit {
        let mut entries = self.entries.write();
        entries.remove(key);
        self.committer.commit(entries.clone())
    }

    /// Remove every entry in the store
    pub fn remove_all(&self) -> Commit {
        let mut entries = self.entries.write();
        entries.clear();
        self.committer.commit(entries.clone())
    }

    // =========================================================================
    // Read Operations
    // =========================================================================

    /// Get the boolean stored under `key`, or `false` if the key is absent or
    /// holds a different type
    pub fn get_boolean(&self, key: &str) -> bool {
        self.read_typed(key, Value::as_bool).unwrap_or(false)
    }

    /// Get the 32-bit integer stored under `key`, or `0` on a miss
    pub fn get_int(&self, key: &str) -> i32 {
        self.read_typed(key, Value::as_int).unwrap_or(0)
    }

    /// Get the 32-bit float stored under `key`, or `0.0` on a miss
    pub fn get_float(&self, key: &str) -> f32 {
        self.read_typed(key, Value::as_float).unwrap_or(0.0)
    }

    /// Get the 64-bit integer stored under `key`, or `0` on a miss
    pub fn get_long(&self, key: &str) -> i64 {
        self.read_typed(key, Value::as_long).unwrap_or(0)
    }

    /// Get the string stored under `key`, or `None` if the key is absent or
    /// holds a different type
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.read_typed(key, |v| v.as_str().map(str::to_string))
    }

    /// Get the raw value stored under `key`, distinguishing an absent key
    /// from a stored default
    pub fn try_get(&self, key: &str) -> Option<Value> {
        self.entries.read().get(key).cloned()
    }

    /// True iff the store holds an entry for `key`, regardless of its type
    pub fn contains(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The store name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the snapshot file backing this store
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of entries currently in the store
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// True iff the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    // =========================================================================
    // Internal
    // =========================================================================

    /// Insert one entry and enqueue a commit.
    ///
    /// The snapshot is cloned and enqueued while the write lock is held so
    /// commit order matches apply order across concurrent writers.
    fn save_value(&self, key: String, value: Value) -> Commit {
        let mut entries = self.entries.write();
        entries.insert(key, value);
        self.committer.commit(entries.clone())
    }

    /// Insert a batch of entries under one lock and one commit
    fn save_values(&self, batch: impl IntoIterator<Item = (String, Value)>) -> Commit {
        let mut entries = self.entries.write();
        entries.extend(batch);
        self.committer.commit(entries.clone())
    }

    fn read_typed<T>(&self, key: &str, extract: impl FnOnce(&Value) -> Option<T>) -> Option<T> {
        self.entries.read().get(key).and_then(|v| extract(v))
    }
}
