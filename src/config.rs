//! Configuration for LightKV
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Configuration shared by all stores opened against it
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for all store files
    /// Internal structure:
    ///   {data_dir}/
    ///     └── {store_name}.lkv    (one snapshot file per named store)
    pub data_dir: PathBuf,

    // -------------------------------------------------------------------------
    // Commit Configuration
    // -------------------------------------------------------------------------
    /// Whether the committer fsyncs each snapshot before renaming it into
    /// place. Disabling trades durability for throughput.
    pub fsync: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./lightkv_data"),
            fsync: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for all store files)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set whether snapshots are fsynced before being renamed into place
    pub fn fsync(mut self, fsync: bool) -> Self {
        self.config.fsync = fsync;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
