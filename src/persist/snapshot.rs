//! Snapshot file format
//!
//! A snapshot is the full entry map of one store, written as a single file:
//!
//! ```text
//! ┌───────────┬─────────────┬──────────────────────────┐
//! │ magic (4) │ crc32 (4 LE)│ bincode payload (n)       │
//! └───────────┴─────────────┴──────────────────────────┘
//! ```
//!
//! The CRC covers the payload only. Writes go to a sibling temp file which is
//! renamed over the live file, so a crash mid-write leaves the previous
//! snapshot intact.

use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::{KvError, Result};
use crate::value::Value;

/// Magic bytes identifying a LightKV snapshot file
const MAGIC: [u8; 4] = *b"LKV1";

/// Size of the fixed header (magic + crc)
const HEADER_SIZE: usize = 8;

/// Encode the entry map into snapshot file bytes
pub(crate) fn encode(entries: &HashMap<String, Value>) -> Result<Vec<u8>> {
    let payload =
        bincode::serialize(entries).map_err(|e| KvError::Serialization(e.to_string()))?;
    let crc = crc32fast::hash(&payload);

    let mut bytes = Vec::with_capacity(HEADER_SIZE + payload.len());
    bytes.extend_from_slice(&MAGIC);
    bytes.extend_from_slice(&crc.to_le_bytes());
    bytes.extend_from_slice(&payload);
    Ok(bytes)
}

/// Decode snapshot file bytes back into an entry map
pub(crate) fn decode(bytes: &[u8]) -> Result<HashMap<String, Value>> {
    if bytes.len() < HEADER_SIZE {
        return Err(KvError::Corruption(format!(
            "snapshot truncated: {} bytes, need at least {}",
            bytes.len(),
            HEADER_SIZE
        )));
    }

    if bytes[0..4] != MAGIC {
        return Err(KvError::Corruption("bad magic bytes".to_string()));
    }

    let stored_crc = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
    let payload = &bytes[HEADER_SIZE..];
    let actual_crc = crc32fast::hash(payload);

    if stored_crc != actual_crc {
        return Err(KvError::Corruption(format!(
            "checksum mismatch: stored {:#010x}, computed {:#010x}",
            stored_crc, actual_crc
        )));
    }

    bincode::deserialize(payload).map_err(|e| KvError::Serialization(e.to_string()))
}

/// Load the entry map from a snapshot file
///
/// A missing file is an empty store, not an error.
pub(crate) fn load(path: &Path) -> Result<HashMap<String, Value>> {
    if !path.exists() {
        return Ok(HashMap::new());
    }

    let bytes = fs::read(path)?;
    decode(&bytes)
}

/// Write the entry map as a snapshot, atomically replacing any previous one
pub(crate) fn write(path: &Path, entries: &HashMap<String, Value>, fsync: bool) -> Result<()> {
    let bytes = encode(entries)?;

    let tmp_path = path.with_extension("lkv.tmp");
    {
        let mut file: File = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&tmp_path)?;
        file.write_all(&bytes)?;
        if fsync {
            file.sync_all()?;
        }
    }

    fs::rename(&tmp_path, path)?;
    Ok(())
}
