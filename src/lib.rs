//! # LightKV
//!
//! A lightweight typed key-value store with:
//! - Typed accessors for bool, i32, f32, i64 and String values
//! - Durable snapshot persistence with CRC32 validation
//! - Asynchronous commits with an optional completion handle
//! - Named, independently owned store handles
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Store (per name)                         │
//! │            typed save/get/contains/remove API                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Entry Map  │          │  Committer  │
//!   │  (RwLock)   │          │  (channel)  │
//!   └─────────────┘          └──────┬──────┘
//!                                   │
//!                                   ▼
//!                           ┌─────────────┐
//!                           │  Snapshot   │
//!                           │   (file)    │
//!                           └─────────────┘
//! ```
//!
//! Every mutating operation updates the in-memory map synchronously and
//! enqueues a full-map snapshot for the background committer. Callers that
//! care about durability wait on the returned [`Commit`]; everyone else just
//! drops it and keeps going.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod value;
pub mod persist;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{KvError, Result};
pub use config::Config;
pub use persist::Commit;
pub use store::Store;
pub use value::Value;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of LightKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
