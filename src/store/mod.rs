//! Store Module
//!
//! The public facade: a named, typed key-value store handle.
//!
//! ## Responsibilities
//! - Typed save/get helpers for bool, i32, f32, i64 and String
//! - Batch saves staged as one commit
//! - Existence checks, removal, and full clears
//! - Owning the in-memory entry map and the store's committer
//!
//! ## Handle Model
//! `Store::open` is a plain factory: each call returns an owned handle backed
//! by its own snapshot file, so differently named stores coexist and live as
//! long as their handles. There is no process-wide registry.

mod handle;

pub use handle::Store;
