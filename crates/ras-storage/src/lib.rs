//! # ras-storage
//!
//! Owns the session's authoritative collection and mirrors it to a single
//! named durable slot. Loading never fails: a missing or corrupt slot falls
//! back to the seed collection.

pub mod codec;
pub mod migrations;
pub mod pragmas;
pub mod seed;
pub mod slots;
pub mod store;

pub use slots::{MemorySlot, SqliteSlot};
pub use store::{CollectionStore, FallbackReason, LoadSource, UpsertOutcome};

use ras_core::errors::{RasError, StorageError};

/// Wrap a SQLite failure message as an engine error.
pub(crate) fn to_storage_err(message: String) -> RasError {
    RasError::StorageError(StorageError::SqliteError { message })
}
