/// Durable storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("slot `{slot}` unavailable: {reason}")]
    SlotUnavailable { slot: String, reason: String },
}
