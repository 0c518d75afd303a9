//! Schema migrations, tracked by `PRAGMA user_version`.

mod v001_collection_slots;

use rusqlite::Connection;

use ras_core::errors::{RasError, RasResult, StorageError};

use crate::to_storage_err;

type Migration = fn(&Connection) -> RasResult<()>;

/// Ordered migrations; entry `i` upgrades the schema to version `i + 1`.
const MIGRATIONS: &[Migration] = &[v001_collection_slots::migrate];

/// Schema version after all migrations have run.
pub const LATEST_VERSION: u32 = MIGRATIONS.len() as u32;

/// Current schema version of the database.
pub fn current_version(conn: &Connection) -> RasResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Apply every migration newer than the database's current version.
pub fn run_migrations(conn: &Connection) -> RasResult<()> {
    let current = current_version(conn)?;
    for (index, migrate) in MIGRATIONS.iter().enumerate().skip(current as usize) {
        let version = index as u32 + 1;
        migrate(conn).map_err(|e| {
            RasError::StorageError(StorageError::MigrationFailed {
                version,
                reason: e.to_string(),
            })
        })?;
        conn.pragma_update(None, "user_version", version)
            .map_err(|e| to_storage_err(e.to_string()))?;
        tracing::debug!(version, "applied schema migration");
    }
    Ok(())
}
