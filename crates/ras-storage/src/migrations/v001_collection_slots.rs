//! v001: collection_slots.

use rusqlite::Connection;

use ras_core::errors::RasResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> RasResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS collection_slots (
            name        TEXT PRIMARY KEY,
            payload     TEXT NOT NULL,
            updated_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
