//! PRAGMA configuration applied to the slot connection.
//!
//! WAL mode, NORMAL sync, 5s busy_timeout.

use rusqlite::Connection;

use ras_core::errors::RasResult;

use crate::to_storage_err;

/// Apply durability and locking pragmas to a connection.
pub fn apply_pragmas(conn: &Connection) -> RasResult<()> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Verify that WAL mode is active on a connection.
pub fn verify_wal_mode(conn: &Connection) -> RasResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
