//! SqliteSlot: one named row of `collection_slots` in a SQLite database.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use ras_core::errors::RasResult;
use ras_core::traits::ICollectionSlot;

use crate::{migrations, pragmas, to_storage_err};

/// A named slot in a SQLite database file.
pub struct SqliteSlot {
    conn: Connection,
    name: String,
}

impl SqliteSlot {
    /// Open (creating if needed) the database at `path` and bind to slot `name`.
    pub fn open(path: &Path, name: &str) -> RasResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        pragmas::apply_pragmas(&conn)?;
        Self::initialize(conn, name)
    }

    /// Open an in-memory database (for testing). Contents vanish on drop.
    pub fn open_in_memory(name: &str) -> RasResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        Self::initialize(conn, name)
    }

    fn initialize(conn: Connection, name: &str) -> RasResult<Self> {
        migrations::run_migrations(&conn)?;
        Ok(Self {
            conn,
            name: name.to_string(),
        })
    }

    /// The underlying connection (for diagnostics).
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Names of every slot stored in this database.
    pub fn slot_names(&self) -> RasResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM collection_slots ORDER BY name")
            .map_err(|e| to_storage_err(e.to_string()))?;
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| to_storage_err(e.to_string()))?;
        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| to_storage_err(e.to_string()))
    }
}

impl ICollectionSlot for SqliteSlot {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> RasResult<Option<String>> {
        self.conn
            .query_row(
                "SELECT payload FROM collection_slots WHERE name = ?1",
                params![self.name],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| to_storage_err(format!("read slot {}: {e}", self.name)))
    }

    fn write(&self, payload: &str) -> RasResult<()> {
        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| to_storage_err(format!("write slot {} begin: {e}", self.name)))?;
        tx.execute(
            "INSERT INTO collection_slots (name, payload, updated_at)
             VALUES (?1, ?2, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
             ON CONFLICT(name) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at",
            params![self.name, payload],
        )
        .map_err(|e| to_storage_err(format!("write slot {}: {e}", self.name)))?;
        // Dropping an uncommitted transaction rolls it back.
        tx.commit()
            .map_err(|e| to_storage_err(format!("write slot {} commit: {e}", self.name)))?;
        Ok(())
    }
}
