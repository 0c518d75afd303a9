use serde::{Deserialize, Serialize};

use super::defaults;

/// Durable storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite database file holding the collection slot.
    pub db_path: String,
    /// Name of the slot the collection is persisted under.
    pub slot_name: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: defaults::DEFAULT_DB_PATH.to_string(),
            slot_name: defaults::DEFAULT_SLOT_NAME.to_string(),
        }
    }
}
