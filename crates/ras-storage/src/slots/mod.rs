//! Durable slot backends.

mod memory;
mod sqlite;

pub use memory::MemorySlot;
pub use sqlite::SqliteSlot;
