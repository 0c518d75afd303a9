//! CollectionStore: the session's authoritative, ordered collection of risk items.
//!
//! Reads borrow the in-memory collection. The only mutation is a full-record
//! replace keyed by id, which is written through to the slot before it returns.

use std::path::Path;

use tracing::{debug, info, warn};

use ras_core::config::StorageConfig;
use ras_core::errors::RasResult;
use ras_core::traits::ICollectionSlot;
use ras_core::validation::{validate, validate_collection};
use ras_core::{advance_status, RiskItem};
use ras_observability::{load_span, upsert_span};

use crate::codec;
use crate::seed;
use crate::slots::SqliteSlot;

/// Where the collection came from at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Decoded from the slot.
    Persisted,
    /// Seed collection, because the slot could not supply one.
    Seed(FallbackReason),
}

/// Why loading fell back to the seed collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The slot has never been written.
    Missing,
    /// The slot backend failed to read.
    ReadFailed,
    /// The payload did not decode to a valid collection.
    Corrupt,
}

/// Result of an upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// The item was replaced and persisted; `version` is the new collection version.
    Replaced { version: u64 },
    /// No item has this id. The collection is unchanged and nothing was written.
    NotFound,
}

impl UpsertOutcome {
    pub fn is_replaced(self) -> bool {
        matches!(self, Self::Replaced { .. })
    }
}

/// Owns the collection and its durable slot.
pub struct CollectionStore<S: ICollectionSlot> {
    slot: S,
    items: Vec<RiskItem>,
    version: u64,
    source: LoadSource,
}

impl<S: ICollectionSlot> CollectionStore<S> {
    /// Load the collection from `slot`, falling back to `seed` when the slot
    /// is empty, unreadable, or holds an invalid payload.
    ///
    /// Slot problems are recovered, never returned. The only error is a seed
    /// that is itself invalid (bad item or duplicate ids).
    pub fn load(slot: S, seed: Vec<RiskItem>) -> RasResult<Self> {
        let _span = load_span!(slot.name()).entered();
        validate_collection(&seed)?;
        let (items, source) = match slot.read() {
            Ok(Some(payload)) => match codec::decode(&payload) {
                Ok(items) => (items, LoadSource::Persisted),
                Err(e) => {
                    warn!(slot = slot.name(), error = %e, "persisted collection is corrupt, using seed");
                    (seed, LoadSource::Seed(FallbackReason::Corrupt))
                }
            },
            Ok(None) => {
                debug!(slot = slot.name(), "no persisted collection, using seed");
                (seed, LoadSource::Seed(FallbackReason::Missing))
            }
            Err(e) => {
                warn!(slot = slot.name(), error = %e, "failed to read slot, using seed");
                (seed, LoadSource::Seed(FallbackReason::ReadFailed))
            }
        };
        info!(slot = slot.name(), items = items.len(), source = ?source, "collection loaded");
        Ok(Self {
            slot,
            items,
            version: 0,
            source,
        })
    }

    /// The collection, in order.
    pub fn items(&self) -> &[RiskItem] {
        &self.items
    }

    /// Owned copy of the collection.
    pub fn snapshot(&self) -> Vec<RiskItem> {
        self.items.clone()
    }

    pub fn get(&self, id: &str) -> Option<&RiskItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Incremented by every successful replacement. Starts at 0.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn source(&self) -> LoadSource {
        self.source
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Replace the item sharing `item.id`, keeping every other item and the order.
    ///
    /// The item is validated first. On a write failure the previous item is
    /// restored and the error returned, so memory and slot stay in step.
    pub fn upsert(&mut self, item: RiskItem) -> RasResult<UpsertOutcome> {
        let _span = upsert_span!(item.id).entered();
        validate(&item)?;

        let Some(position) = self.items.iter().position(|existing| existing.id == item.id) else {
            debug!(item_id = %item.id, "upsert for unknown id ignored");
            return Ok(UpsertOutcome::NotFound);
        };

        let previous = std::mem::replace(&mut self.items[position], item);
        if let Err(e) = self.persist() {
            warn!(item_id = %previous.id, error = %e, "write-through failed, change reverted");
            self.items[position] = previous;
            return Err(e);
        }

        self.version += 1;
        info!(item_id = %previous.id, version = self.version, "item replaced");
        Ok(UpsertOutcome::Replaced {
            version: self.version,
        })
    }

    /// Move the item's status one step along its cycle and persist it.
    pub fn cycle_status(&mut self, id: &str) -> RasResult<UpsertOutcome> {
        match self.get(id) {
            Some(item) => {
                let advanced = advance_status(item);
                self.upsert(advanced)
            }
            None => Ok(UpsertOutcome::NotFound),
        }
    }

    /// Serialize the whole collection and write it to the slot.
    pub fn persist(&self) -> RasResult<()> {
        let payload = codec::encode(&self.items)?;
        self.slot.write(&payload)
    }

    /// Give up the store, returning the collection.
    pub fn into_items(self) -> Vec<RiskItem> {
        self.items
    }
}

impl CollectionStore<SqliteSlot> {
    /// Open the configured SQLite slot and load from it, seeding with the bundled collection.
    pub fn open(config: &StorageConfig) -> RasResult<Self> {
        let slot = SqliteSlot::open(Path::new(&config.db_path), &config.slot_name)?;
        Self::load(slot, seed::default_seed()?)
    }
}
