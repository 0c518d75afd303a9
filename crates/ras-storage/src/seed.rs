//! Bundled sample collection used when no persisted collection is available.

use ras_core::errors::RasResult;
use ras_core::RiskItem;

use crate::codec;

const DEFAULT_COLLECTION: &str = include_str!("../seed/default_collection.json");

/// The default seed collection.
pub fn default_seed() -> RasResult<Vec<RiskItem>> {
    codec::decode(DEFAULT_COLLECTION)
}
