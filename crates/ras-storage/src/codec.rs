//! JSON encoding of the whole collection for the durable slot.

use ras_core::errors::RasResult;
use ras_core::validation::validate_collection;
use ras_core::RiskItem;

/// Serialize the collection, preserving order.
pub fn encode(items: &[RiskItem]) -> RasResult<String> {
    Ok(serde_json::to_string(items)?)
}

/// Parse a payload and check every item and id uniqueness.
pub fn decode(payload: &str) -> RasResult<Vec<RiskItem>> {
    let items: Vec<RiskItem> = serde_json::from_str(payload)?;
    validate_collection(&items)?;
    Ok(items)
}
