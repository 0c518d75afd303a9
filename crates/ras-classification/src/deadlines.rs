//! Deadline ordering.

use ras_core::RiskItem;

/// References to `items` sorted ascending by deadline. Ties keep collection order.
pub fn by_deadline(items: &[RiskItem]) -> Vec<&RiskItem> {
    let mut sorted: Vec<&RiskItem> = items.iter().collect();
    // sort_by_key is stable.
    sorted.sort_by_key(|item| item.deadline);
    sorted
}

/// The first `limit` open items by deadline.
pub fn upcoming_deadlines(items: &[RiskItem], limit: usize) -> Vec<&RiskItem> {
    let mut open: Vec<&RiskItem> = items
        .iter()
        .filter(|item| !item.status.is_completed())
        .collect();
    open.sort_by_key(|item| item.deadline);
    open.truncate(limit);
    open
}
