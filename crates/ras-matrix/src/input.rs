use ras_core::{Priority, RiskItem, Urgency, WireEnum};
use serde_json::Value;

/// The slice of an item the matrix needs.
///
/// Urgency and priority are optional so loosely-typed records with values
/// outside the closed sets still plot, at the fallback position and tier.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotInput {
    pub id: String,
    pub title: String,
    pub urgency: Option<Urgency>,
    pub priority: Option<Priority>,
    pub cost: f64,
}

impl PlotInput {
    /// Read a raw JSON record leniently.
    ///
    /// Unknown or missing enum values become `None`; a missing or non-numeric
    /// cost becomes 0 and lands on the cost floor.
    pub fn from_value(value: &Value) -> Self {
        let text = |field: &str| {
            value
                .get(field)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        Self {
            id: text("id"),
            title: text("title"),
            urgency: value.get("urgency").and_then(Value::as_str).and_then(Urgency::parse),
            priority: value
                .get("priority")
                .and_then(Value::as_str)
                .and_then(Priority::parse),
            cost: value.get("cost").and_then(Value::as_f64).unwrap_or(0.0),
        }
    }
}

impl From<&RiskItem> for PlotInput {
    fn from(item: &RiskItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            urgency: Some(item.urgency),
            priority: Some(item.priority),
            cost: item.cost,
        }
    }
}
