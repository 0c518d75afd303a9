use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::priority::Priority;
use super::status::Status;
use super::taxonomy::{Area, CostRange, LegalRisk, Urgency};

/// One trackable remediation task in the register.
///
/// Serialized with camelCase field names, enums as their literal strings and
/// the deadline as an ISO-8601 date. `dependencies` is omitted when absent.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RiskItem {
    /// Opaque, stable identifier. Never reassigned.
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    pub area: Area,
    /// Estimated cost in currency units.
    pub cost: f64,
    pub cost_range: CostRange,
    pub deadline: NaiveDate,
    /// Responsible party.
    pub owner: String,
    /// Ids of items this one depends on. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub dependencies: Option<Vec<String>>,
    /// Free-form KPI description.
    pub impact: String,
    pub legal_risk: LegalRisk,
    pub urgency: Urgency,
}

impl RiskItem {
    /// Field-for-field comparison.
    ///
    /// This is distinct from `PartialEq`, which only compares ids.
    pub fn content_eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.title == other.title
            && self.description == other.description
            && self.priority == other.priority
            && self.status == other.status
            && self.area == other.area
            && self.cost.to_bits() == other.cost.to_bits()
            && self.cost_range == other.cost_range
            && self.deadline == other.deadline
            && self.owner == other.owner
            && self.dependencies == other.dependencies
            && self.impact == other.impact
            && self.legal_risk == other.legal_risk
            && self.urgency == other.urgency
    }

    /// Dependency ids, empty when none are recorded.
    pub fn dependency_ids(&self) -> &[String] {
        self.dependencies.as_deref().unwrap_or(&[])
    }

    /// Copy of this item with `status` replaced.
    pub fn with_status(&self, status: Status) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

/// Identity equality: two items are the same logical item when their ids match.
impl PartialEq for RiskItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Field-for-field comparison of two ordered collections.
pub fn collections_content_eq(a: &[RiskItem], b: &[RiskItem]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.content_eq(y))
}
