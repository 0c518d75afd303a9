use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::HEALTHY_COMPLIANCE_SCORE;

/// Headline figures for the summary view. Derived from the collection on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    /// Percentage of completed items, rounded. `None` for an empty collection.
    pub compliance_score: Option<u32>,
    /// Sum of all estimated costs.
    pub total_budget: f64,
    /// Items at priority 1.
    pub critical_count: usize,
    pub completed_count: usize,
    /// Size of the collection the metrics were computed over.
    pub total_count: usize,
}

impl DashboardMetrics {
    /// True when there were no items to measure.
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    /// Compliance score above [`HEALTHY_COMPLIANCE_SCORE`]. An empty collection is not healthy.
    pub fn is_healthy(&self) -> bool {
        self.compliance_score.is_some_and(|score| score > HEALTHY_COMPLIANCE_SCORE)
    }
}
