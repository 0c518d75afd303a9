//! ClassificationEngine: applies the configured thresholds to a collection.

use serde::Serialize;

use ras_core::config::ClassificationConfig;
use ras_core::{DashboardMetrics, RiskItem};

use crate::deadlines;
use crate::metrics::{self, AreaBudget, StatusSlice};
use crate::quadrants::QuadrantBuckets;

/// Everything the summary view renders, computed in one pass over the collection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView<'a> {
    pub metrics: DashboardMetrics,
    pub status_distribution: Vec<StatusSlice>,
    pub budget_by_area: Vec<AreaBudget>,
    pub upcoming_deadlines: Vec<&'a RiskItem>,
}

/// Classification with a quick-win cost threshold and an upcoming-deadline limit.
#[derive(Debug, Clone)]
pub struct ClassificationEngine {
    quick_win_cost_threshold: f64,
    upcoming_deadline_limit: usize,
}

impl ClassificationEngine {
    /// Engine with the default threshold (5000) and limit (5).
    pub fn new() -> Self {
        Self::from_config(&ClassificationConfig::default())
    }

    pub fn from_config(config: &ClassificationConfig) -> Self {
        Self {
            quick_win_cost_threshold: config.quick_win_cost_threshold,
            upcoming_deadline_limit: config.upcoming_deadline_limit,
        }
    }

    pub fn quick_win_cost_threshold(&self) -> f64 {
        self.quick_win_cost_threshold
    }

    pub fn buckets<'a>(&self, items: &'a [RiskItem]) -> QuadrantBuckets<'a> {
        QuadrantBuckets::partition(items, self.quick_win_cost_threshold)
    }

    pub fn metrics(&self, items: &[RiskItem]) -> DashboardMetrics {
        metrics::dashboard_metrics(items)
    }

    pub fn upcoming_deadlines<'a>(&self, items: &'a [RiskItem]) -> Vec<&'a RiskItem> {
        deadlines::upcoming_deadlines(items, self.upcoming_deadline_limit)
    }

    pub fn dashboard<'a>(&self, items: &'a [RiskItem]) -> DashboardView<'a> {
        DashboardView {
            metrics: self.metrics(items),
            status_distribution: metrics::status_distribution(items),
            budget_by_area: metrics::budget_by_area(items),
            upcoming_deadlines: self.upcoming_deadlines(items),
        }
    }
}

impl Default for ClassificationEngine {
    fn default() -> Self {
        Self::new()
    }
}
