use serde::{Deserialize, Serialize};

use super::defaults;

/// Classification and dashboard configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationConfig {
    /// Urgent items costing more than this are priority investments; the rest are quick wins.
    pub quick_win_cost_threshold: f64,
    /// Length of the upcoming-deadlines list.
    pub upcoming_deadline_limit: usize,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            quick_win_cost_threshold: defaults::DEFAULT_QUICK_WIN_COST_THRESHOLD,
            upcoming_deadline_limit: defaults::DEFAULT_UPCOMING_DEADLINE_LIMIT,
        }
    }
}
