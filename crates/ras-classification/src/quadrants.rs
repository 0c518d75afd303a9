//! Triage buckets over urgency and cost.
//!
//! Priority investments and quick wins share the near-term urgency subset and
//! split it on complementary cost predicates, so no item is in both.

use serde::Serialize;

use ras_core::{RiskItem, Urgency};

/// A named triage bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Quadrant {
    /// Near-term and costly: needs a budget decision now.
    PriorityInvestment,
    /// Near-term and cheap: do it.
    QuickWin,
    /// Mid or long term, any cost: plan it.
    Strategic,
}

impl Quadrant {
    pub const ALL: [Quadrant; 3] = [Self::PriorityInvestment, Self::QuickWin, Self::Strategic];

    pub fn label(self) -> &'static str {
        match self {
            Self::PriorityInvestment => "Priority investments",
            Self::QuickWin => "Quick wins",
            Self::Strategic => "Strategic planning",
        }
    }

    /// Whether `item` satisfies this bucket's predicate.
    pub fn contains(self, item: &RiskItem, cost_threshold: f64) -> bool {
        match self {
            Self::PriorityInvestment => is_priority_investment(item, cost_threshold),
            Self::QuickWin => is_quick_win(item, cost_threshold),
            Self::Strategic => is_strategic(item),
        }
    }
}

/// Immediate or short term, costing more than the threshold.
pub fn is_priority_investment(item: &RiskItem, cost_threshold: f64) -> bool {
    item.urgency.is_near_term() && item.cost > cost_threshold
}

/// Immediate or short term, costing at most the threshold.
pub fn is_quick_win(item: &RiskItem, cost_threshold: f64) -> bool {
    item.urgency.is_near_term() && item.cost <= cost_threshold
}

/// Mid or long term, regardless of cost.
pub fn is_strategic(item: &RiskItem) -> bool {
    matches!(item.urgency, Urgency::MidTerm | Urgency::LongTerm)
}

/// The three buckets of a collection, each in collection order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuadrantBuckets<'a> {
    pub priority_investments: Vec<&'a RiskItem>,
    pub quick_wins: Vec<&'a RiskItem>,
    pub strategic: Vec<&'a RiskItem>,
}

impl<'a> QuadrantBuckets<'a> {
    /// Evaluate every bucket predicate against every item.
    pub fn partition(items: &'a [RiskItem], cost_threshold: f64) -> Self {
        let select = |quadrant: Quadrant| {
            items
                .iter()
                .filter(|item| quadrant.contains(item, cost_threshold))
                .collect::<Vec<_>>()
        };
        Self {
            priority_investments: select(Quadrant::PriorityInvestment),
            quick_wins: select(Quadrant::QuickWin),
            strategic: select(Quadrant::Strategic),
        }
    }

    pub fn bucket(&self, quadrant: Quadrant) -> &[&'a RiskItem] {
        match quadrant {
            Quadrant::PriorityInvestment => &self.priority_investments,
            Quadrant::QuickWin => &self.quick_wins,
            Quadrant::Strategic => &self.strategic,
        }
    }
}
