//! Row selection per report kind.

use serde::Serialize;
use tracing::debug;

use ras_classification::deadlines::by_deadline;
use ras_core::{Priority, RiskItem};
use ras_observability::report_span;

use crate::kind::ReportKind;
use crate::rows::{PlanningRow, PriorityResolution, PriorityResolutionRow, SummaryRow};

/// Rows for one report, shaped by its kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum ReportSelection {
    PriorityResolution(PriorityResolution),
    Planning(Vec<PlanningRow>),
    Summary(Vec<SummaryRow>),
}

impl ReportSelection {
    pub fn row_count(&self) -> usize {
        match self {
            Self::PriorityResolution(resolution) => resolution.rows.len(),
            Self::Planning(rows) => rows.len(),
            Self::Summary(rows) => rows.len(),
        }
    }
}

/// Select the rows `kind` needs from `items`.
pub fn select(kind: ReportKind, items: &[RiskItem]) -> ReportSelection {
    let _span = report_span!(kind, items.len()).entered();
    let selection = match kind {
        ReportKind::CouncilResolution => {
            ReportSelection::PriorityResolution(priority_resolution(items))
        }
        ReportKind::MaintenancePlan => ReportSelection::Planning(planning_rows(items)),
        ReportKind::InsuranceAudit | ReportKind::HandoverChecklist => {
            ReportSelection::Summary(summary_rows(items))
        }
    };
    debug!(kind = ?kind, rows = selection.row_count(), "report rows selected");
    selection
}

/// Priority 1 and 2 items in collection order, with the sum of their costs.
pub fn priority_resolution(items: &[RiskItem]) -> PriorityResolution {
    let rows: Vec<PriorityResolutionRow> = items
        .iter()
        .filter(|item| matches!(item.priority, Priority::Critical | Priority::High))
        .map(PriorityResolutionRow::from)
        .collect();
    let total: f64 = rows.iter().map(|row| row.cost).sum();
    PriorityResolution { rows, total }
}

/// Every item by ascending deadline. Ties keep collection order.
pub fn planning_rows(items: &[RiskItem]) -> Vec<PlanningRow> {
    by_deadline(items).into_iter().map(PlanningRow::from).collect()
}

/// Every item in collection order.
pub fn summary_rows(items: &[RiskItem]) -> Vec<SummaryRow> {
    items.iter().map(SummaryRow::from).collect()
}
