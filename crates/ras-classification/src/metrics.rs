//! Aggregate metrics for the summary view.

use serde::Serialize;

use ras_core::{Area, DashboardMetrics, Priority, RiskItem, Status};

/// Sum of estimated costs.
pub fn total_budget(items: &[RiskItem]) -> f64 {
    items.iter().map(|item| item.cost).sum()
}

/// Items at priority 1.
pub fn critical_count(items: &[RiskItem]) -> usize {
    items
        .iter()
        .filter(|item| item.priority == Priority::Critical)
        .count()
}

pub fn completed_count(items: &[RiskItem]) -> usize {
    count_with_status(items, Status::Completed)
}

pub fn count_with_status(items: &[RiskItem], status: Status) -> usize {
    items.iter().filter(|item| item.status == status).count()
}

/// Completed share as a rounded percentage. `None` for an empty collection.
pub fn compliance_score(items: &[RiskItem]) -> Option<u32> {
    if items.is_empty() {
        return None;
    }
    let ratio = completed_count(items) as f64 / items.len() as f64;
    Some((ratio * 100.0).round() as u32)
}

/// The four headline figures of a collection.
pub fn dashboard_metrics(items: &[RiskItem]) -> DashboardMetrics {
    DashboardMetrics {
        compliance_score: compliance_score(items),
        total_budget: total_budget(items),
        critical_count: critical_count(items),
        completed_count: completed_count(items),
        total_count: items.len(),
    }
}

/// One segment of the status breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSlice {
    pub status: Status,
    pub count: usize,
    pub color: &'static str,
}

/// Display order of the status breakdown.
pub const STATUS_ORDER: [Status; 3] = [Status::Completed, Status::InProgress, Status::NotStarted];

pub fn status_color(status: Status) -> &'static str {
    match status {
        Status::Completed => "#10B981",
        Status::InProgress => "#F59E0B",
        Status::NotStarted => "#EF4444",
    }
}

/// Item count per status: Completed, InProgress, NotStarted. Zero counts are kept.
pub fn status_distribution(items: &[RiskItem]) -> Vec<StatusSlice> {
    STATUS_ORDER
        .iter()
        .map(|&status| StatusSlice {
            status,
            count: count_with_status(items, status),
            color: status_color(status),
        })
        .collect()
}

/// Cost total of one area.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaBudget {
    pub area: Area,
    pub total: f64,
}

/// Cost per area, areas ordered by first occurrence in the collection.
/// Areas with no items are absent.
pub fn budget_by_area(items: &[RiskItem]) -> Vec<AreaBudget> {
    let mut budgets: Vec<AreaBudget> = Vec::new();
    for item in items {
        match budgets.iter_mut().find(|b| b.area == item.area) {
            Some(budget) => budget.total += item.cost,
            None => budgets.push(AreaBudget {
                area: item.area,
                total: item.cost,
            }),
        }
    }
    budgets
}
