//! Row shapes handed to the document generator. Field order is column order.

use chrono::NaiveDate;
use serde::Serialize;

use ras_core::{Area, Priority, RiskItem, Status, Urgency};

/// One line of the council resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityResolutionRow {
    pub priority: Priority,
    pub title: String,
    pub owner: String,
    pub cost: f64,
}

impl From<&RiskItem> for PriorityResolutionRow {
    fn from(item: &RiskItem) -> Self {
        Self {
            priority: item.priority,
            title: item.title.clone(),
            owner: item.owner.clone(),
            cost: item.cost,
        }
    }
}

/// Priority 1 and 2 rows plus their combined estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityResolution {
    pub rows: Vec<PriorityResolutionRow>,
    pub total: f64,
}

/// One line of the maintenance plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningRow {
    pub deadline: NaiveDate,
    pub title: String,
    pub urgency: Urgency,
    pub cost: f64,
}

impl From<&RiskItem> for PlanningRow {
    fn from(item: &RiskItem) -> Self {
        Self {
            deadline: item.deadline,
            title: item.title.clone(),
            urgency: item.urgency,
            cost: item.cost,
        }
    }
}

/// One line of the audit and handover summaries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRow {
    pub title: String,
    pub area: Area,
    pub status: Status,
}

impl From<&RiskItem> for SummaryRow {
    fn from(item: &RiskItem) -> Self {
        Self {
            title: item.title.clone(),
            area: item.area,
            status: item.status,
        }
    }
}
