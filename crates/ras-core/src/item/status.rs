use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use super::base::RiskItem;
use super::wire::WireEnum;

/// Progress of a remediation item. Cycles with no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Status {
    NotStarted,
    InProgress,
    Completed,
}

impl Status {
    /// Successor in the fixed cycle NotStarted → InProgress → Completed → NotStarted.
    pub fn next(self) -> Self {
        match self {
            Self::NotStarted => Self::InProgress,
            Self::InProgress => Self::Completed,
            Self::Completed => Self::NotStarted,
        }
    }

    pub fn is_completed(self) -> bool {
        self == Self::Completed
    }
}

impl WireEnum for Status {
    const FIELD: &'static str = "status";
    const ALL: &'static [Self] = &[Self::NotStarted, Self::InProgress, Self::Completed];

    fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "NotStarted",
            Self::InProgress => "InProgress",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NotStarted => "Not started",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
        };
        f.write_str(label)
    }
}

/// Copy of `item` with its status moved one step along the cycle.
pub fn advance_status(item: &RiskItem) -> RiskItem {
    RiskItem {
        status: item.status.next(),
        ..item.clone()
    }
}
