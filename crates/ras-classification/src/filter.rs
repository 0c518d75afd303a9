use serde::{Deserialize, Serialize};

use ras_core::{Area, Priority, RiskItem, Status};

/// Board view selectors. Unset selectors match everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardFilter {
    pub priority: Option<Priority>,
    pub area: Option<Area>,
    pub status: Option<Status>,
}

impl BoardFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_area(mut self, area: Area) -> Self {
        self.area = Some(area);
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_unrestricted(&self) -> bool {
        self.priority.is_none() && self.area.is_none() && self.status.is_none()
    }

    pub fn matches(&self, item: &RiskItem) -> bool {
        self.priority.map_or(true, |p| item.priority == p)
            && self.area.map_or(true, |a| item.area == a)
            && self.status.map_or(true, |s| item.status == s)
    }

    /// Matching items, in collection order.
    pub fn apply<'a>(&self, items: &'a [RiskItem]) -> Vec<&'a RiskItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}
