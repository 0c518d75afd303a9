//! Test fixture loader and item builder for the risk register workspace.
//!
//! Golden datasets live next to this crate; [`ItemBuilder`] produces valid
//! items with overridable fields for tests that need one-off shapes.

use std::path::PathBuf;

use chrono::NaiveDate;
use ras_core::{Area, CostRange, LegalRisk, Priority, RiskItem, Status, Urgency};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up until test-fixtures is a child.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file verbatim.
pub fn load_fixture_text(relative_path: &str) -> String {
    let path = fixture_path(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixture_path(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// A golden dataset: items plus the expected derived values.
#[derive(Debug, Deserialize)]
pub struct Golden<E> {
    pub description: String,
    pub items: Vec<RiskItem>,
    pub expected: E,
}

/// Expected values of `golden/dashboard/register_sample.json`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardExpectation {
    pub metrics: ras_core::DashboardMetrics,
    pub status_counts: StatusCounts,
    pub budget_by_area: Vec<(Area, f64)>,
    pub priority_investments: Vec<String>,
    pub quick_wins: Vec<String>,
    pub strategic: Vec<String>,
    pub upcoming_deadlines: Vec<String>,
    pub priority_resolution: PriorityResolutionExpectation,
    pub planning_order: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusCounts {
    pub completed: usize,
    pub in_progress: usize,
    pub not_started: usize,
}

#[derive(Debug, Deserialize)]
pub struct PriorityResolutionExpectation {
    pub ids: Vec<String>,
    pub total: f64,
}

/// Expected point of `golden/matrix/index_layout.json`.
#[derive(Debug, Deserialize)]
pub struct PointExpectation {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub size: u32,
    pub color: String,
}

/// The eight-item register sample.
pub fn register_sample() -> Golden<DashboardExpectation> {
    load_fixture("golden/dashboard/register_sample.json")
}

/// The index-seeded matrix layout sample.
pub fn matrix_layout() -> Golden<Vec<PointExpectation>> {
    load_fixture("golden/matrix/index_layout.json")
}

/// Parse an ISO date, panicking on malformed test input.
pub fn date(iso: &str) -> NaiveDate {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .unwrap_or_else(|e| panic!("bad fixture date {iso}: {e}"))
}

/// Start building a valid item with the given id.
pub fn item(id: &str) -> ItemBuilder {
    ItemBuilder::new(id)
}

/// Builder producing valid items with sensible defaults.
#[derive(Debug, Clone)]
pub struct ItemBuilder {
    item: RiskItem,
}

impl ItemBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            item: RiskItem {
                id: id.to_string(),
                title: format!("Item {id}"),
                description: format!("Description of {id}"),
                priority: Priority::Moderate,
                status: Status::NotStarted,
                area: Area::Structural,
                cost: 1_000.0,
                cost_range: CostRange::Low,
                deadline: date("2025-06-30"),
                owner: "Administrator".to_string(),
                dependencies: None,
                impact: format!("Impact of {id}"),
                legal_risk: LegalRisk::Civil,
                urgency: Urgency::MidTerm,
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.item.title = title.to_string();
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.item.priority = priority;
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.item.status = status;
        self
    }

    pub fn area(mut self, area: Area) -> Self {
        self.item.area = area;
        self
    }

    pub fn cost(mut self, cost: f64) -> Self {
        self.item.cost = cost;
        self
    }

    pub fn deadline(mut self, iso: &str) -> Self {
        self.item.deadline = date(iso);
        self
    }

    pub fn owner(mut self, owner: &str) -> Self {
        self.item.owner = owner.to_string();
        self
    }

    pub fn urgency(mut self, urgency: Urgency) -> Self {
        self.item.urgency = urgency;
        self
    }

    pub fn legal_risk(mut self, legal_risk: LegalRisk) -> Self {
        self.item.legal_risk = legal_risk;
        self
    }

    pub fn dependencies(mut self, ids: &[&str]) -> Self {
        self.item.dependencies = Some(ids.iter().map(|id| id.to_string()).collect());
        self
    }

    pub fn build(self) -> RiskItem {
        self.item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn all_golden_files_exist() {
        let files = [
            "golden/dashboard/register_sample.json",
            "golden/matrix/index_layout.json",
            "collections/corrupt_payload.json",
        ];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn register_sample_parses() {
        let golden = register_sample();
        assert_eq!(golden.items.len(), 8);
        assert_eq!(golden.expected.metrics.total_count, 8);
    }

    #[test]
    fn matrix_layout_has_one_expectation_per_item() {
        let golden = matrix_layout();
        assert_eq!(golden.items.len(), golden.expected.len());
    }

    #[test]
    fn corrupt_payload_is_not_json() {
        let text = load_fixture_text("collections/corrupt_payload.json");
        assert!(serde_json::from_str::<serde_json::Value>(&text).is_err());
    }

    #[test]
    fn builder_defaults_are_valid() {
        let built = item("B1").cost(0.0).dependencies(&["B0"]).build();
        assert!(ras_core::validation::validate(&built).is_ok());
        assert_eq!(built.dependency_ids(), ["B0".to_string()]);
    }
}
