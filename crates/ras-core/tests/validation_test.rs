use chrono::NaiveDate;
use proptest::prelude::*;
use ras_core::item::*;
use ras_core::validation::{validate, validate_collection, validate_value};
use serde_json::json;

fn make_item(id: &str, cost: f64) -> RiskItem {
    RiskItem {
        id: id.to_string(),
        title: "Fire door certification".to_string(),
        description: "Certificates missing for stairwell doors".to_string(),
        priority: Priority::Critical,
        status: Status::InProgress,
        area: Area::Regulatory,
        cost,
        cost_range: CostRange::Low,
        deadline: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
        owner: "Administrator".to_string(),
        dependencies: None,
        impact: "Fire safety compliance".to_string(),
        legal_risk: LegalRisk::Criminal,
        urgency: Urgency::Immediate,
    }
}

fn raw_item() -> serde_json::Value {
    json!({
        "id": "R9",
        "title": "Lift inspection",
        "description": "Biennial lift inspection overdue",
        "priority": "1",
        "status": "NotStarted",
        "area": "Systems",
        "cost": 800,
        "costRange": "low",
        "deadline": "2025-02-01",
        "owner": "Lift Co.",
        "impact": "Keeps lift in service",
        "legalRisk": "Administrative",
        "urgency": "Immediate"
    })
}

#[test]
fn valid_item_passes() {
    assert!(validate(&make_item("R1", 0.0)).is_ok());
}

#[test]
fn negative_cost_is_rejected() {
    let err = validate(&make_item("R1", -1.0)).unwrap_err();
    assert!(err.has_field("cost"));
    assert_eq!(err.item_id.as_deref(), Some("R1"));
}

#[test]
fn non_finite_cost_is_rejected() {
    assert!(validate(&make_item("R1", f64::NAN)).is_err());
    assert!(validate(&make_item("R1", f64::INFINITY)).is_err());
}

#[test]
fn empty_title_is_rejected() {
    let mut item = make_item("R1", 10.0);
    item.title = "   ".to_string();
    assert!(validate(&item).unwrap_err().has_field("title"));
}

#[test]
fn raw_record_converts_to_item() {
    let item = validate_value(&raw_item()).unwrap();
    assert_eq!(item.id, "R9");
    assert_eq!(item.priority, Priority::Critical);
    assert_eq!(item.deadline, NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
    assert!(item.dependencies.is_none());
}

#[test]
fn unknown_enum_values_are_reported_per_field() {
    let mut raw = raw_item();
    raw["urgency"] = json!("Whenever");
    raw["priority"] = json!("4");
    raw["legalRisk"] = json!("Moral");
    let err = validate_value(&raw).unwrap_err();
    assert!(err.has_field("urgency"));
    assert!(err.has_field("priority"));
    assert!(err.has_field("legalRisk"));
    assert_eq!(err.errors.len(), 3);
    assert_eq!(err.item_id.as_deref(), Some("R9"));
}

#[test]
fn all_failures_are_collected() {
    let mut raw = raw_item();
    raw["cost"] = json!(-50);
    raw["deadline"] = json!("next week");
    raw["status"] = json!("Done");
    raw.as_object_mut().unwrap().remove("owner");
    let err = validate_value(&raw).unwrap_err();
    for field in ["cost", "deadline", "status", "owner"] {
        assert!(err.has_field(field), "missing error for {field}: {err}");
    }
}

#[test]
fn malformed_dependencies_are_rejected() {
    let mut raw = raw_item();
    raw["dependencies"] = json!(["R1", 2]);
    assert!(validate_value(&raw).unwrap_err().has_field("dependencies"));
}

#[test]
fn non_object_is_rejected() {
    let err = validate_value(&json!([1, 2, 3])).unwrap_err();
    assert!(err.has_field("$"));
}

#[test]
fn duplicate_ids_fail_collection_validation() {
    let items = vec![make_item("R1", 1.0), make_item("R2", 1.0), make_item("R1", 2.0)];
    let err = validate_collection(&items).unwrap_err();
    assert!(err.has_field("id"));
    assert!(validate_collection(&items[..2]).is_ok());
    assert!(validate_collection(&[]).is_ok());
}

proptest! {
    #[test]
    fn validate_accepts_exactly_non_negative_costs(cost in -1.0e7f64..1.0e7) {
        let result = validate(&make_item("P", cost));
        prop_assert_eq!(result.is_ok(), cost >= 0.0);
    }
}
