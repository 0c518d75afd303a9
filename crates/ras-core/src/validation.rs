//! Shape validation for risk items.
//!
//! Typed items already satisfy closed-enum membership, so [`validate`] only
//! checks the numeric and textual constraints. [`validate_value`] is the
//! boundary check for untyped records and reports every offending field.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::errors::{FieldError, ValidationErrors};
use crate::item::{Area, CostRange, LegalRisk, Priority, RiskItem, Status, Urgency, WireEnum};

/// Wire format of `deadline`.
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d";

const REQUIRED_TEXT: &[&str] = &["id", "title", "description"];
const OPTIONAL_TEXT: &[&str] = &["owner", "impact"];

/// Validate a typed item: non-negative finite cost, non-empty id, title and description.
pub fn validate(item: &RiskItem) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();
    check_text(&mut errors, "id", &item.id);
    check_text(&mut errors, "title", &item.title);
    check_text(&mut errors, "description", &item.description);
    check_cost(&mut errors, item.cost);
    finish(Some(item.id.clone()), errors)
}

/// Validate an untyped record and convert it into a [`RiskItem`].
///
/// Every field is checked; the error lists all failures, not just the first.
pub fn validate_value(value: &Value) -> Result<RiskItem, ValidationErrors> {
    let Some(obj) = value.as_object() else {
        return Err(ValidationErrors {
            item_id: None,
            errors: vec![FieldError::new("$", "expected a JSON object")],
        });
    };
    let item_id = obj.get("id").and_then(Value::as_str).map(str::to_string);
    let mut errors = Vec::new();

    for field in REQUIRED_TEXT {
        if let Some(text) = string_field(&mut errors, obj, field) {
            check_text(&mut errors, field, text);
        }
    }
    for field in OPTIONAL_TEXT {
        string_field(&mut errors, obj, field);
    }

    enum_field::<Priority>(&mut errors, obj);
    enum_field::<Status>(&mut errors, obj);
    enum_field::<Area>(&mut errors, obj);
    enum_field::<CostRange>(&mut errors, obj);
    enum_field::<LegalRisk>(&mut errors, obj);
    enum_field::<Urgency>(&mut errors, obj);

    match obj.get("cost") {
        None => errors.push(FieldError::new("cost", "missing")),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(cost) => check_cost(&mut errors, cost),
            None => errors.push(FieldError::new("cost", "not representable as a number")),
        },
        Some(other) => errors.push(FieldError::new(
            "cost",
            format!("expected a number, got {}", kind_of(other)),
        )),
    }

    if let Some(raw) = string_field(&mut errors, obj, "deadline") {
        if NaiveDate::parse_from_str(raw, DEADLINE_FORMAT).is_err() {
            errors.push(FieldError::new(
                "deadline",
                format!("`{raw}` is not an ISO-8601 date (YYYY-MM-DD)"),
            ));
        }
    }

    match obj.get("dependencies") {
        None | Some(Value::Null) => {}
        Some(Value::Array(ids)) => {
            if ids.iter().any(|id| !id.is_string()) {
                errors.push(FieldError::new("dependencies", "every entry must be an item id string"));
            }
        }
        Some(other) => errors.push(FieldError::new(
            "dependencies",
            format!("expected an array of ids, got {}", kind_of(other)),
        )),
    }

    finish(item_id.clone(), errors)?;

    serde_json::from_value(value.clone()).map_err(|e| ValidationErrors {
        item_id,
        errors: vec![FieldError::new("$", e.to_string())],
    })
}

/// Validate every item and the uniqueness of ids across the collection.
pub fn validate_collection(items: &[RiskItem]) -> Result<(), ValidationErrors> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        validate(item)?;
        if !seen.insert(item.id.as_str()) {
            return Err(ValidationErrors {
                item_id: Some(item.id.clone()),
                errors: vec![FieldError::new("id", "duplicate id in collection")],
            });
        }
    }
    Ok(())
}

fn check_text(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, "must not be empty"));
    }
}

fn check_cost(errors: &mut Vec<FieldError>, cost: f64) {
    if !cost.is_finite() {
        errors.push(FieldError::new("cost", "must be a finite number"));
    } else if cost < 0.0 {
        errors.push(FieldError::new("cost", format!("must be >= 0, got {cost}")));
    }
}

fn string_field<'a>(
    errors: &mut Vec<FieldError>,
    obj: &'a Map<String, Value>,
    field: &str,
) -> Option<&'a str> {
    match obj.get(field) {
        None => {
            errors.push(FieldError::new(field, "missing"));
            None
        }
        Some(Value::String(s)) => Some(s.as_str()),
        Some(other) => {
            errors.push(FieldError::new(
                field,
                format!("expected a string, got {}", kind_of(other)),
            ));
            None
        }
    }
}

fn enum_field<T: WireEnum>(errors: &mut Vec<FieldError>, obj: &Map<String, Value>) {
    if let Some(raw) = string_field(errors, obj, T::FIELD) {
        if T::parse(raw).is_none() {
            errors.push(FieldError::new(
                T::FIELD,
                format!("unknown value `{raw}`, expected one of: {}", T::expected()),
            ));
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn finish(item_id: Option<String>, errors: Vec<FieldError>) -> Result<(), ValidationErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { item_id, errors })
    }
}
