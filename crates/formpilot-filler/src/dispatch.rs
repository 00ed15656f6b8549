//! Field dispatch: routing a field payload to its type handler.
//!
//! Ad hoc fill requests carry loosely-shaped JSON objects with the value
//! inline next to the geometry, so dispatch validates them by hand instead
//! of deserializing a rigid struct. Stored forms go through the typed
//! [`dispatch_field`] path instead.

use serde_json::Value;

use formpilot_input::InputDriver;
use formpilot_protocols::error::FillError;
use formpilot_protocols::form::{
    CheckboxOption, FieldDescriptor, FieldValue, Point, SelectCoordinates,
};
use formpilot_protocols::report::FieldReport;

use crate::handlers::{handle_checkbox_group, handle_form_input, handle_searchable_select};

/// Dispatch a typed field descriptor with its supplied value.
pub fn dispatch_field(
    driver: &mut dyn InputDriver,
    field: &FieldDescriptor,
    value: &FieldValue,
) -> Result<FieldReport, FillError> {
    match field {
        FieldDescriptor::FormInput { x, y, .. } => {
            let text = value
                .as_text()
                .ok_or(FillError::MissingRequiredInput("value", "form_input"))?;
            handle_form_input(driver, Point::new(*x, *y), text)
        }
        FieldDescriptor::SearchableSelect { coordinates, .. } => {
            let text = value
                .as_text()
                .ok_or(FillError::MissingRequiredInput("value", "searchable_select"))?;
            handle_searchable_select(driver, coordinates, text)
        }
        FieldDescriptor::CheckboxGroup { options, .. } => {
            handle_checkbox_group(driver, options, &value.to_options())
        }
    }
}

/// Dispatch one ad hoc field payload, reporting errors as a failed
/// [`FieldReport`] instead of aborting the batch.
pub fn process_field(driver: &mut dyn InputDriver, field: &Value) -> FieldReport {
    match dispatch_value(driver, field) {
        Ok(report) => report,
        Err(err) => FieldReport::failure(err.to_string()),
    }
}

/// Validate an ad hoc field payload and run its handler.
pub fn dispatch_value(
    driver: &mut dyn InputDriver,
    field: &Value,
) -> Result<FieldReport, FillError> {
    let field_type = field
        .get("field_type")
        .and_then(Value::as_str)
        .ok_or(FillError::MissingFieldType)?;

    match field_type {
        "form_input" => {
            let value = require_text(field, "value", "form_input")?;
            let position = Point::new(coord(field, "x"), coord(field, "y"));
            handle_form_input(driver, position, value)
        }
        "searchable_select" => {
            let value = require_text(field, "value", "searchable_select")?;
            let coordinates: SelectCoordinates = field
                .get("coordinates")
                .cloned()
                .and_then(|v| serde_json::from_value(v).ok())
                .ok_or(FillError::MissingRequiredInput(
                    "coordinates",
                    "searchable_select",
                ))?;
            handle_searchable_select(driver, &coordinates, value)
        }
        "checkbox_group" => {
            let options: Vec<CheckboxOption> = field
                .get("options")
                .cloned()
                .and_then(|v| serde_json::from_value(v).ok())
                .ok_or(FillError::MissingRequiredInput("options", "checkbox_group"))?;
            let values = field
                .get("value")
                .and_then(as_string_list)
                .ok_or(FillError::MissingRequiredInput("value", "checkbox_group"))?;
            handle_checkbox_group(driver, &options, &values)
        }
        other => Err(FillError::UnknownFieldType(other.to_string())),
    }
}

fn require_text<'a>(
    field: &'a Value,
    key: &'static str,
    field_type: &'static str,
) -> Result<&'a str, FillError> {
    field
        .get(key)
        .and_then(Value::as_str)
        .ok_or(FillError::MissingRequiredInput(key, field_type))
}

/// Coordinates default to 0 when absent, matching the lenient wire shape.
fn coord(field: &Value, key: &str) -> i32 {
    field.get(key).and_then(Value::as_i64).unwrap_or(0) as i32
}

/// A bare string is promoted to a one-element list.
fn as_string_list(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::String(s) => Some(vec![s.clone()]),
        Value::Array(items) => items
            .iter()
            .map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => None,
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
