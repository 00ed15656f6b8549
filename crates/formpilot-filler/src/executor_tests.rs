use std::collections::HashMap;

use super::*;
use formpilot_input::{ScriptedDriver, SimEvent};
use formpilot_protocols::form::{
    CheckboxOption, FieldDescriptor, FieldValue, Point, SelectCoordinates,
};
use serde_json::json;

fn text_field(label: &str, x: i32, y: i32) -> FieldDescriptor {
    FieldDescriptor::FormInput {
        label: label.to_string(),
        description: String::new(),
        x,
        y,
    }
}

#[test]
fn test_fill_fields_rejects_empty_batch() {
    let mut driver = ScriptedDriver::new();
    let err = fill_fields(&mut driver, &[], DELAY_BETWEEN_FIELDS).unwrap_err();
    assert!(matches!(err, FillError::NoFields));
}

#[test]
fn test_fill_fields_indexes_results() {
    let fields = vec![
        json!({ "field_type": "form_input", "value": "a", "x": 1, "y": 1 }),
        json!({ "field_type": "form_input", "value": "b", "x": 2, "y": 2 }),
    ];
    let mut driver = ScriptedDriver::new();
    let report = fill_fields(&mut driver, &fields, DELAY_BETWEEN_FIELDS).unwrap();

    assert!(report.success);
    assert_eq!(report.total_fields, 2);
    assert_eq!(report.results[0].field_index, Some(0));
    assert_eq!(report.results[1].field_index, Some(1));
}

#[test]
fn test_fill_fields_continues_after_a_bad_field() {
    let fields = vec![
        json!({ "value": "missing type" }),
        json!({ "field_type": "form_input", "value": "ok", "x": 1, "y": 1 }),
    ];
    let mut driver = ScriptedDriver::new();
    let report = fill_fields(&mut driver, &fields, DELAY_BETWEEN_FIELDS).unwrap();

    assert!(!report.success);
    assert!(!report.results[0].success);
    assert!(report.results[1].success);
    assert_eq!(driver.clicks(), vec![Point::new(1, 1)]);
}

#[test]
fn test_fill_fields_delay_runs_between_fields_not_after_last() {
    let fields = vec![
        json!({ "field_type": "form_input", "value": "a" }),
        json!({ "field_type": "form_input", "value": "b" }),
    ];
    let mut driver = ScriptedDriver::new();
    fill_fields(&mut driver, &fields, DELAY_BETWEEN_FIELDS).unwrap();

    let between: Vec<_> = driver
        .events
        .iter()
        .filter(|e| **e == SimEvent::Sleep(DELAY_BETWEEN_FIELDS))
        .collect();
    assert_eq!(between.len(), 1);
    assert_ne!(driver.events.last(), Some(&SimEvent::Sleep(DELAY_BETWEEN_FIELDS)));
}

#[test]
fn test_fill_form_switches_workspace_first() {
    let definition = FormDefinition {
        description: String::new(),
        form_fields: vec![text_field("Name", 10, 10)],
    };
    let mut data: HashMap<String, FieldValue> = HashMap::new();
    data.insert("Name".to_string(), FieldValue::from("Ada"));

    let mut driver = ScriptedDriver::new();
    let report = fill_form(&mut driver, &definition, &data, DELAY_BETWEEN_FIELDS).unwrap();

    assert!(report.success);
    assert_eq!(
        driver.events[0],
        SimEvent::Hotkey(vec![
            "win".to_string(),
            "ctrl".to_string(),
            "right".to_string()
        ])
    );
    assert_eq!(driver.events[1], SimEvent::Sleep(DELAY_AFTER_FORM_SWITCH));
}

#[test]
fn test_fill_form_reports_missing_values() {
    let definition = FormDefinition {
        description: String::new(),
        form_fields: vec![text_field("Name", 1, 1), text_field("City", 2, 2)],
    };
    let mut data: HashMap<String, FieldValue> = HashMap::new();
    data.insert("City".to_string(), FieldValue::from("Springfield"));

    let mut driver = ScriptedDriver::new();
    let report = fill_form(&mut driver, &definition, &data, DELAY_BETWEEN_FIELDS).unwrap();

    assert!(!report.success);
    assert_eq!(report.total_fields, 2);

    let missing = &report.results[0];
    assert!(!missing.success);
    assert_eq!(missing.label.as_deref(), Some("Name"));
    assert_eq!(
        missing.error.as_deref(),
        Some("No value provided for field 'Name'")
    );

    assert!(report.results[1].success);
    // The missing field was skipped without touching the driver.
    assert_eq!(driver.clicks(), vec![Point::new(2, 2)]);
}

#[test]
fn test_fill_form_walks_fields_in_declared_order() {
    let definition = FormDefinition {
        description: String::new(),
        form_fields: vec![
            text_field("B", 2, 2),
            text_field("A", 1, 1),
            FieldDescriptor::CheckboxGroup {
                label: "C".to_string(),
                description: String::new(),
                options: vec![CheckboxOption {
                    option_label: "On".to_string(),
                    x: 3,
                    y: 3,
                }],
            },
        ],
    };
    let mut data: HashMap<String, FieldValue> = HashMap::new();
    data.insert("A".to_string(), FieldValue::from("a"));
    data.insert("B".to_string(), FieldValue::from("b"));
    data.insert(
        "C".to_string(),
        FieldValue::Options(vec!["On".to_string()]),
    );

    let mut driver = ScriptedDriver::new();
    let report = fill_form(&mut driver, &definition, &data, DELAY_BETWEEN_FIELDS).unwrap();

    assert!(report.success);
    assert_eq!(
        driver.clicks(),
        vec![Point::new(2, 2), Point::new(1, 1), Point::new(3, 3)]
    );
    assert_eq!(report.results[0].label.as_deref(), Some("B"));
    assert_eq!(report.results[2].label.as_deref(), Some("C"));
}

#[test]
fn test_fill_form_empty_definition_is_vacuously_successful() {
    let definition = FormDefinition::default();
    let data = HashMap::new();

    let mut driver = ScriptedDriver::new();
    let report = fill_form(&mut driver, &definition, &data, DELAY_BETWEEN_FIELDS).unwrap();

    assert!(report.success);
    assert_eq!(report.total_fields, 0);
}

#[test]
fn test_fill_form_select_field_uses_supplied_value() {
    let definition = FormDefinition {
        description: String::new(),
        form_fields: vec![FieldDescriptor::SearchableSelect {
            label: "State".to_string(),
            description: String::new(),
            coordinates: SelectCoordinates {
                dropdown: Point::new(1, 1),
                input: Point::new(2, 2),
                result: Point::new(3, 3),
            },
        }],
    };
    let mut data: HashMap<String, FieldValue> = HashMap::new();
    data.insert("State".to_string(), FieldValue::from("OR"));

    let mut driver = ScriptedDriver::new();
    let report = fill_form(&mut driver, &definition, &data, DELAY_BETWEEN_FIELDS).unwrap();

    assert!(report.success);
    assert_eq!(report.results[0].search_value.as_deref(), Some("OR"));
    assert_eq!(driver.keystrokes(), 2);
}
