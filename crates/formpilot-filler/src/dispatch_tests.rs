use super::*;
use formpilot_input::ScriptedDriver;
use serde_json::json;

#[test]
fn test_missing_field_type_is_rejected() {
    let mut driver = ScriptedDriver::new();
    let err = dispatch_value(&mut driver, &json!({ "value": "x" })).unwrap_err();
    assert!(matches!(err, FillError::MissingFieldType));
    assert_eq!(err.to_string(), "Field type is required");
}

#[test]
fn test_unknown_field_type_is_rejected() {
    let mut driver = ScriptedDriver::new();
    let err =
        dispatch_value(&mut driver, &json!({ "field_type": "radio", "value": "x" })).unwrap_err();
    assert!(matches!(err, FillError::UnknownFieldType(_)));
    assert_eq!(err.to_string(), "Unknown field type: radio");
}

#[test]
fn test_form_input_requires_value() {
    let mut driver = ScriptedDriver::new();
    let err = dispatch_value(
        &mut driver,
        &json!({ "field_type": "form_input", "x": 1, "y": 2 }),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "value is required for form_input fields");
}

#[test]
fn test_form_input_defaults_missing_coordinates_to_origin() {
    let mut driver = ScriptedDriver::new();
    let report = dispatch_value(
        &mut driver,
        &json!({ "field_type": "form_input", "value": "hi" }),
    )
    .unwrap();
    assert!(report.success);
    assert_eq!(driver.clicks(), vec![Point::new(0, 0)]);
}

#[test]
fn test_searchable_select_requires_coordinates() {
    let mut driver = ScriptedDriver::new();
    let err = dispatch_value(
        &mut driver,
        &json!({ "field_type": "searchable_select", "value": "x" }),
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "coordinates is required for searchable_select fields"
    );
}

#[test]
fn test_searchable_select_dispatches() {
    let mut driver = ScriptedDriver::new();
    let report = dispatch_value(
        &mut driver,
        &json!({
            "field_type": "searchable_select",
            "value": "Springfield",
            "coordinates": {
                "dropdown": { "x": 1, "y": 1 },
                "input": { "x": 2, "y": 2 },
                "result": { "x": 3, "y": 3 }
            }
        }),
    )
    .unwrap();
    assert!(report.success);
    assert_eq!(driver.clicks().len(), 3);
    assert_eq!(driver.hotkeys().len(), 1);
}

#[test]
fn test_checkbox_group_requires_options_and_value() {
    let mut driver = ScriptedDriver::new();

    let err = dispatch_value(
        &mut driver,
        &json!({ "field_type": "checkbox_group", "value": ["A"] }),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "options is required for checkbox_group fields");

    let err = dispatch_value(
        &mut driver,
        &json!({
            "field_type": "checkbox_group",
            "options": [{ "option_label": "A", "x": 1, "y": 1 }]
        }),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "value is required for checkbox_group fields");
}

#[test]
fn test_checkbox_group_promotes_bare_string_value() {
    let mut driver = ScriptedDriver::new();
    let report = dispatch_value(
        &mut driver,
        &json!({
            "field_type": "checkbox_group",
            "options": [{ "option_label": "A", "x": 7, "y": 8 }],
            "value": "A"
        }),
    )
    .unwrap();
    assert!(report.success);
    assert_eq!(driver.clicks(), vec![Point::new(7, 8)]);
}

#[test]
fn test_process_field_turns_errors_into_failure_reports() {
    let mut driver = ScriptedDriver::new();
    let report = process_field(&mut driver, &json!({ "value": "x" }));
    assert!(!report.success);
    assert_eq!(report.error.as_deref(), Some("Field type is required"));
}

#[test]
fn test_dispatch_field_typed_form_input() {
    let mut driver = ScriptedDriver::new();
    let field = FieldDescriptor::FormInput {
        label: "Name".to_string(),
        description: String::new(),
        x: 50,
        y: 60,
    };
    let report = dispatch_field(&mut driver, &field, &FieldValue::from("Ada")).unwrap();
    assert!(report.success);
    assert_eq!(driver.clicks(), vec![Point::new(50, 60)]);
    assert_eq!(driver.keystrokes(), 3);
}

#[test]
fn test_dispatch_field_rejects_list_value_for_text_input() {
    let mut driver = ScriptedDriver::new();
    let field = FieldDescriptor::FormInput {
        label: "Name".to_string(),
        description: String::new(),
        x: 0,
        y: 0,
    };
    let value = FieldValue::Options(vec!["a".to_string()]);
    let err = dispatch_field(&mut driver, &field, &value).unwrap_err();
    assert!(matches!(err, FillError::MissingRequiredInput("value", _)));
}

#[test]
fn test_dispatch_field_checkbox_accepts_bare_string() {
    let mut driver = ScriptedDriver::new();
    let field = FieldDescriptor::CheckboxGroup {
        label: "Symptoms".to_string(),
        description: String::new(),
        options: vec![CheckboxOption {
            option_label: "Fever".to_string(),
            x: 4,
            y: 5,
        }],
    };
    let report = dispatch_field(&mut driver, &field, &FieldValue::from("Fever")).unwrap();
    assert!(report.success);
    assert_eq!(driver.clicks(), vec![Point::new(4, 5)]);
}
