use std::fs;

use super::*;
use formpilot_protocols::form::FieldDescriptor;

fn store_with(files: &[(&str, &str)]) -> (tempfile::TempDir, FormStore) {
    let dir = tempfile::tempdir().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    let store = FormStore::new(dir.path());
    (dir, store)
}

const INTAKE: &str = r#"{
    "description": "Patient intake",
    "form_fields": [
        { "field_type": "form_input", "label": "Name", "x": 10, "y": 20 }
    ]
}"#;

#[test]
fn test_load_parses_definition() {
    let (_dir, store) = store_with(&[("intake.json", INTAKE)]);
    let definition = store.load("intake").unwrap();

    assert_eq!(definition.description, "Patient intake");
    assert_eq!(definition.form_fields.len(), 1);
    assert!(matches!(
        definition.form_fields[0],
        FieldDescriptor::FormInput { .. }
    ));
}

#[test]
fn test_load_missing_form_is_not_found() {
    let (_dir, store) = store_with(&[]);
    let err = store.load("nope").unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
    assert_eq!(err.to_string(), "Form not found: nope");
}

#[test]
fn test_load_rejects_path_traversal() {
    let (_dir, store) = store_with(&[("intake.json", INTAKE)]);
    assert!(matches!(
        store.load("../intake").unwrap_err(),
        StoreError::NotFound(_)
    ));
    assert!(matches!(
        store.load("a/b").unwrap_err(),
        StoreError::NotFound(_)
    ));
}

#[test]
fn test_load_malformed_json_is_decode_error() {
    let (_dir, store) = store_with(&[("broken.json", "{ not json")]);
    let err = store.load("broken").unwrap_err();
    assert!(matches!(err, StoreError::Decode { .. }));
    assert!(err.to_string().contains("broken"));
}

#[test]
fn test_list_is_sorted_and_json_only() {
    let (_dir, store) = store_with(&[
        ("zeta.json", "{}"),
        ("alpha.json", "{}"),
        ("notes.txt", "ignore me"),
    ]);
    assert_eq!(store.list().unwrap(), vec!["alpha", "zeta"]);
}

#[test]
fn test_exists() {
    let (_dir, store) = store_with(&[("intake.json", INTAKE)]);
    assert!(store.exists("intake"));
    assert!(!store.exists("other"));
    assert!(!store.exists("../intake"));
}
