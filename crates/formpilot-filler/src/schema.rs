//! JSON Schema and empty-template generation from form definitions.

use serde_json::{json, Map, Value};

use formpilot_protocols::form::{FieldDescriptor, FormDefinition};

const SCHEMA_DIALECT: &str = "https://json-schema.org/draft/2020-12/schema";

/// Derive a JSON Schema describing the data a form needs, coordinates
/// stripped.
///
/// Text inputs and searchable selects map to strings; checkbox groups map
/// to arrays of the declared option labels. Fields without a label are
/// skipped. With `require_all`, every labelled field lands in `required`.
pub fn generate_schema(definition: &FormDefinition, require_all: bool) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for field in &definition.form_fields {
        let label = field.label();
        if label.is_empty() {
            continue;
        }

        let property = match field {
            FieldDescriptor::FormInput { description, .. }
            | FieldDescriptor::SearchableSelect { description, .. } => json!({
                "type": "string",
                "description": description,
            }),
            FieldDescriptor::CheckboxGroup {
                description,
                options,
                ..
            } => {
                let labels: Vec<&str> = options
                    .iter()
                    .map(|o| o.option_label.as_str())
                    .filter(|l| !l.is_empty())
                    .collect();
                json!({
                    "type": "array",
                    "description": description,
                    "items": { "type": "string", "enum": labels },
                    "uniqueItems": true,
                })
            }
        };

        properties.insert(label.to_string(), property);
        if require_all {
            required.push(Value::String(label.to_string()));
        }
    }

    let title = if definition.description.is_empty() {
        "Form Data"
    } else {
        &definition.description
    };

    json!({
        "$schema": SCHEMA_DIALECT,
        "type": "object",
        "title": title,
        "properties": properties,
        "required": required,
    })
}

/// A fillable template for a form: every labelled field with its empty
/// default, `""` for text-like fields and `[]` for checkbox groups.
pub fn empty_form_data(definition: &FormDefinition) -> Value {
    let mut data = Map::new();

    for field in &definition.form_fields {
        let label = field.label();
        if label.is_empty() {
            continue;
        }

        let default = match field {
            FieldDescriptor::FormInput { .. } | FieldDescriptor::SearchableSelect { .. } => {
                Value::String(String::new())
            }
            FieldDescriptor::CheckboxGroup { .. } => Value::Array(Vec::new()),
        };
        data.insert(label.to_string(), default);
    }

    Value::Object(data)
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
