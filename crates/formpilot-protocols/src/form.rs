//! Form model: field descriptors, form definitions, and fill values.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind tag for a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    FormInput,
    SearchableSelect,
    CheckboxGroup,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::FormInput => "form_input",
            FieldKind::SearchableSelect => "searchable_select",
            FieldKind::CheckboxGroup => "checkbox_group",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An absolute on-screen pixel position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The three coordinate pairs needed to drive a searchable select.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectCoordinates {
    /// The bar to click to open the select.
    pub dropdown: Point,
    /// The search input field inside the opened select.
    pub input: Point,
    /// Where the first search result renders.
    pub result: Point,
}

/// One clickable option of a checkbox group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckboxOption {
    pub option_label: String,
    pub x: i32,
    pub y: i32,
}

/// A form field: its kind, label, and on-screen geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field_type", rename_all = "snake_case")]
pub enum FieldDescriptor {
    FormInput {
        #[serde(default)]
        label: String,
        #[serde(default)]
        description: String,
        x: i32,
        y: i32,
    },
    SearchableSelect {
        #[serde(default)]
        label: String,
        #[serde(default)]
        description: String,
        coordinates: SelectCoordinates,
    },
    CheckboxGroup {
        #[serde(default)]
        label: String,
        #[serde(default)]
        description: String,
        options: Vec<CheckboxOption>,
    },
}

impl FieldDescriptor {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldDescriptor::FormInput { .. } => FieldKind::FormInput,
            FieldDescriptor::SearchableSelect { .. } => FieldKind::SearchableSelect,
            FieldDescriptor::CheckboxGroup { .. } => FieldKind::CheckboxGroup,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            FieldDescriptor::FormInput { label, .. }
            | FieldDescriptor::SearchableSelect { label, .. }
            | FieldDescriptor::CheckboxGroup { label, .. } => label,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            FieldDescriptor::FormInput { description, .. }
            | FieldDescriptor::SearchableSelect { description, .. }
            | FieldDescriptor::CheckboxGroup { description, .. } => description,
        }
    }
}

/// A stored form: its description and the ordered field list.
///
/// File order is significant: it determines on-screen interaction order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormDefinition {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub form_fields: Vec<FieldDescriptor>,
}

/// A value supplied for one field.
///
/// Checkbox groups take a list of option labels; a bare string is accepted
/// there too and promoted to a one-element list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Options(Vec<String>),
}

impl FieldValue {
    /// The value as input text, if it is a single string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Options(_) => None,
        }
    }

    /// The value as a list of option labels, promoting a bare string.
    pub fn to_options(&self) -> Vec<String> {
        match self {
            FieldValue::Text(s) => vec![s.clone()],
            FieldValue::Options(v) => v.clone(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

/// User-supplied data for a fill: label to value.
pub type FormData = HashMap<String, FieldValue>;

#[cfg(test)]
#[path = "form_tests.rs"]
mod tests;
