//! Fill reports: per-field outcomes and batch aggregates.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::form::FieldKind;

/// Echo of one checkbox click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickedOption {
    pub option_label: String,
    pub x: i32,
    pub y: i32,
}

/// Outcome of dispatching one field.
///
/// Action-specific echo fields are optional and omitted from JSON when
/// absent, matching the loose per-handler payloads of the fill protocol.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldReport {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldKind>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_index: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_entered: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub clicked: Option<Vec<ClickedOption>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub values_requested: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FieldReport {
    /// A failure report carrying only the error message.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Default::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.field_index = Some(index);
        self
    }
}

/// Aggregate outcome of a batch or form fill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub success: bool,
    pub total_fields: usize,
    pub results: Vec<FieldReport>,
}

impl BatchReport {
    /// Build from per-field reports; overall success is the AND over them.
    pub fn from_results(results: Vec<FieldReport>) -> Self {
        Self {
            success: results.iter().all(|r| r.success),
            total_fields: results.len(),
            results,
        }
    }
}
