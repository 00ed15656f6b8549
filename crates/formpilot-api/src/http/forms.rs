//! Stored form handlers: listing, schema, and template generation.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use formpilot_filler::{empty_form_data, generate_schema};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct FormsListResponse {
    pub count: usize,
    pub forms: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SchemaQuery {
    /// Mark every labelled field as required.
    #[serde(default)]
    pub require_all: bool,
}

/// GET /forms
pub async fn list_forms(
    State(state): State<Arc<AppState>>,
) -> Result<Json<FormsListResponse>, ApiError> {
    state.increment_requests();

    let forms = state.forms.list().map_err(ApiError::from)?;
    Ok(Json(FormsListResponse {
        count: forms.len(),
        forms,
    }))
}

/// GET /forms/{name}/schema
pub async fn form_schema(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(query): Query<SchemaQuery>,
) -> Result<Json<Value>, ApiError> {
    state.increment_requests();

    let definition = state.forms.load(&name)?;
    Ok(Json(generate_schema(&definition, query.require_all)))
}

/// GET /forms/{name}/template
pub async fn form_template(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.increment_requests();

    let definition = state.forms.load(&name)?;
    Ok(Json(empty_form_data(&definition)))
}

#[cfg(test)]
#[path = "forms_tests.rs"]
mod tests;
