//! Context extraction handler.

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::Json;
use serde_json::Value;
use tracing::debug;

use formpilot_extract::{ContextInput, ContextKind, Extraction};

use crate::error::ApiError;
use crate::state::AppState;

/// POST /parse-context
///
/// Multipart form with:
/// - `kind`: one of `text`, `image`, `audio`, `pdf`, `spreadsheet`, `json`
/// - `schema`: the target JSON Schema, as a JSON text part
/// - `content`: inline text content, or
/// - `file`: an uploaded file with its filename and content type
pub async fn parse_context(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<Extraction>, ApiError> {
    state.increment_requests();

    let mut kind: Option<ContextKind> = None;
    let mut schema: Option<Value> = None;
    let mut input: Option<ContextInput> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("kind") => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
                kind = Some(ContextKind::from_str(&raw)?);
            }
            Some("schema") => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
                let parsed = serde_json::from_str(&raw)
                    .map_err(|e| ApiError::BadRequest(format!("Invalid schema: {e}")))?;
                schema = Some(parsed);
            }
            Some("content") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
                input = Some(ContextInput::Text(text));
            }
            Some("file") => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let mime = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
                debug!(%filename, %mime, size = bytes.len(), "received context file");
                input = Some(ContextInput::File {
                    bytes,
                    filename,
                    mime,
                });
            }
            _ => {}
        }
    }

    let kind = kind.ok_or_else(|| ApiError::BadRequest("Missing 'kind' part".to_string()))?;
    let schema =
        schema.ok_or_else(|| ApiError::BadRequest("Missing 'schema' part".to_string()))?;
    let input = input.ok_or_else(|| {
        ApiError::BadRequest("Missing 'content' or 'file' part".to_string())
    })?;

    let extraction = state.parser.parse_context(input, kind, &schema).await?;
    Ok(Json(extraction))
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
