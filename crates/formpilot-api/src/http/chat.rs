//! Intake chat handlers.
//!
//! Assistant replies stream back as plain text chunks, status marker
//! included; clients poll the status route for the parsed field state.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use formpilot_chat::{FieldStatus, IntakeRole};
use formpilot_protocols::provider::TextStream;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    /// JSON Schema describing the fields to collect.
    pub schema: Value,

    /// Who the assistant is talking to. Defaults to the patient voice.
    #[serde(default)]
    pub role: IntakeRole,
}

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: String,
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SessionStatusResponse {
    pub session_id: String,
    pub status: Option<FieldStatus>,
}

fn streamed(stream: TextStream) -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        Body::from_stream(stream),
    )
        .into_response()
}

/// POST /chat/sessions
pub async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<Json<CreateSessionResponse>, ApiError> {
    state.increment_requests();

    let session_id = state.chat.create_session(&request.schema, request.role)?;
    Ok(Json(CreateSessionResponse { session_id }))
}

/// POST /chat/sessions/{id}/messages
///
/// Append a user message; the assistant reply streams back chunk by chunk.
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<SendMessageRequest>,
) -> Result<Response, ApiError> {
    state.increment_requests();

    let stream = state.chat.send(&id, &request.message).await?;
    Ok(streamed(stream))
}

/// POST /chat/sessions/{id}/summary
pub async fn summarize(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    state.increment_requests();

    let stream = state.chat.summary(&id).await?;
    Ok(streamed(stream))
}

/// GET /chat/sessions/{id}/status
pub async fn session_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionStatusResponse>, ApiError> {
    state.increment_requests();

    let status = state.chat.status(&id)?;
    Ok(Json(SessionStatusResponse {
        session_id: id,
        status,
    }))
}

/// DELETE /chat/sessions/{id}
pub async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.increment_requests();

    state
        .chat
        .store()
        .remove(&id)
        .map_err(ApiError::from)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "chat_tests.rs"]
mod tests;
