//! Speech handlers: transcription and synthesis.

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub transcript: String,
}

#[derive(Debug, Deserialize)]
pub struct SynthesizeRequest {
    pub text: String,
}

/// POST /stt
///
/// Multipart form with a `file` part holding the audio clip.
pub async fn transcribe(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<TranscriptResponse>, ApiError> {
    state.increment_requests();

    let mut audio = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("file") {
            let mime = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(e.to_string()))?;
            debug!(%mime, size = bytes.len(), "received audio clip");
            audio = Some((bytes, mime));
        }
    }

    let (bytes, mime) =
        audio.ok_or_else(|| ApiError::BadRequest("Missing 'file' part".to_string()))?;
    if bytes.is_empty() {
        return Err(ApiError::BadRequest("Audio file is empty".to_string()));
    }

    let transcript = state.speech.transcribe(bytes, &mime).await?;
    Ok(Json(TranscriptResponse { transcript }))
}

/// POST /tts
///
/// Synthesize speech for a text; responds with the encoded audio bytes.
pub async fn synthesize(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SynthesizeRequest>,
) -> Result<Response, ApiError> {
    state.increment_requests();

    if request.text.trim().is_empty() {
        return Err(ApiError::BadRequest("Text is empty".to_string()));
    }

    let audio = state.speech.synthesize(&request.text).await?;
    Ok(([(header::CONTENT_TYPE, "audio/mpeg")], audio).into_response())
}

#[cfg(test)]
#[path = "speech_tests.rs"]
mod tests;
