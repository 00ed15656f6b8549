//! HTTP route definitions.
//!
//! The API groups its routes by concern: input simulation, stored forms,
//! extraction, speech, and intake chat.

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::http::{chat, extract, fill, forms, monitoring, speech};
use crate::state::AppState;

/// Create the main router.
///
/// ## Route Structure
///
/// ```text
/// POST   /submit               - Click at a ratio position and type text
/// POST   /fill-fields          - Fill a batch of ad hoc fields
///
/// /forms
///   GET    /forms                    - List stored form names
///   GET    /forms/{name}/schema      - JSON Schema for a stored form
///   GET    /forms/{name}/template    - Empty fillable template
///   POST   /forms/{name}/fill        - Fill a stored form from data
///
/// POST   /parse-context        - Extract schema-shaped JSON from context
///                                (multipart: text, image, audio, pdf,
///                                spreadsheet, json)
///
/// POST   /stt                  - Transcribe an uploaded audio clip
/// POST   /tts                  - Synthesize speech for a text
///
/// /chat
///   POST   /chat/sessions                    - Start an intake session
///   POST   /chat/sessions/{id}/messages      - Send a message (streamed reply)
///   POST   /chat/sessions/{id}/summary       - Stream an intake summary
///   GET    /chat/sessions/{id}/status        - Collected/missing field status
///   DELETE /chat/sessions/{id}               - Drop a session
///
/// GET    /health               - Health and uptime
/// ```
pub fn create_router(state: Arc<AppState>) -> Router {
    // Input simulation routes hold the device lock for a whole request
    let fill_routes = Router::new()
        .route("/submit", post(fill::submit))
        .route("/fill-fields", post(fill::fill_fields))
        .with_state(state.clone());

    let form_routes = Router::new()
        .route("/", get(forms::list_forms))
        .route("/{name}/schema", get(forms::form_schema))
        .route("/{name}/template", get(forms::form_template))
        .route("/{name}/fill", post(fill::fill_form))
        .with_state(state.clone());

    let extract_routes = Router::new()
        .route("/parse-context", post(extract::parse_context))
        .with_state(state.clone());

    let speech_routes = Router::new()
        .route("/stt", post(speech::transcribe))
        .route("/tts", post(speech::synthesize))
        .with_state(state.clone());

    let chat_routes = Router::new()
        .route("/sessions", post(chat::create_session))
        .route("/sessions/{id}/messages", post(chat::send_message))
        .route("/sessions/{id}/summary", post(chat::summarize))
        .route("/sessions/{id}/status", get(chat::session_status))
        .route("/sessions/{id}", delete(chat::delete_session))
        .with_state(state.clone());

    let monitoring_routes = Router::new()
        .route("/health", get(monitoring::health_check))
        .with_state(state);

    Router::new()
        .merge(fill_routes)
        .nest("/forms", form_routes)
        .merge(extract_routes)
        .merge(speech_routes)
        .nest("/chat", chat_routes)
        .merge(monitoring_routes)
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
