//! Shared fixtures for handler tests.

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use formpilot_chat::ChatService;
use formpilot_chat::SessionStore;
use formpilot_extract::ContextParser;
use formpilot_filler::FormStore;
use formpilot_input::{InputDriver, ScriptedDriver};
use formpilot_protocols::error::{ProviderError, SpeechError};
use formpilot_protocols::provider::{CompletionRequest, LlmProvider, TextStream};
use formpilot_speech::SpeechProvider;

use crate::state::AppState;

/// Provider returning a fixed reply for every completion.
pub struct CannedProvider {
    pub reply: String,
    pub last: Mutex<Option<CompletionRequest>>,
}

impl CannedProvider {
    pub fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            last: Mutex::new(None),
        })
    }
}

#[async_trait]
impl LlmProvider for CannedProvider {
    fn id(&self) -> &str {
        "canned"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError> {
        *self.last.lock().unwrap() = Some(request);
        Ok(self.reply.clone())
    }

    async fn complete_stream(
        &self,
        request: CompletionRequest,
    ) -> Result<TextStream, ProviderError> {
        *self.last.lock().unwrap() = Some(request);
        let chunks = vec![Ok(self.reply.clone())];
        Ok(Box::pin(futures::stream::iter(chunks)))
    }
}

/// Speech provider with fixed transcript and audio.
pub struct CannedSpeech {
    pub transcript: String,
    pub audio: Bytes,
}

impl CannedSpeech {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            transcript: "patient reports a headache".to_string(),
            audio: Bytes::from_static(b"RIFFfake-audio"),
        })
    }
}

#[async_trait]
impl SpeechProvider for CannedSpeech {
    async fn transcribe(&self, _audio: Bytes, _mime: &str) -> Result<String, SpeechError> {
        Ok(self.transcript.clone())
    }

    async fn synthesize(&self, _text: &str) -> Result<Bytes, SpeechError> {
        Ok(self.audio.clone())
    }
}

/// A reply shaped the way the extraction pipeline expects.
pub const EXTRACTION_REPLY: &str =
    r#"{"reasoning":"read the content","json_result":{"Name":"Alice"}}"#;

/// An intake reply with a trailing status marker.
pub const INTAKE_REPLY: &str =
    "What brings you in today?\n<!--STATUS::{\"collected\":[],\"missing\":[\"Name\"]}-->";

/// Build state over a forms directory, a scripted driver, and canned
/// providers.
pub fn state_with_forms(forms_dir: &Path, reply: &str) -> Arc<AppState> {
    let provider = CannedProvider::new(reply);
    let speech = CannedSpeech::new();

    let parser = Arc::new(ContextParser::new(
        provider.clone(),
        speech.clone(),
        "openai/gpt-4o-mini",
        "openai/gpt-4o",
    ));
    let chat = Arc::new(ChatService::new(
        Arc::new(SessionStore::new(Duration::from_secs(60))),
        provider,
        "openai/gpt-4o",
        0.7,
    ));

    Arc::new(AppState::new(
        FormStore::new(forms_dir),
        Arc::new(Mutex::new(
            Box::new(ScriptedDriver::new()) as Box<dyn InputDriver>
        )),
        parser,
        chat,
        speech,
        Duration::from_millis(300),
    ))
}

/// State with no forms on disk; enough for routes that never touch the store.
pub fn test_state() -> Arc<AppState> {
    state_with_forms(Path::new("./forms"), INTAKE_REPLY)
}

/// A stored form with one of each field kind.
pub const PATIENT_FORM: &str = r#"{
  "description": "Patient Intake",
  "form_fields": [
    { "field_type": "form_input", "label": "Name", "description": "Full name", "x": 100, "y": 200 },
    {
      "field_type": "searchable_select",
      "label": "Doctor",
      "description": "Attending physician",
      "coordinates": {
        "dropdown": { "x": 300, "y": 400 },
        "input": { "x": 300, "y": 440 },
        "result": { "x": 300, "y": 480 }
      }
    },
    {
      "field_type": "checkbox_group",
      "label": "Symptoms",
      "description": "Current symptoms",
      "options": [
        { "option_label": "Fever", "x": 500, "y": 600 },
        { "option_label": "Cough", "x": 500, "y": 630 }
      ]
    }
  ]
}"#;

/// Write the sample form into a directory as `patient_intake.json`.
pub fn write_patient_form(dir: &Path) {
    std::fs::write(dir.join("patient_intake.json"), PATIENT_FORM).unwrap();
}

/// Boundary used by [`multipart_body`].
pub const BOUNDARY: &str = "X-FORMPILOT-TEST-BOUNDARY";

/// One part of a hand-built multipart body.
pub enum Part<'a> {
    Text(&'a str, &'a str),
    File {
        name: &'a str,
        filename: &'a str,
        content_type: &'a str,
        bytes: &'a [u8],
    },
}

/// Assemble a `multipart/form-data` body for handler tests.
pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File {
                name,
                filename,
                content_type,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// The content type header matching [`multipart_body`].
pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}

/// Collect a response body into JSON.
pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    use http_body_util::BodyExt;
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body into a string.
pub async fn read_text(response: axum::response::Response) -> String {
    use http_body_util::BodyExt;
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Build a JSON request.
pub fn json_request(
    method: &str,
    uri: &str,
    body: &serde_json::Value,
) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(axum::body::Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Build a bodyless request.
pub fn empty_request(method: &str, uri: &str) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap()
}
