//! Intake chat service: glues sessions, prompts, and the streaming provider.

use std::sync::Arc;

use async_stream::stream;
use futures::StreamExt;
use serde_json::Value;
use tracing::{info, warn};

use formpilot_protocols::error::ChatError;
use formpilot_protocols::provider::{ChatMessage, CompletionRequest, LlmProvider, TextStream};

use crate::prompts::{system_prompt, IntakeRole, SUMMARY_PROMPT};
use crate::session::SessionStore;
use crate::status::parse_status;

pub struct ChatService {
    store: Arc<SessionStore>,
    provider: Arc<dyn LlmProvider>,
    model: String,
    temperature: f32,
}

impl ChatService {
    pub fn new(
        store: Arc<SessionStore>,
        provider: Arc<dyn LlmProvider>,
        model: impl Into<String>,
        temperature: f32,
    ) -> Self {
        Self {
            store,
            provider,
            model: model.into(),
            temperature,
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Create a session for an intake schema; returns the session id.
    pub fn create_session(&self, schema: &Value, role: IntakeRole) -> Result<String, ChatError> {
        let prompt = system_prompt(role, schema)?;
        let id = self.store.create(ChatMessage::system(prompt));
        info!(session_id = %id, ?role, "intake session started");
        Ok(id)
    }

    /// Append a user message and stream the assistant's reply.
    ///
    /// When the stream completes, the full reply is appended to the session
    /// and its trailing status marker, if any, is parsed and stored.
    pub async fn send(&self, id: &str, user_message: &str) -> Result<TextStream, ChatError> {
        self.stream_turn(id, user_message.to_string(), true).await
    }

    /// Stream a summary of the conversation so far.
    pub async fn summary(&self, id: &str) -> Result<TextStream, ChatError> {
        self.stream_turn(id, SUMMARY_PROMPT.to_string(), false).await
    }

    /// The last parsed field status for a session.
    pub fn status(&self, id: &str) -> Result<Option<crate::FieldStatus>, ChatError> {
        self.store.status(id)
    }

    async fn stream_turn(
        &self,
        id: &str,
        user_message: String,
        track_status: bool,
    ) -> Result<TextStream, ChatError> {
        self.store.append(id, ChatMessage::user(user_message))?;
        let messages = self.store.messages(id)?;

        let request = CompletionRequest::new(self.model.clone(), messages)
            .with_temperature(self.temperature);
        let mut inner = self.provider.complete_stream(request).await?;

        let store = Arc::clone(&self.store);
        let id = id.to_string();

        let wrapped = stream! {
            let mut full = String::new();

            while let Some(chunk) = inner.next().await {
                match chunk {
                    Ok(text) => {
                        full.push_str(&text);
                        yield Ok(text);
                    }
                    Err(e) => {
                        yield Err(e);
                        return;
                    }
                }
            }

            if track_status {
                if let (_, Some(status)) = parse_status(&full) {
                    if store.set_status(&id, status).is_err() {
                        warn!(session_id = %id, "session expired mid-stream");
                        return;
                    }
                }
            }
            if store.append(&id, ChatMessage::assistant(full)).is_err() {
                warn!(session_id = %id, "session expired mid-stream");
            }
        };

        Ok(Box::pin(wrapped))
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
