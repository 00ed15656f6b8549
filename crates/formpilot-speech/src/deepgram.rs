//! Deepgram-style speech client.

use async_trait::async_trait;
use bytes::Bytes;
use serde::Deserialize;
use tracing::debug;

use formpilot_protocols::error::SpeechError;

use crate::SpeechProvider;

const DEFAULT_BASE_URL: &str = "https://api.deepgram.com/v1";

/// REST client for Deepgram's `/listen` and `/speak` endpoints.
pub struct DeepgramSpeech {
    api_key: String,
    base_url: String,
    stt_model: String,
    tts_model: String,
    language: String,
    client: reqwest::Client,
}

impl DeepgramSpeech {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            stt_model: "nova-2".to_string(),
            tts_model: "aura-asteria-en".to_string(),
            language: "en".to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn with_models(
        mut self,
        stt_model: impl Into<String>,
        tts_model: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        self.stt_model = stt_model.into();
        self.tts_model = tts_model.into();
        self.language = language.into();
        self
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, SpeechError> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(SpeechError::Api { status, message });
        }
        Ok(response)
    }
}

/// Transcription response, trimmed to the fields the transcript lives in.
#[derive(Debug, Deserialize)]
struct ListenResponse {
    results: Option<ListenResults>,
}

#[derive(Debug, Deserialize)]
struct ListenResults {
    #[serde(default)]
    channels: Vec<ListenChannel>,
}

#[derive(Debug, Deserialize)]
struct ListenChannel {
    #[serde(default)]
    alternatives: Vec<ListenAlternative>,
}

#[derive(Debug, Deserialize)]
struct ListenAlternative {
    transcript: Option<String>,
}

impl ListenResponse {
    /// `results.channels[0].alternatives[0].transcript`.
    fn transcript(self) -> Option<String> {
        self.results?
            .channels
            .into_iter()
            .next()?
            .alternatives
            .into_iter()
            .next()?
            .transcript
    }
}

#[async_trait]
impl SpeechProvider for DeepgramSpeech {
    async fn transcribe(&self, audio: Bytes, mime: &str) -> Result<String, SpeechError> {
        debug!(bytes = audio.len(), mime, model = %self.stt_model, "transcribing audio");

        let url = format!(
            "{}/listen?smart_format=true&language={}&model={}",
            self.base_url, self.language, self.stt_model
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Token {}", self.api_key))
            .header("Content-Type", mime)
            .body(audio)
            .send()
            .await
            .map_err(|e| SpeechError::Network(e.to_string()))?;
        let response = Self::check_status(response).await?;

        let parsed: ListenResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::Decode(e.to_string()))?;

        parsed.transcript().ok_or(SpeechError::MissingTranscript)
    }

    async fn synthesize(&self, text: &str) -> Result<Bytes, SpeechError> {
        debug!(chars = text.len(), model = %self.tts_model, "synthesizing speech");

        let url = format!("{}/speak?model={}", self.base_url, self.tts_model);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Token {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await
            .map_err(|e| SpeechError::Network(e.to_string()))?;
        let response = Self::check_status(response).await?;

        response
            .bytes()
            .await
            .map_err(|e| SpeechError::Network(e.to_string()))
    }
}

#[cfg(test)]
#[path = "deepgram_tests.rs"]
mod tests;
