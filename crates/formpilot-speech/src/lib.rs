//! Speech provider clients: transcription and synthesis.

mod deepgram;

use async_trait::async_trait;
use bytes::Bytes;

use formpilot_protocols::error::SpeechError;

pub use deepgram::DeepgramSpeech;

/// Speech collaborator: audio to text and text to audio, each one blocking
/// remote call.
#[async_trait]
pub trait SpeechProvider: Send + Sync {
    /// Transcribe an audio clip to text.
    async fn transcribe(&self, audio: Bytes, mime: &str) -> Result<String, SpeechError>;

    /// Synthesize speech for a text, returning encoded audio bytes.
    async fn synthesize(&self, text: &str) -> Result<Bytes, SpeechError>;
}
