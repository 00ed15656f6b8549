//! Error taxonomy shared across the workspace.

use thiserror::Error;

/// Field dispatch and simulation errors.
#[derive(Debug, Error)]
pub enum FillError {
    #[error("Field type is required")]
    MissingFieldType,

    #[error("{0} is required for {1} fields")]
    MissingRequiredInput(&'static str, &'static str),

    #[error("Unknown field type: {0}")]
    UnknownFieldType(String),

    #[error("Input simulation failed: {0}")]
    Simulation(String),

    #[error("No fields provided")]
    NoFields,
}

/// Form definition store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Form not found: {0}")]
    NotFound(String),

    #[error("Failed to read form definition: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed form definition '{name}': {source}")]
    Decode {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Remote LLM provider errors.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Stream error: {0}")]
    Stream(String),

    #[error("Malformed provider response: {0}")]
    Decode(String),
}

/// Speech provider errors (transcription and synthesis).
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Transcription response carried no transcript")]
    MissingTranscript,

    #[error("Malformed speech response: {0}")]
    Decode(String),
}

/// Structured extraction errors.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported context type: {0}")]
    UnsupportedKind(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Speech(#[from] SpeechError),

    #[error("Unsupported spreadsheet format: {0}")]
    Spreadsheet(String),

    #[error("Malformed extraction result: {0}")]
    Decode(String),
}

/// Intake chat errors.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Chat session not found: {0}")]
    SessionNotFound(String),

    #[error("Invalid intake schema: {0}")]
    InvalidSchema(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}
