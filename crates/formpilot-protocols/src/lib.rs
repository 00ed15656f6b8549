//! # Formpilot Protocols
//!
//! Shared definitions for the formpilot workspace:
//! - **form**: the form model (field descriptors, values, definitions)
//! - **report**: per-field and batch fill reports
//! - **provider**: the LLM provider trait and message model
//! - **error**: error taxonomy used across crates

pub mod error;
pub mod form;
pub mod provider;
pub mod report;

pub use error::{ChatError, ExtractError, FillError, ProviderError, SpeechError, StoreError};
pub use form::{
    CheckboxOption, FieldDescriptor, FieldKind, FieldValue, FormData, FormDefinition, Point,
    SelectCoordinates,
};
pub use provider::{
    ChatMessage, ChatRole, CompletionRequest, ContentPart, ImageUrl, LlmProvider, MessageContent,
    TextStream,
};
pub use report::{BatchReport, ClickedOption, FieldReport};
