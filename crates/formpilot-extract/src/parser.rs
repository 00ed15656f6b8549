//! Context parser: routes `(content, kind, schema)` to the right pipeline.

use std::str::FromStr;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use formpilot_protocols::error::ExtractError;
use formpilot_protocols::provider::{
    ChatMessage, CompletionRequest, ContentPart, FileData, ImageUrl, LlmProvider,
};
use formpilot_speech::SpeechProvider;

use crate::spreadsheet::spreadsheet_to_json;

/// The kind of context a caller hands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextKind {
    Text,
    Image,
    Audio,
    Pdf,
    Spreadsheet,
    Json,
}

impl FromStr for ContextKind {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ContextKind::Text),
            "image" => Ok(ContextKind::Image),
            "audio" => Ok(ContextKind::Audio),
            "pdf" => Ok(ContextKind::Pdf),
            "spreadsheet" => Ok(ContextKind::Spreadsheet),
            "json" => Ok(ContextKind::Json),
            other => Err(ExtractError::UnsupportedKind(other.to_string())),
        }
    }
}

/// Context content: inline text, or an uploaded file with its metadata.
#[derive(Debug, Clone)]
pub enum ContextInput {
    Text(String),
    File {
        bytes: Bytes,
        filename: String,
        mime: String,
    },
}

impl ContextInput {
    fn as_text(&self) -> Result<&str, ExtractError> {
        match self {
            ContextInput::Text(text) => Ok(text),
            ContextInput::File { bytes, .. } => std::str::from_utf8(bytes)
                .map_err(|e| ExtractError::Decode(e.to_string())),
        }
    }

    fn as_file(&self) -> Result<(&Bytes, &str, &str), ExtractError> {
        match self {
            ContextInput::File {
                bytes,
                filename,
                mime,
            } => Ok((bytes, filename, mime)),
            ContextInput::Text(_) => Err(ExtractError::Decode(
                "this context kind needs a file upload".to_string(),
            )),
        }
    }
}

/// Extraction outcome: the JSON payload plus the model's reasoning.
#[derive(Debug, Clone, Serialize)]
pub struct Extraction {
    pub json_result: Value,
    pub reasoning: String,
}

/// Routes context to an extraction pipeline backed by LLM and speech
/// providers.
pub struct ContextParser {
    provider: Arc<dyn LlmProvider>,
    speech: Arc<dyn SpeechProvider>,
    text_model: String,
    vision_model: String,
}

impl ContextParser {
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        speech: Arc<dyn SpeechProvider>,
        text_model: impl Into<String>,
        vision_model: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            speech,
            text_model: text_model.into(),
            vision_model: vision_model.into(),
        }
    }

    /// Parse a piece of context into JSON satisfying `schema`.
    pub async fn parse_context(
        &self,
        input: ContextInput,
        kind: ContextKind,
        schema: &Value,
    ) -> Result<Extraction, ExtractError> {
        info!(?kind, "parsing context");

        match kind {
            ContextKind::Text => self.parse_text(input.as_text()?, schema).await,
            ContextKind::Image => self.parse_image(input, schema).await,
            ContextKind::Audio => self.parse_audio(input, schema).await,
            ContextKind::Pdf => self.parse_pdf(input, schema).await,
            ContextKind::Spreadsheet => self.parse_spreadsheet(input, schema).await,
            // JSON files are read as text and extracted the same way.
            ContextKind::Json => self.parse_text(input.as_text()?, schema).await,
        }
    }

    async fn parse_text(&self, text: &str, schema: &Value) -> Result<Extraction, ExtractError> {
        let request = CompletionRequest::new(
            self.text_model.clone(),
            vec![
                ChatMessage::system(extraction_prompt(schema)),
                ChatMessage::user(text),
            ],
        );
        let reply = self.provider.complete(request).await?;
        decode_reply(&reply)
    }

    async fn parse_image(
        &self,
        input: ContextInput,
        schema: &Value,
    ) -> Result<Extraction, ExtractError> {
        let (bytes, _, mime) = input.as_file()?;
        let url = format!("data:{};base64,{}", mime, BASE64.encode(bytes));

        let request = CompletionRequest::new(
            self.vision_model.clone(),
            vec![
                ChatMessage::system(extraction_prompt(schema)),
                ChatMessage::user_parts(vec![
                    ContentPart::Text {
                        text: "Analyze this image.".to_string(),
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl { url },
                    },
                ]),
            ],
        );
        let reply = self.provider.complete(request).await?;
        decode_reply(&reply)
    }

    async fn parse_audio(
        &self,
        input: ContextInput,
        schema: &Value,
    ) -> Result<Extraction, ExtractError> {
        let (bytes, _, mime) = input.as_file()?;
        let transcript = self.speech.transcribe(bytes.clone(), mime).await?;
        self.parse_text(&transcript, schema).await
    }

    async fn parse_pdf(
        &self,
        input: ContextInput,
        schema: &Value,
    ) -> Result<Extraction, ExtractError> {
        let (bytes, filename, _) = input.as_file()?;
        let file_data = format!("data:application/pdf;base64,{}", BASE64.encode(bytes));

        let request = CompletionRequest::new(
            self.vision_model.clone(),
            vec![
                ChatMessage::system(extraction_prompt(schema)),
                ChatMessage::user_parts(vec![
                    ContentPart::Text {
                        text: "Analyze this document.".to_string(),
                    },
                    ContentPart::File {
                        file: FileData {
                            filename: filename.to_string(),
                            file_data,
                        },
                    },
                ]),
            ],
        );
        let reply = self.provider.complete(request).await?;
        decode_reply(&reply)
    }

    async fn parse_spreadsheet(
        &self,
        input: ContextInput,
        schema: &Value,
    ) -> Result<Extraction, ExtractError> {
        let (bytes, filename, _) = input.as_file()?;
        let table = spreadsheet_to_json(bytes, filename)?;
        let json_string = serde_json::to_string_pretty(&table)
            .map_err(|e| ExtractError::Decode(e.to_string()))?;

        let text = format!(
            "The following is data from a spreadsheet file converted to JSON format:\n\n\
             {json_string}\n\n\
             Please extract the relevant information according to the schema."
        );
        self.parse_text(&text, schema).await
    }
}

fn extraction_prompt(schema: &Value) -> String {
    format!(
        "Extract structured data from the provided content.\n\
         Respond with a single JSON object with two keys:\n\
         - \"reasoning\": a short explanation of how the data was extracted\n\
         - \"json_result\": the extracted data, satisfying this JSON schema:\n\
         {schema}\n\
         The response must be JSON parsable and must not start with ```json or ```."
    )
}

/// Decode a model reply into an [`Extraction`], tolerating code fences and
/// replies that skip the reasoning wrapper.
fn decode_reply(reply: &str) -> Result<Extraction, ExtractError> {
    let stripped: String = reply
        .lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n");

    let value: Value = serde_json::from_str(stripped.trim())
        .map_err(|e| ExtractError::Decode(e.to_string()))?;

    if let Some(json_result) = value.get("json_result") {
        let reasoning = value
            .get("reasoning")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        return Ok(Extraction {
            json_result: json_result.clone(),
            reasoning,
        });
    }

    Ok(Extraction {
        json_result: value,
        reasoning: String::new(),
    })
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
