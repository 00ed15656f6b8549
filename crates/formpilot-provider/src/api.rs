//! Wire-level request/response structures for the chat completions API.

use serde::{Deserialize, Serialize};

use formpilot_protocols::provider::ChatMessage;

/// Chat completions request body.
#[derive(Debug, Serialize)]
pub struct ApiRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
}

/// Chat completions response body.
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl ApiResponse {
    /// Text of the first choice, if any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// One server-sent streaming chunk.
#[derive(Debug, Deserialize)]
pub struct StreamChunk {
    #[serde(default)]
    pub choices: Vec<StreamChoice>,
}

impl StreamChunk {
    /// Text delta of the first choice, if any.
    pub fn first_delta(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.delta.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
pub struct StreamChoice {
    #[serde(default)]
    pub delta: Delta,
}

#[derive(Debug, Default, Deserialize)]
pub struct Delta {
    #[serde(default)]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use formpilot_protocols::provider::ChatMessage;

    #[test]
    fn test_request_serialization_skips_none() {
        let request = ApiRequest {
            model: "openai/gpt-4o".to_string(),
            messages: vec![ChatMessage::user("hi")],
            temperature: None,
            max_tokens: None,
            stream: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("openai/gpt-4o"));
        assert!(!json.contains("temperature"));
        assert!(!json.contains("stream"));
    }

    #[test]
    fn test_response_first_content() {
        let json = r#"{
            "choices": [{ "message": { "role": "assistant", "content": "Hello!" } }]
        }"#;
        let response: ApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.first_content(), Some("Hello!"));
    }

    #[test]
    fn test_response_without_choices() {
        let response: ApiResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.first_content(), None);
    }

    #[test]
    fn test_stream_chunk_delta() {
        let json = r#"{ "choices": [{ "delta": { "content": "Hel" } }] }"#;
        let chunk: StreamChunk = serde_json::from_str(json).unwrap();
        assert_eq!(chunk.first_delta(), Some("Hel"));
    }

    #[test]
    fn test_stream_chunk_empty_delta() {
        let json = r#"{ "choices": [{ "delta": {} }] }"#;
        let chunk: StreamChunk = serde_json::from_str(json).unwrap();
        assert_eq!(chunk.first_delta(), None);
    }
}
