//! OpenRouter-compatible provider implementation.

use async_stream::try_stream;
use async_trait::async_trait;
use futures::StreamExt;
use tracing::debug;

use formpilot_protocols::error::ProviderError;
use formpilot_protocols::provider::{CompletionRequest, LlmProvider, TextStream};

use crate::api::{ApiRequest, ApiResponse, StreamChunk};

const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Chat completions client for OpenRouter and compatible gateways.
pub struct OpenRouterProvider {
    api_key: String,
    api_url: String,
    client: reqwest::Client,
}

impl OpenRouterProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_url(api_key, DEFAULT_API_URL.to_string())
    }

    /// Create a provider with a custom API URL (for compatible APIs and tests).
    pub fn with_url(api_key: String, api_url: String) -> Self {
        Self {
            api_key,
            api_url,
            client: reqwest::Client::new(),
        }
    }

    fn build_request(&self, request: &CompletionRequest, stream: bool) -> ApiRequest {
        ApiRequest {
            model: request.model.clone(),
            messages: request.messages.clone(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            stream: Some(stream),
        }
    }

    async fn send_request(
        &self,
        api_request: &ApiRequest,
    ) -> Result<reqwest::Response, ProviderError> {
        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(api_request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status,
                message: text,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl LlmProvider for OpenRouterProvider {
    fn id(&self) -> &str {
        "openrouter"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError> {
        debug!(model = %request.model, messages = request.messages.len(), "completion request");

        let api_request = self.build_request(&request, false);
        let response = self.send_request(&api_request).await?;
        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        api_response
            .first_content()
            .map(str::to_string)
            .ok_or_else(|| ProviderError::Decode("response carried no choices".to_string()))
    }

    async fn complete_stream(
        &self,
        request: CompletionRequest,
    ) -> Result<TextStream, ProviderError> {
        debug!(model = %request.model, "streaming completion request");

        let api_request = self.build_request(&request, true);
        let response = self.send_request(&api_request).await?;
        let mut bytes = response.bytes_stream();

        // SSE events can split across network reads, so lines are
        // re-assembled from a carry-over buffer before parsing.
        let stream = try_stream! {
            let mut buffer = String::new();

            while let Some(chunk) = bytes.next().await {
                let chunk = chunk.map_err(|e| ProviderError::Stream(e.to_string()))?;
                buffer.push_str(&String::from_utf8_lossy(&chunk));

                while let Some(newline) = buffer.find('\n') {
                    let line = buffer[..newline].trim_end_matches('\r').to_string();
                    buffer.drain(..=newline);

                    let Some(data) = line.strip_prefix("data: ") else {
                        continue;
                    };
                    if data == "[DONE]" {
                        return;
                    }
                    if let Ok(parsed) = serde_json::from_str::<StreamChunk>(data) {
                        if let Some(delta) = parsed.first_delta() {
                            yield delta.to_string();
                        }
                    }
                }
            }
        };

        Ok(Box::pin(stream))
    }
}

#[cfg(test)]
#[path = "openrouter_tests.rs"]
mod tests;
