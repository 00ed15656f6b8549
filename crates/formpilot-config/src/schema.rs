//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub forms: FormsConfig,

    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,

    #[serde(default)]
    pub extraction: ExtractionConfig,

    #[serde(default)]
    pub speech: SpeechConfig,

    #[serde(default)]
    pub chat: ChatConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Input simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Default pause between consecutive fields, in milliseconds.
    #[serde(default = "default_field_delay_ms")]
    pub delay_between_fields_ms: u64,

    /// Record input events instead of driving real hardware.
    #[serde(default)]
    pub dry_run: bool,
}

impl InputConfig {
    pub fn delay_between_fields(&self) -> Duration {
        Duration::from_millis(self.delay_between_fields_ms)
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delay_between_fields_ms: default_field_delay_ms(),
            dry_run: false,
        }
    }
}

fn default_field_delay_ms() -> u64 {
    300
}

/// Form definition store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormsConfig {
    /// Directory holding one JSON definition per form.
    #[serde(default = "default_forms_dir")]
    pub dir: PathBuf,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            dir: default_forms_dir(),
        }
    }
}

fn default_forms_dir() -> PathBuf {
    PathBuf::from("./forms")
}

/// Remote provider configuration, keyed by provider name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_model: Option<String>,

    #[serde(default)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Structured extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Name of the `[providers.*]` entry serving completions.
    #[serde(default = "default_llm_provider")]
    pub provider: String,

    #[serde(default = "default_text_model")]
    pub text_model: String,

    /// Model used for image and PDF content.
    #[serde(default = "default_vision_model")]
    pub vision_model: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            text_model: default_text_model(),
            vision_model: default_vision_model(),
        }
    }
}

fn default_llm_provider() -> String {
    "openrouter".to_string()
}

fn default_text_model() -> String {
    "openai/gpt-4o-mini".to_string()
}

fn default_vision_model() -> String {
    "openai/gpt-4o".to_string()
}

/// Speech provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Name of the `[providers.*]` entry serving speech calls.
    #[serde(default = "default_speech_provider")]
    pub provider: String,

    #[serde(default = "default_stt_model")]
    pub stt_model: String,

    #[serde(default = "default_tts_model")]
    pub tts_model: String,

    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            provider: default_speech_provider(),
            stt_model: default_stt_model(),
            tts_model: default_tts_model(),
            language: default_language(),
        }
    }
}

fn default_speech_provider() -> String {
    "deepgram".to_string()
}

fn default_stt_model() -> String {
    "nova-2".to_string()
}

fn default_tts_model() -> String {
    "aura-asteria-en".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

/// Intake chat configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Name of the `[providers.*]` entry serving chat completions.
    #[serde(default = "default_llm_provider")]
    pub provider: String,

    #[serde(default = "default_chat_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Idle sessions are dropped after this long.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: u64,
}

impl ChatConfig {
    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            model: default_chat_model(),
            temperature: default_temperature(),
            session_ttl_secs: default_session_ttl(),
        }
    }
}

fn default_chat_model() -> String {
    "openai/gpt-4o".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_session_ttl() -> u64 {
    1800
}
