//! Server bootstrap: wires config into providers, the input driver, and
//! the HTTP server.

use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use formpilot_api::{ApiConfig, ApiServer, AppState, SharedDriver};
use formpilot_chat::{ChatService, SessionStore};
use formpilot_config::Config;
use formpilot_extract::ContextParser;
use formpilot_input::{EnigoDriver, InputDriver, ScriptedDriver};
use formpilot_provider::OpenRouterProvider;
use formpilot_speech::{DeepgramSpeech, SpeechProvider};

use crate::commands::store_from;

pub async fn run(
    config: Config,
    host: Option<String>,
    port: Option<u16>,
) -> Result<(), Box<dyn std::error::Error>> {
    let driver = build_driver(&config)?;
    let forms = store_from(&config);

    let extraction_provider = openrouter_for(&config, &config.extraction.provider);
    let chat_provider = openrouter_for(&config, &config.chat.provider);
    let speech = deepgram_for(&config);

    let parser = Arc::new(ContextParser::new(
        extraction_provider,
        speech.clone(),
        config.extraction.text_model.clone(),
        config.extraction.vision_model.clone(),
    ));

    let chat = Arc::new(ChatService::new(
        Arc::new(SessionStore::new(config.chat.session_ttl())),
        chat_provider,
        config.chat.model.clone(),
        config.chat.temperature,
    ));

    let state = Arc::new(AppState::new(
        forms,
        driver,
        parser,
        chat,
        speech,
        config.input.delay_between_fields(),
    ));

    let api_config = ApiConfig::new(
        host.unwrap_or_else(|| config.server.host.clone()),
        port.unwrap_or(config.server.port),
    );

    ApiServer::new(api_config, state).run().await
}

fn build_driver(config: &Config) -> Result<SharedDriver, Box<dyn std::error::Error>> {
    let driver: Box<dyn InputDriver> = if config.input.dry_run {
        warn!("dry run: input events are recorded, not performed");
        Box::new(ScriptedDriver::new())
    } else {
        Box::new(EnigoDriver::new()?)
    };
    Ok(Arc::new(Mutex::new(driver)))
}

/// Build a chat-completions client from a `[providers.*]` entry.
///
/// A missing entry or api_key is a warning, not a startup failure; the
/// fill routes work without any remote provider.
fn openrouter_for(config: &Config, name: &str) -> Arc<OpenRouterProvider> {
    let entry = config.providers.get(name);
    // An unset ${VAR} in the config file loads as an empty key.
    let api_key = entry
        .and_then(|p| p.api_key.clone())
        .filter(|k| !k.is_empty())
        .unwrap_or_else(|| {
            warn!(provider = name, "no api_key configured, remote calls will fail");
            String::new()
        });

    let provider = match entry.and_then(|p| p.base_url.clone()) {
        Some(url) => OpenRouterProvider::with_url(api_key, url),
        None => OpenRouterProvider::new(api_key),
    };
    info!(provider = name, "chat completions provider ready");
    Arc::new(provider)
}

fn deepgram_for(config: &Config) -> Arc<dyn SpeechProvider> {
    let name = &config.speech.provider;
    let entry = config.providers.get(name);
    let api_key = entry
        .and_then(|p| p.api_key.clone())
        .filter(|k| !k.is_empty())
        .unwrap_or_else(|| {
            warn!(provider = %name, "no api_key configured, speech calls will fail");
            String::new()
        });

    let speech = match entry.and_then(|p| p.base_url.clone()) {
        Some(url) => DeepgramSpeech::with_base_url(api_key, url),
        None => DeepgramSpeech::new(api_key),
    }
    .with_models(
        config.speech.stt_model.clone(),
        config.speech.tts_model.clone(),
        config.speech.language.clone(),
    );
    Arc::new(speech)
}
