//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: &str, message: &str) {
        self.errors.push(format!("{path}: {message}"));
    }

    fn warning(&mut self, path: &str, message: &str) {
        self.warnings.push(format!("{path}: {message}"));
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        if config.server.port == 0 {
            result.error("server.port", "Port cannot be 0");
        }
        if config.server.host.is_empty() {
            result.error("server.host", "Host cannot be empty");
        }

        if config.input.delay_between_fields_ms > 10_000 {
            result.warning(
                "input.delay_between_fields_ms",
                "delay is very high (>10s), batches will be slow",
            );
        }

        // Every section naming a provider must have a matching [providers.*]
        // entry with an api_key.
        for (path, name) in [
            ("extraction.provider", &config.extraction.provider),
            ("speech.provider", &config.speech.provider),
            ("chat.provider", &config.chat.provider),
        ] {
            match config.providers.get(name) {
                None => result.warning(path, &format!("no [providers.{name}] entry configured")),
                // An unset env var expands to "", which is as good as absent.
                Some(p) if p.api_key.as_deref().map_or(true, str::is_empty) => {
                    result.warning(path, &format!("[providers.{name}] has no api_key"));
                }
                Some(_) => {}
            }
        }

        if config.chat.session_ttl_secs == 0 {
            result.error("chat.session_ttl_secs", "session TTL must be greater than 0");
        }

        Ok(result)
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
