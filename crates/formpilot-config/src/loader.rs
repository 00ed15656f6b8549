//! Configuration loading.
//!
//! TOML values may reference environment variables as `${VAR}`. References
//! are substituted at load time; an unset variable expands to the empty
//! string so optional secrets (provider api keys) never block startup. The
//! validator reports the resulting empty keys as warnings.

use std::fs;
use std::path::Path;

use regex::{Captures, Regex};
use tracing::warn;

use crate::error::ConfigError;
use crate::schema::Config;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a TOML config file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        Self::parse(&fs::read_to_string(path)?)
    }

    /// Parse TOML text, substituting `${VAR}` references first.
    pub fn parse(content: &str) -> Result<Config, ConfigError> {
        Ok(toml::from_str(&Self::expand_env_vars(content))?)
    }

    fn expand_env_vars(content: &str) -> String {
        let Ok(re) = Regex::new(r"\$\{([^}]+)\}") else {
            return content.to_string();
        };
        re.replace_all(content, |caps: &Captures| {
            let name = &caps[1];
            std::env::var(name).unwrap_or_else(|_| {
                warn!(variable = name, "environment variable not set, expanding to empty");
                String::new()
            })
        })
        .into_owned()
    }

    /// Expand shell-style paths (e.g., `~/forms`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}
