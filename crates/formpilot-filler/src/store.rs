//! Flat-file form definition store.
//!
//! One JSON document per form, addressable by name, read fresh from disk
//! on every load. The directory is treated as read-only at serve time.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use formpilot_protocols::error::StoreError;
use formpilot_protocols::form::FormDefinition;

#[derive(Debug, Clone)]
pub struct FormStore {
    dir: PathBuf,
}

impl FormStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Names of every stored form, sorted.
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        let mut names = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }

        names.sort();
        Ok(names)
    }

    /// Load a form definition by name.
    pub fn load(&self, name: &str) -> Result<FormDefinition, StoreError> {
        let path = self.path_for(name)?;
        debug!(name, path = %path.display(), "loading form definition");

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(name.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&raw).map_err(|source| StoreError::Decode {
            name: name.to_string(),
            source,
        })
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path_for(name).map(|p| p.is_file()).unwrap_or(false)
    }

    /// Names are file stems; anything that could escape the store directory
    /// is treated as absent.
    fn path_for(&self, name: &str) -> Result<PathBuf, StoreError> {
        if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
            return Err(StoreError::NotFound(name.to_string()));
        }
        Ok(self.dir.join(format!("{name}.json")))
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
