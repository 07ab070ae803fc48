//! Editor configuration
//!
//! Settings are stored as versioned JSON. Loading is strict by default;
//! `load_config_safe` falls back to defaults instead of failing.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Name of the document a new editor starts with
pub const DEFAULT_DOCUMENT_NAME: &str = "untitled";

/// Errors that can occur while loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to serialize config: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize config: {0}")]
    DeserializationFailed(String),

    #[error("Unsupported config version: {0}")]
    UnsupportedVersion(u32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Editor settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Version of the config format
    pub version: u32,
    /// Name of the initially active document
    pub default_document: String,
    /// Undo entries kept per document; `None` keeps everything
    pub history_limit: Option<usize>,
}

impl EditorConfig {
    /// Current version of the config format
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            default_document: DEFAULT_DOCUMENT_NAME.to_string(),
            history_limit: None,
        }
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    pub fn with_default_document(mut self, name: impl Into<String>) -> Self {
        self.default_document = name.into();
        self
    }

    /// Serializes to pretty JSON bytes
    pub fn to_json_bytes(&self) -> ConfigResult<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(|e| ConfigError::SerializationFailed(e.to_string()))
    }

    /// Deserializes from JSON bytes, rejecting unknown versions
    pub fn from_json_bytes(bytes: &[u8]) -> ConfigResult<Self> {
        let config: EditorConfig = serde_json::from_slice(bytes)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;

        if config.version != Self::CURRENT_VERSION {
            return Err(ConfigError::UnsupportedVersion(config.version));
        }

        Ok(config)
    }

    /// Reads and parses a JSON config file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        let config = Self::from_json_bytes(&bytes)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            history_limit = ?config.history_limit,
            "loaded editor config"
        );
        Ok(config)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses config bytes, falling back to defaults on error
pub fn load_config_safe(bytes: &[u8]) -> EditorConfig {
    EditorConfig::from_json_bytes(bytes).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "invalid editor config, using defaults");
        EditorConfig::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = EditorConfig::default();
        assert_eq!(config.version, EditorConfig::CURRENT_VERSION);
        assert_eq!(config.default_document, DEFAULT_DOCUMENT_NAME);
        assert_eq!(config.history_limit, None);
    }

    #[test]
    fn test_json_round_trip() {
        let config = EditorConfig::new()
            .with_history_limit(50)
            .with_default_document("scratch");
        let bytes = config.to_json_bytes().unwrap();
        assert_eq!(EditorConfig::from_json_bytes(&bytes).unwrap(), config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = EditorConfig::from_json_bytes(br#"{"history_limit": 10}"#).unwrap();
        assert_eq!(config.history_limit, Some(10));
        assert_eq!(config.default_document, DEFAULT_DOCUMENT_NAME);
    }

    #[test]
    fn test_unsupported_version() {
        let result = EditorConfig::from_json_bytes(br#"{"version": 99}"#);
        assert!(matches!(result, Err(ConfigError::UnsupportedVersion(99))));
    }

    #[test]
    fn test_invalid_json() {
        let result = EditorConfig::from_json_bytes(b"not json");
        assert!(matches!(result, Err(ConfigError::DeserializationFailed(_))));
    }

    #[test]
    fn test_load_safe_falls_back() {
        assert_eq!(load_config_safe(b"{broken"), EditorConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"version": 1, "default_document": "main", "history_limit": 3}"#)
            .unwrap();

        let config = EditorConfig::load(file.path()).unwrap();
        assert_eq!(config.default_document, "main");
        assert_eq!(config.history_limit, Some(3));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = EditorConfig::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
