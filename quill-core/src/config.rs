//! Editor configuration.
//!
//! Read once at boot from `<config_dir>/config.json`. A missing file means
//! defaults; a broken file is logged and also falls back to defaults.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::highlight::{Grammar, HighlightError};

/// Environment variable that overrides `endpoint`.
pub const ENDPOINT_ENV: &str = "QUILL_ENDPOINT";

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/suggest";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Grammar(#[from] HighlightError),
}

/// Key that fires a suggestion request instead of its normal editing action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TriggerKey {
    #[default]
    #[serde(rename = "tab")]
    Tab,
    #[serde(rename = "ctrl+space")]
    CtrlSpace,
}

impl TriggerKey {
    pub fn label(&self) -> &'static str {
        match self {
            TriggerKey::Tab => "Tab",
            TriggerKey::CtrlSpace => "Ctrl+Space",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Suggestion service URL (receives a JSON POST).
    pub endpoint: String,
    /// Grammar identifier for highlighting, e.g. `"python"`.
    pub grammar: String,
    /// Buffer contents at startup.
    pub initial_text: String,
    pub theme: String,
    pub trigger_key: TriggerKey,
    pub font_size: f32,
    /// Fixed per-character width used to place the suggestion panel.
    pub char_width: f32,
    /// Fixed per-line height used to place the suggestion panel.
    pub line_height: f32,
    /// No timeout when unset.
    pub request_timeout_secs: Option<u64>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            grammar: "python".to_string(),
            initial_text: "# happy coding!\n".to_string(),
            theme: "default".to_string(),
            trigger_key: TriggerKey::Tab,
            font_size: 14.0,
            char_width: 14.0,
            line_height: 14.0,
            request_timeout_secs: None,
        }
    }
}

impl EditorConfig {
    /// Platform config file location, if a home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "quill", "quill").map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Read a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.grammar()?;
        Ok(config)
    }

    /// Load from the platform location plus environment overrides.
    /// Never fails: problems are logged and defaults are used.
    pub fn load() -> Self {
        let config = match Self::default_path() {
            Some(path) => match Self::load_from(&path) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "config loaded");
                    config
                }
                Err(e) => {
                    tracing::warn!("{}; using defaults", e);
                    Self::default()
                }
            },
            None => Self::default(),
        };

        config.with_endpoint_override(std::env::var(ENDPOINT_ENV).ok())
    }

    pub fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.endpoint = endpoint.trim().to_string();
        }
        self
    }

    pub fn grammar(&self) -> Result<Grammar, HighlightError> {
        self.grammar.parse()
    }
}
