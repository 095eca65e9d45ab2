//! Application configuration persistence
//!
//! Stored as pretty JSON in `<home>/config.json`, where `<home>` is
//! `~/.kotonote` unless overridden. Loading falls back to defaults on
//! any I/O or parse error; saving is explicit and loud.

use crate::error::CoreError;
use crate::store::{JsonFileStore, SentenceStore, SheetStore};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Color scheme for the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Dark theme (default)
    #[default]
    Dark,
    /// Light theme
    Light,
}

/// Which backing store holds the notebook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Backend {
    /// Local JSON file; `None` means `<home>/sentences.json`
    File { path: Option<PathBuf> },
    /// Remote sheet behind a row-oriented JSON proxy
    Sheet {
        base_url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        api_key: Option<String>,
    },
}

impl Default for Backend {
    fn default() -> Self {
        Backend::File { path: None }
    }
}

/// kotonote user configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub backend: Backend,

    #[serde(default)]
    pub color_scheme: ColorScheme,
}

impl AppConfig {
    /// Default home directory: `~/.kotonote`
    pub fn default_home() -> Result<PathBuf, CoreError> {
        dirs::home_dir()
            .map(|home| home.join(".kotonote"))
            .ok_or(CoreError::HomeNotFound)
    }

    /// Load configuration from `<home>/config.json`.
    /// Returns defaults on any I/O or parse error (graceful degradation).
    pub fn load(home: &Path) -> Self {
        let path = home.join("config.json");
        match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Persist configuration to `<home>/config.json`.
    pub fn save(&self, home: &Path) -> Result<()> {
        std::fs::create_dir_all(home).context("Failed to create kotonote home directory")?;
        let path = home.join("config.json");
        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// Build the store adapter this configuration selects.
    ///
    /// For a sheet backend the header bootstrap runs here, so callers
    /// always receive a store whose data rows start at row 2.
    pub async fn open_store(&self, home: &Path) -> Result<Box<dyn SentenceStore>, CoreError> {
        match &self.backend {
            Backend::File { path } => {
                let path = path
                    .clone()
                    .unwrap_or_else(|| home.join("sentences.json"));
                Ok(Box::new(JsonFileStore::new(path)))
            }
            Backend::Sheet { base_url, api_key } => {
                if base_url.is_empty() {
                    return Err(CoreError::InvalidConfig {
                        message: "sheet backend requires a base_url".to_string(),
                    });
                }
                let store = SheetStore::new(base_url, api_key.clone());
                store.ensure_header().await?;
                Ok(Box::new(store))
            }
        }
    }
}
