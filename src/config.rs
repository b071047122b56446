/// Application configuration
///
/// Read from `config.toml` in the platform config directory, then
/// overridden by environment variables:
/// - `APOD_API_KEY` replaces `api.api_key`
/// - `APOD_BASE_URL` replaces `api.base_url`

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::error::ConfigError;

const DEFAULT_BASE_URL: &str = "https://api.nasa.gov/planetary/apod";
const DEFAULT_API_KEY: &str = "DEMO_KEY";

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub gallery: GalleryConfig,
}

/// Endpoint and credential for the record API
#[derive(Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Opaque credential, never logged
    pub api_key: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
        }
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Initial values for the date inputs
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct GalleryConfig {
    /// Days between the default start date and today
    pub initial_span_days: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self { initial_span_days: 8 }
    }
}

impl Config {
    /// Path to the config file:
    /// - Linux: ~/.config/apod-gallery/config.toml
    /// - macOS: ~/Library/Application Support/apod-gallery/config.toml
    /// - Windows: %APPDATA%\apod-gallery\config.toml
    pub fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("apod-gallery").join("config.toml"))
    }

    /// Load the config file (defaults if absent) and apply env overrides
    pub fn load() -> Result<Self, ConfigError> {
        let config = match Self::config_file_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)
                    .map_err(|source| ConfigError::Read { path: path.clone(), source })?;
                tracing::info!(path = %path.display(), "loaded config file");
                Self::from_toml_str(&content)?
            }
            _ => Self::default(),
        };

        Ok(config.with_overrides(|name| std::env::var(name).ok()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply overrides from a variable lookup (the environment in production)
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = lookup("APOD_API_KEY").filter(|v| !v.trim().is_empty()) {
            self.api.api_key = key;
        }
        if let Some(url) = lookup("APOD_BASE_URL").filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url;
        }
        self
    }
}
