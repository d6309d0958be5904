//! Client configuration.
//!
//! Reads/writes `~/.tienda/config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tienda_client::Endpoints;

/// Client configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Server URL (e.g. "http://localhost:8000").
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub server: String,

    /// Raw `Cookie` header of a logged-in browser session.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cookie: String,

    /// CSRF token sent with POST requests.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub csrf_token: String,

    /// Message locale ("es" or "en").
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub locale: String,

    /// Route overrides; unset routes keep their defaults.
    #[serde(default)]
    pub endpoints: Endpoints,
}

impl ClientConfig {
    /// Default config file path: ~/.tienda/config.toml.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }

    /// Load config from disk, or return default if file doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to disk.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Locale to use, falling back to the catalog default.
    pub fn locale(&self) -> &str {
        if self.locale.is_empty() {
            tienda_inventario::i18n_strings::DEFAULT_LOCALE
        } else {
            &self.locale
        }
    }
}

/// Return the Tienda config directory (~/.tienda).
fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".tienda")
}
