use crate::appcenter::{DEFAULT_API_URL, DEFAULT_WEB_URL};
use crate::core::path::{config_file, ensure_dir};
use crate::core::{AppCenterError, AppCenterResult, OwnerType};
use crate::di::ConfigProvider;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// App Center API base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// App Center dashboard base URL, used to build release links
    #[serde(default = "default_web_url")]
    pub web_url: String,

    /// Owner type used when `--owner-type` is not given
    #[serde(default)]
    pub default_owner_type: OwnerType,

    /// Owner name used when `--owner-name` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_owner_name: Option<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_web_url() -> String {
    DEFAULT_WEB_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            web_url: default_web_url(),
            default_owner_type: OwnerType::default(),
            default_owner_name: None,
        }
    }
}

impl Config {
    /// Load config from the platform-specific config directory
    ///
    /// Config locations:
    /// - Windows: %APPDATA%\appcenter-fetch\config.yaml
    /// - Linux: ~/.config/appcenter-fetch/config.yaml
    /// - macOS: ~/Library/Application Support/appcenter-fetch/config.yaml
    ///
    /// A missing file yields the defaults; nothing is written.
    pub fn load() -> AppCenterResult<Self> {
        Self::load_from(&config_file()?)
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> AppCenterResult<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppCenterError::Config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Save config to the platform-specific config directory
    pub fn save(&self) -> AppCenterResult<()> {
        self.save_to(&config_file()?)
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &Path) -> AppCenterResult<()> {
        let config_dir = path
            .parent()
            .ok_or_else(|| AppCenterError::Path("Invalid config path".to_string()))?;

        // Ensure config directory exists
        ensure_dir(config_dir)?;

        let content = serde_yaml::to_string(self)
            .map_err(|e| AppCenterError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)?;
        Ok(())
    }
}

// Implement ConfigProvider trait
impl ConfigProvider for Config {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    fn web_url(&self) -> &str {
        &self.web_url
    }

    fn default_owner_type(&self) -> OwnerType {
        self.default_owner_type
    }

    fn default_owner_name(&self) -> Option<&str> {
        self.default_owner_name.as_deref()
    }
}
