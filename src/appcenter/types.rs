//! App Center API type definitions

use crate::core::OwnerType;
use serde::{Deserialize, Serialize};

/// Release record returned by `releases/latest`
///
/// Note the service's naming: `short_version` is the marketing version and
/// `version` is the build number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseInfo {
    pub id: u64,
    pub short_version: String,
    pub version: String,
    #[serde(default)]
    pub release_notes: Option<String>,
    #[serde(default)]
    pub app_name: Option<String>,
    #[serde(default)]
    pub app_display_name: Option<String>,
    /// Informational only, kept as the service sends it
    #[serde(default)]
    pub uploaded_at: Option<String>,
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// App visible to an API token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct App {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub os: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    pub owner: AppOwner,
}

/// Owner of an [`App`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppOwner {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "type", default)]
    pub owner_type: OwnerType,
}

impl App {
    /// `owner/app (Display Name)`
    pub fn label(&self) -> String {
        match &self.display_name {
            Some(display) if !display.is_empty() => {
                format!("{}/{} ({})", self.owner.name, self.name, display)
            }
            _ => format!("{}/{}", self.owner.name, self.name),
        }
    }
}
