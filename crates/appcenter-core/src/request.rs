//! Validated input for a version lookup.
//!
//! Parameters arrive as loose strings (flags, environment variables, the
//! keychain, interactive prompts). [`FetchRequestBuilder::build`] checks them
//! in a fixed order and rejects the first bad one with a message naming the
//! field and how to supply it, so nothing downstream has to re-check.

use crate::core::{AppCenterError, AppCenterResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of account that owns an app
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnerType {
    #[default]
    User,
    /// App Center itself reports organizations as `"org"`.
    #[serde(alias = "org")]
    Organization,
}

impl OwnerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OwnerType::User => "user",
            OwnerType::Organization => "organization",
        }
    }
}

impl fmt::Display for OwnerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OwnerType {
    type Err = AppCenterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(OwnerType::User),
            "organization" => Ok(OwnerType::Organization),
            other => Err(AppCenterError::Validation(format!(
                "Only \"user\" and \"organization\" types are allowed, you provided \"{}\"",
                other
            ))),
        }
    }
}

/// A validated lookup request
#[derive(Clone, PartialEq, Eq)]
pub struct FetchRequest {
    api_token: String,
    owner_name: String,
    app_name: String,
    owner_type: OwnerType,
    version: Option<String>,
}

impl FetchRequest {
    pub fn builder() -> FetchRequestBuilder {
        FetchRequestBuilder::default()
    }

    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn owner_type(&self) -> OwnerType {
        self.owner_type
    }

    /// Short version to look up instead of the latest release
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

// Keeps the token out of logs and panic messages.
impl fmt::Debug for FetchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchRequest")
            .field("api_token", &"<redacted>")
            .field("owner_name", &self.owner_name)
            .field("app_name", &self.app_name)
            .field("owner_type", &self.owner_type)
            .field("version", &self.version)
            .finish()
    }
}

/// Collects raw parameters for a [`FetchRequest`]
#[derive(Debug, Clone, Default)]
pub struct FetchRequestBuilder {
    api_token: Option<String>,
    owner_name: Option<String>,
    app_name: Option<String>,
    owner_type: Option<String>,
    version: Option<String>,
}

impl FetchRequestBuilder {
    pub fn api_token(mut self, value: Option<String>) -> Self {
        self.api_token = value;
        self
    }

    pub fn owner_name(mut self, value: Option<String>) -> Self {
        self.owner_name = value;
        self
    }

    pub fn app_name(mut self, value: Option<String>) -> Self {
        self.app_name = value;
        self
    }

    /// Raw owner type; `None` means the default (`user`)
    pub fn owner_type(mut self, value: Option<String>) -> Self {
        self.owner_type = value;
        self
    }

    pub fn version(mut self, value: Option<String>) -> Self {
        self.version = value;
        self
    }

    /// Validate every field, failing on the first bad one.
    pub fn build(self) -> AppCenterResult<FetchRequest> {
        let api_token = validate_api_token(self.api_token)?;
        let owner_name = required(
            self.owner_name,
            "No owner name for App Center given, pass using `owner_name: 'owner name'`",
        )?;
        let owner_type = match self.owner_type {
            Some(raw) => raw.parse::<OwnerType>()?,
            None => OwnerType::default(),
        };
        let app_name = required(
            self.app_name,
            "No app name for App Center given, pass using `app_name: 'app name'`",
        )?;
        let version = self.version.filter(|v| !v.is_empty());

        Ok(FetchRequest {
            api_token,
            owner_name,
            app_name,
            owner_type,
            version,
        })
    }
}

/// Check an API token on its own, for calls made before a full request exists
/// (listing apps to choose from).
pub fn validate_api_token(value: Option<String>) -> AppCenterResult<String> {
    required(
        value,
        "No API token for App Center given, pass using `api_token: 'token'`",
    )
}

fn required(value: Option<String>, message: &str) -> AppCenterResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppCenterError::Validation(message.to_string())),
    }
}
