use thiserror::Error;

pub type AppCenterResult<T> = Result<T, AppCenterError>;

#[derive(Error, Debug)]
pub enum AppCenterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Credential error: {0}")]
    Credential(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    /// A required parameter is missing or malformed.
    /// The message is shown to the user as-is.
    #[error("{0}")]
    Validation(String),

    /// The latest-release lookup did not produce a release.
    ///
    /// Forbidden, not found, transport failures and unreadable bodies all end
    /// up here with the same message.
    #[error("No versions found for '{app_name}' owned by {owner_name}")]
    NoVersionsFound { app_name: String, owner_name: String },

    #[error("No apps found for the provided API token")]
    NoAppsFound,
}

impl AppCenterError {
    pub fn no_versions_found(app_name: &str, owner_name: &str) -> Self {
        Self::NoVersionsFound {
            app_name: app_name.to_string(),
            owner_name: owner_name.to_string(),
        }
    }
}
