//! User-facing suggestions attached to errors before they are printed.

use crate::core::error::AppCenterError;

/// A hint shown below an error message.
pub trait ErrorHelp {
    /// Suggestion for resolving the error, if one applies.
    fn help(&self) -> Option<String>;
}

impl ErrorHelp for AppCenterError {
    fn help(&self) -> Option<String> {
        match self {
            AppCenterError::Validation(msg) if msg.contains("api_token") => Some(
                "Pass --api-token, set APPCENTER_API_TOKEN, or run `appcenter-fetch login`"
                    .to_string(),
            ),
            AppCenterError::Validation(msg) if msg.contains("owner_name") => {
                Some("Pass --owner-name or set APPCENTER_OWNER_NAME".to_string())
            }
            AppCenterError::Validation(msg) if msg.contains("app_name") => {
                Some("Pass --app-name or set APPCENTER_APP_NAME".to_string())
            }
            AppCenterError::NoVersionsFound { .. } => Some(
                "Check the owner and app names, the owner type, and that the token can read the app"
                    .to_string(),
            ),
            AppCenterError::NoAppsFound => {
                Some("Check that the API token is valid and has access to at least one app".to_string())
            }
            AppCenterError::Credential(_) => Some(
                "The OS keychain may be unavailable; pass the token with --api-token instead"
                    .to_string(),
            ),
            AppCenterError::Config(msg) if msg.starts_with("Invalid API token") => Some(
                "The token must be plain text without line breaks or control characters"
                    .to_string(),
            ),
            AppCenterError::Yaml(_) | AppCenterError::Config(_) => {
                Some("Inspect the config with `appcenter-fetch config show`".to_string())
            }
            _ => None,
        }
    }
}

/// Format an error with its suggestion (if any) for display on stderr.
pub fn format_error_with_help(err: &AppCenterError) -> String {
    match err.help() {
        Some(help) => format!("Error: {}\n\n  help: {}", err, help),
        None => format!("Error: {}", err),
    }
}
