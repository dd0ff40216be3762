//! Trait definitions for dependency injection

use crate::appcenter::types::{App, ReleaseInfo};
use crate::core::{AppCenterResult, OwnerType};
use async_trait::async_trait;

/// Trait for configuration access
///
/// Provides read-only access to application configuration.
/// Implementations should be thread-safe (Send + Sync).
pub trait ConfigProvider: Send + Sync {
    /// Base URL of the App Center API
    fn api_url(&self) -> &str;

    /// Base URL of the App Center dashboard, used for release links
    fn web_url(&self) -> &str;

    /// Owner type used when none is given
    fn default_owner_type(&self) -> OwnerType;

    /// Owner name used when none is given (optional)
    fn default_owner_name(&self) -> Option<&str>;
}

/// Trait for App Center API operations
///
/// Lookups return `Ok(None)` when the service has nothing to give back,
/// whatever the reason. `Err` is reserved for requests that could not be
/// built at all.
#[async_trait]
pub trait AppCenterProvider: Send + Sync {
    /// Get the latest release of an app
    async fn get_latest_release(
        &self,
        api_token: &str,
        owner_name: &str,
        app_name: &str,
    ) -> AppCenterResult<Option<ReleaseInfo>>;

    /// List the apps visible to the token (empty on any failure)
    async fn list_apps(&self, api_token: &str) -> Vec<App>;
}
