//! Mock implementations of service traits for testing

use super::traits::{AppCenterProvider, ConfigProvider};
use crate::appcenter::types::{App, ReleaseInfo};
use crate::appcenter::{DEFAULT_API_URL, DEFAULT_WEB_URL};
use crate::core::{AppCenterResult, OwnerType};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Mock configuration provider for testing
///
/// # Example
///
/// ```
/// use appcenter_fetch::di::mocks::MockConfigProvider;
/// use appcenter_fetch::di::ConfigProvider;
///
/// let mut config = MockConfigProvider::default();
/// config.web_url = "https://example.test".to_string();
///
/// assert_eq!(config.web_url(), "https://example.test");
/// ```
#[derive(Clone)]
pub struct MockConfigProvider {
    pub api_url: String,
    pub web_url: String,
    pub default_owner_type: OwnerType,
    pub default_owner_name: Option<String>,
}

impl Default for MockConfigProvider {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            web_url: DEFAULT_WEB_URL.to_string(),
            default_owner_type: OwnerType::User,
            default_owner_name: None,
        }
    }
}

impl ConfigProvider for MockConfigProvider {
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

/// A request seen by [`MockAppCenterProvider`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    LatestRelease { owner_name: String, app_name: String },
    ListApps,
}

/// Mock App Center provider for testing
///
/// Serves canned data and records every call. Unset data behaves like a
/// non-200 response.
///
/// # Example
///
/// ```
/// use appcenter_fetch::di::mocks::MockAppCenterProvider;
/// use appcenter_fetch::appcenter::ReleaseInfo;
///
/// let provider = MockAppCenterProvider::new().with_latest_release(ReleaseInfo {
///     id: 1,
///     short_version: "1.0".to_string(),
///     version: "10".to_string(),
///     release_notes: None,
///     app_name: None,
///     app_display_name: None,
///     uploaded_at: None,
///     enabled: None,
/// });
///
/// assert!(provider.calls().is_empty());
/// ```
#[derive(Clone, Default)]
pub struct MockAppCenterProvider {
    latest_release: Option<ReleaseInfo>,
    apps: Vec<App>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockAppCenterProvider {
    /// Create a new mock provider with no data
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latest_release(mut self, release: ReleaseInfo) -> Self {
        self.latest_release = Some(release);
        self
    }

    pub fn with_apps(mut self, apps: Vec<App>) -> Self {
        self.apps = apps;
        self
    }

    /// Calls made so far, in order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: RecordedCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

#[async_trait]
impl AppCenterProvider for MockAppCenterProvider {
    async fn get_latest_release(
        &self,
        _api_token: &str,
        owner_name: &str,
        app_name: &str,
    ) -> AppCenterResult<Option<ReleaseInfo>> {
        self.record(RecordedCall::LatestRelease {
            owner_name: owner_name.to_string(),
            app_name: app_name.to_string(),
        });
        Ok(self.latest_release.clone())
    }

    async fn list_apps(&self, _api_token: &str) -> Vec<App> {
        self.record(RecordedCall::ListApps);
        self.apps.clone()
    }
}
