//! Latest-release lookup and its mapping to [`FetchResult`]

use crate::appcenter::types::ReleaseInfo;
use crate::appcenter::url::release_url;
use crate::core::{AppCenterError, AppCenterResult, FetchRequest};
use crate::di::traits::AppCenterProvider;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;

/// Normalized version metadata of a release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResult {
    pub id: u64,
    /// Marketing version (the service's `short_version`)
    pub version: String,
    /// Build number (the service's `version`)
    pub build_number: String,
    pub release_notes: Option<String>,
    pub release_url: String,
}

/// Looks up releases through an [`AppCenterProvider`]
pub struct VersionFetcher {
    provider: Arc<dyn AppCenterProvider>,
    web_url: String,
}

impl VersionFetcher {
    pub fn new(provider: Arc<dyn AppCenterProvider>, web_url: &str) -> Self {
        Self {
            provider,
            web_url: web_url.to_string(),
        }
    }

    /// Fetch the latest release of the app in `request`.
    ///
    /// Always exactly one request. `request.version()` is accepted but does
    /// not narrow the lookup. Any failure to obtain a release surfaces as
    /// [`AppCenterError::NoVersionsFound`].
    #[instrument(skip_all, fields(owner = request.owner_name(), app = request.app_name()))]
    pub async fn fetch(&self, request: &FetchRequest) -> AppCenterResult<FetchResult> {
        let release = self
            .provider
            .get_latest_release(request.api_token(), request.owner_name(), request.app_name())
            .await?
            .ok_or_else(|| {
                AppCenterError::no_versions_found(request.app_name(), request.owner_name())
            })?;
        tracing::debug!("Found release {} ({})", release.id, release.short_version);

        Ok(self.to_result(request, release))
    }

    fn to_result(&self, request: &FetchRequest, release: ReleaseInfo) -> FetchResult {
        FetchResult {
            id: release.id,
            version: release.short_version,
            build_number: release.version,
            release_notes: release.release_notes,
            release_url: release_url(
                &self.web_url,
                request.owner_type(),
                request.owner_name(),
                request.app_name(),
                release.id,
            ),
        }
    }
}
