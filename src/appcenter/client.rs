//! App Center API client implementation

use crate::appcenter::types::{App, ReleaseInfo};
use crate::core::{AppCenterError, AppCenterResult};
use crate::di::traits::{AppCenterProvider, ConfigProvider};
use async_trait::async_trait;
use reqwest::{header, Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;

/// Default App Center API host
pub const DEFAULT_API_URL: &str = "https://api.appcenter.ms";

/// Header carrying the API token on every request
const API_TOKEN_HEADER: &str = "X-API-Token";

/// App Center API client
///
/// Every lookup is a single GET. Anything other than `200 OK` with a body of
/// the expected shape is reported as "nothing there" (`Ok(None)`), including
/// transport failures; callers decide what absence means.
pub struct AppCenterClient {
    http_client: HttpClient,
    api_url: String,
}

impl AppCenterClient {
    /// Create a client for the API host in the configuration
    pub fn new(config: &dyn ConfigProvider) -> AppCenterResult<Self> {
        Self::with_api_url(config.api_url())
    }

    /// Create a client for an explicit API host
    pub fn with_api_url(api_url: &str) -> AppCenterResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(concat!("appcenter-fetch/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let http_client = HttpClient::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| AppCenterError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the latest release of an app
    pub async fn get_latest_release(
        &self,
        api_token: &str,
        owner_name: &str,
        app_name: &str,
    ) -> AppCenterResult<Option<ReleaseInfo>> {
        let url = format!("{}/releases/latest", self.app_url(owner_name, app_name));
        self.api_get(api_token, &url).await
    }

    /// List the apps the token can see. Never fails: errors yield an empty list.
    pub async fn list_apps(&self, api_token: &str) -> Vec<App> {
        let url = format!("{}/v0.1/apps", self.api_url);
        match self.api_get::<Vec<App>>(api_token, &url).await {
            Ok(Some(apps)) => apps,
            Ok(None) => {
                tracing::warn!("Could not list apps");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("Could not list apps: {}", e);
                Vec::new()
            }
        }
    }

    fn app_url(&self, owner_name: &str, app_name: &str) -> String {
        format!(
            "{}/v0.1/apps/{}/{}",
            self.api_url,
            urlencoding::encode(owner_name),
            urlencoding::encode(app_name)
        )
    }

    /// Make an authenticated GET request and parse a `200 OK` JSON response
    async fn api_get<T: DeserializeOwned>(
        &self,
        api_token: &str,
        url: &str,
    ) -> AppCenterResult<Option<T>> {
        let mut token = header::HeaderValue::from_str(api_token)
            .map_err(|e| AppCenterError::Config(format!("Invalid API token: {}", e)))?;
        token.set_sensitive(true);

        tracing::debug!("GET {}", url);
        let response = match self
            .http_client
            .get(url)
            .header(API_TOKEN_HEADER, token)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("App Center request failed: {}", e);
                return Ok(None);
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            tracing::debug!("App Center responded with HTTP {} for {}", status, url);
            return Ok(None);
        }

        match response.json::<T>().await {
            Ok(body) => Ok(Some(body)),
            Err(e) => {
                tracing::warn!("Failed to parse App Center response: {}", e);
                Ok(None)
            }
        }
    }
}

// Implement AppCenterProvider trait
#[async_trait]
impl AppCenterProvider for AppCenterClient {
    async fn get_latest_release(
        &self,
        api_token: &str,
        owner_name: &str,
        app_name: &str,
    ) -> AppCenterResult<Option<ReleaseInfo>> {
        Self::get_latest_release(self, api_token, owner_name, app_name).await
    }

    async fn list_apps(&self, api_token: &str) -> Vec<App> {
        Self::list_apps(self, api_token).await
    }
}
