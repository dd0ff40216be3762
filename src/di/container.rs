//! Service container for dependency injection

use super::traits::{AppCenterProvider, ConfigProvider};
use crate::appcenter::AppCenterClient;
use crate::config::Config;
use crate::core::AppCenterResult;
use crate::fetch::VersionFetcher;
use std::sync::Arc;

/// Service container for dependency injection
///
/// Holds the configuration and the App Center provider as trait objects so
/// tests can swap in mocks.
///
/// # Example (Production)
///
/// ```no_run
/// use appcenter_fetch::di::{ConfigProvider, ServiceContainer};
///
/// # fn example() -> appcenter_fetch::core::AppCenterResult<()> {
/// let container = ServiceContainer::new()?;
/// println!("API: {}", container.config.api_url());
/// # Ok(())
/// # }
/// ```
///
/// # Example (Testing)
///
/// ```
/// use appcenter_fetch::di::{ServiceContainer, mocks::*};
/// use std::sync::Arc;
///
/// let config = Arc::new(MockConfigProvider::default());
/// let appcenter = Arc::new(MockAppCenterProvider::new());
///
/// let container = ServiceContainer::with_providers(config, appcenter);
/// ```
#[derive(Clone)]
pub struct ServiceContainer {
    pub config: Arc<dyn ConfigProvider>,
    pub appcenter: Arc<dyn AppCenterProvider>,
}

impl ServiceContainer {
    /// Create a new service container with production implementations
    ///
    /// Loads the config from disk (defaults when absent) and builds the HTTP
    /// client for its API host.
    pub fn new() -> AppCenterResult<Self> {
        Self::from_config(Config::load()?)
    }

    /// Create a container with production implementations for a given config
    pub fn from_config(config: Config) -> AppCenterResult<Self> {
        let client = AppCenterClient::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            appcenter: Arc::new(client),
        })
    }

    /// Create a service container with custom provider implementations
    pub fn with_providers(
        config: Arc<dyn ConfigProvider>,
        appcenter: Arc<dyn AppCenterProvider>,
    ) -> Self {
        Self { config, appcenter }
    }

    /// Version fetcher wired to this container's services
    pub fn version_fetcher(&self) -> VersionFetcher {
        VersionFetcher::new(self.appcenter.clone(), self.config.web_url())
    }
}
