//! App Center integration
//!
//! This module provides functionality for interacting with App Center to:
//! - Fetch the latest release of an app
//! - List the apps visible to an API token
//! - Build dashboard links for releases

pub mod client;
pub mod types;
pub mod url;

pub use client::{AppCenterClient, DEFAULT_API_URL};
pub use types::{App, AppOwner, ReleaseInfo};
pub use url::{release_url, DEFAULT_WEB_URL};
