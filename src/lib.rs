//! appcenter-fetch: latest release metadata from App Center
//!
//! This crate provides the library behind the `appcenter-fetch` binary,
//! re-exporting core types from `appcenter-core` and organizing the App
//! Center client, the version lookup and configuration.

pub use appcenter_core::{
    format_error_with_help, validate_api_token, AppCenterError, AppCenterResult, CredentialStore,
    ErrorHelp, FetchRequest, FetchRequestBuilder, OwnerType,
};

/// Core module re-exported from `appcenter-core`.
pub mod core;

/// Configuration management.
pub mod config;

/// App Center API client and wire types.
pub mod appcenter;

/// Version lookup and app selection.
pub mod fetch;

/// Dependency injection infrastructure.
pub mod di;
