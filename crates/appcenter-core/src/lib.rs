//! Core types shared by the appcenter-fetch library and CLI.

pub mod core;
pub mod request;

pub use crate::core::credentials::CredentialStore;
pub use crate::core::error_help::{format_error_with_help, ErrorHelp};
pub use crate::core::{AppCenterError, AppCenterResult};
pub use request::{validate_api_token, FetchRequest, FetchRequestBuilder, OwnerType};
