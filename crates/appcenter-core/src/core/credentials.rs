use crate::core::{AppCenterError, AppCenterResult};
use keyring::Entry;

/// Service name for keyring entries
const KEYRING_SERVICE: &str = "appcenter-fetch";

/// Keyring entry holding the App Center API token
pub const API_TOKEN_KEY: &str = "api_token";

/// Manages credential storage using OS keychain
///
/// Platform support:
/// - macOS: Keychain
/// - Windows: Credential Manager
/// - Linux: kernel keyutils
pub struct CredentialStore;

impl CredentialStore {
    /// Store a credential in the OS keychain
    pub fn store(key: &str, value: &str) -> AppCenterResult<()> {
        let entry = Entry::new(KEYRING_SERVICE, key).map_err(|e| {
            AppCenterError::Credential(format!("Failed to create keyring entry: {}", e))
        })?;

        entry.set_password(value).map_err(|e| {
            AppCenterError::Credential(format!("Failed to store credential in keychain: {}", e))
        })?;

        Ok(())
    }

    /// Retrieve a credential from the OS keychain
    pub fn retrieve(key: &str) -> AppCenterResult<String> {
        let entry = Entry::new(KEYRING_SERVICE, key).map_err(|e| {
            AppCenterError::Credential(format!("Failed to create keyring entry: {}", e))
        })?;

        entry.get_password().map_err(|e| {
            AppCenterError::Credential(format!(
                "Failed to retrieve credential from keychain: {}",
                e
            ))
        })
    }

    /// Delete a credential from the OS keychain
    pub fn delete(key: &str) -> AppCenterResult<()> {
        let entry = Entry::new(KEYRING_SERVICE, key).map_err(|e| {
            AppCenterError::Credential(format!("Failed to create keyring entry: {}", e))
        })?;

        entry.delete_credential().map_err(|e| {
            AppCenterError::Credential(format!("Failed to delete credential from keychain: {}", e))
        })?;

        Ok(())
    }

    /// Check if a credential exists in the keychain
    pub fn exists(key: &str) -> bool {
        Self::retrieve(key).is_ok()
    }

    /// The API token saved by `login`, if the keychain has one.
    ///
    /// Any keychain failure reads as "no token".
    pub fn stored_api_token() -> Option<String> {
        match Self::retrieve(API_TOKEN_KEY) {
            Ok(token) if !token.is_empty() => Some(token),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!("No stored API token: {}", e);
                None
            }
        }
    }
}
