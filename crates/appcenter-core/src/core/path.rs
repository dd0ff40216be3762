use crate::core::error::{AppCenterError, AppCenterResult};
use std::path::{Path, PathBuf};

/// Get the appcenter-fetch home directory
///
/// Platform-specific locations:
/// - Windows: %APPDATA%\appcenter-fetch
/// - Linux: ~/.config/appcenter-fetch
/// - macOS: ~/Library/Application Support/appcenter-fetch
pub fn appcenter_home() -> AppCenterResult<PathBuf> {
    let config_dir = dirs::config_dir().ok_or_else(|| {
        AppCenterError::Path("Could not determine config directory".to_string())
    })?;
    Ok(config_dir.join("appcenter-fetch"))
}

/// Get the config file path (`<home>/config.yaml`)
pub fn config_file() -> AppCenterResult<PathBuf> {
    Ok(appcenter_home()?.join("config.yaml"))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> AppCenterResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
