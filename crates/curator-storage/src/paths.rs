//! Cross-platform storage path resolution

use crate::error::{StorageError, StorageResult};
use std::path::PathBuf;

/// Environment variable overriding the storage directory
pub const HOME_ENV_VAR: &str = "CURRICULUM_CURATOR_HOME";

/// File name the settings aggregate persists under
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Path resolver for the settings storage directory
pub struct PathResolver;

impl PathResolver {
    /// Resolve the storage directory
    ///
    /// Priority:
    /// 1. `CURRICULUM_CURATOR_HOME` environment variable
    /// 2. platform config dir (`~/.config/curriculum-curator` on Linux)
    /// 3. `~/.curriculum-curator` fallback
    pub fn resolve_storage_dir() -> StorageResult<PathBuf> {
        if let Ok(home_override) = std::env::var(HOME_ENV_VAR) {
            return Ok(PathBuf::from(home_override));
        }

        if let Some(config_dir) = dirs::config_dir() {
            return Ok(config_dir.join("curriculum-curator"));
        }

        if let Some(home_dir) = dirs::home_dir() {
            return Ok(home_dir.join(".curriculum-curator"));
        }

        Err(StorageError::path_resolution_error(
            "Could not determine home directory",
        ))
    }

    /// Resolve the settings file path inside the storage directory
    pub fn resolve_settings_file() -> StorageResult<PathBuf> {
        Ok(Self::resolve_storage_dir()?.join(SETTINGS_FILE_NAME))
    }
}
