//! File-backed persistence gateway
//!
//! Persists the settings aggregate as pretty JSON under the resolved
//! storage directory, and provides the file halves of the export/import
//! flow: writing the fixed-name export artifact and reading a
//! user-selected file back as text for the core's `import`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use curator_settings::serializer;
use curator_settings::{GatewayError, PersistenceGateway, Settings};
use tokio::fs;
use tracing::info;

use crate::error::{IoOperation, StorageError, StorageResult};
use crate::paths::PathResolver;

/// Settings gateway persisting to a single JSON file
pub struct FileSettingsGateway {
    settings_file: PathBuf,
}

impl FileSettingsGateway {
    /// Create a gateway at the resolved default location
    pub fn new() -> StorageResult<Self> {
        Ok(Self {
            settings_file: PathResolver::resolve_settings_file()?,
        })
    }

    /// Create a gateway persisting to a specific file
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            settings_file: path,
        }
    }

    /// The file this gateway persists to
    pub fn settings_file(&self) -> &Path {
        &self.settings_file
    }
}

#[async_trait]
impl PersistenceGateway for FileSettingsGateway {
    async fn load(&self) -> Result<Option<Settings>, GatewayError> {
        if !self.settings_file.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.settings_file).await.map_err(|e| {
            StorageError::io_error(self.settings_file.clone(), IoOperation::Read, e)
        })?;
        let settings = serializer::import(&content)
            .map_err(|e| StorageError::parse_error(self.settings_file.clone(), e.to_string()))?;

        info!("Loaded settings from {}", self.settings_file.display());
        Ok(Some(settings))
    }

    async fn save(&self, settings: &Settings) -> Result<(), GatewayError> {
        if let Some(parent) = self.settings_file.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::io_error(parent.to_path_buf(), IoOperation::CreateDir, e)
            })?;
        }

        let content = serializer::export(settings)?;
        fs::write(&self.settings_file, content).await.map_err(|e| {
            StorageError::io_error(self.settings_file.clone(), IoOperation::Write, e)
        })?;

        info!("Saved settings to {}", self.settings_file.display());
        Ok(())
    }
}

/// Write the export artifact under its fixed name into `dir`
///
/// Returns the path of the written file
/// (`<dir>/curriculum-curator-settings.json`).
pub async fn write_export_file(dir: &Path, settings: &Settings) -> StorageResult<PathBuf> {
    fs::create_dir_all(dir)
        .await
        .map_err(|e| StorageError::io_error(dir.to_path_buf(), IoOperation::CreateDir, e))?;

    let path = dir.join(serializer::export_file_name());
    let content = serializer::export(settings)
        .map_err(|e| StorageError::parse_error(path.clone(), e.to_string()))?;
    fs::write(&path, content)
        .await
        .map_err(|e| StorageError::io_error(path.clone(), IoOperation::Write, e))?;

    info!("Wrote settings export to {}", path.display());
    Ok(path)
}

/// Read a user-selected file as text for the core's import
pub async fn read_import_file(path: &Path) -> StorageResult<String> {
    fs::read_to_string(path)
        .await
        .map_err(|e| StorageError::io_error(path.to_path_buf(), IoOperation::Read, e))
}
