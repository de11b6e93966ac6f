use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage.directory_error")]
    DirectoryError,
    #[error("storage.initialization_error")]
    InitializationError,
}

/// Configuration for the flat-file storage
pub struct StorageConfig {
    pub data_file: PathBuf,
}

impl StorageConfig {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }
}

/// Creates the data file with an empty mapping when no prior state exists
pub async fn init_storage(config: &StorageConfig) -> Result<(), StorageError> {
    let path = config.data_file.as_path();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|_| StorageError::DirectoryError)?;
    }

    if tokio::fs::try_exists(path)
        .await
        .map_err(|_| StorageError::InitializationError)?
    {
        return Ok(());
    }

    tokio::fs::write(path, b"{}")
        .await
        .map_err(|_| StorageError::InitializationError)?;
    tracing::info!("Initialized empty inventory at {}", path.display());

    Ok(())
}

/// Sibling path used to stage a write before it replaces the data file
pub fn staging_path(data_file: &Path) -> PathBuf {
    let mut name = data_file.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    data_file.with_file_name(name)
}
