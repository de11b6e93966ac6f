use std::env;
use std::sync::Arc;

use business::domain::product::repository::ProductRepository;
use persistence::product::json_repository::JsonFileProductRepository;
use persistence::product::memory_repository::InMemoryProductRepository;
use persistence::storage::{StorageConfig, init_storage};

/// Which store backs the inventory
#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    File(String),
    Memory,
}

impl StorageBackend {
    /// Load storage selection from environment variables
    ///
    /// Environment variables:
    /// - STORAGE_BACKEND: "file" or "memory" (default: "file")
    /// - STORAGE_FILE: JSON data file path (default: "storage.json")
    pub fn from_env() -> anyhow::Result<Self> {
        let backend = env::var("STORAGE_BACKEND").unwrap_or_else(|_| "file".to_string());
        let data_file = env::var("STORAGE_FILE").unwrap_or_else(|_| "storage.json".to_string());
        Self::parse(&backend, data_file)
    }

    fn parse(backend: &str, data_file: String) -> anyhow::Result<Self> {
        match backend {
            "file" => Ok(StorageBackend::File(data_file)),
            "memory" => Ok(StorageBackend::Memory),
            other => anyhow::bail!("Invalid STORAGE_BACKEND: {}", other),
        }
    }
}

/// Initialize the product store for the configured backend
///
/// # Errors
/// Returns error if the data file cannot be created
pub async fn init_repository(
    backend: &StorageBackend,
) -> anyhow::Result<Arc<dyn ProductRepository>> {
    match backend {
        StorageBackend::File(data_file) => {
            init_storage(&StorageConfig::new(data_file)).await?;
            tracing::info!("Using JSON file storage at {}", data_file);
            Ok(Arc::new(JsonFileProductRepository::new(data_file)))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, inventory is lost on shutdown");
            Ok(Arc::new(InMemoryProductRepository::new()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_select_file_backend_with_path() {
        let backend = StorageBackend::parse("file", "data/inventory.json".to_string()).unwrap();

        assert_eq!(
            backend,
            StorageBackend::File("data/inventory.json".to_string())
        );
    }

    #[test]
    fn should_select_memory_backend() {
        let backend = StorageBackend::parse("memory", "ignored.json".to_string()).unwrap();

        assert_eq!(backend, StorageBackend::Memory);
    }

    #[test]
    fn should_reject_unknown_backend() {
        let result = StorageBackend::parse("postgres", "storage.json".to_string());

        assert!(result.is_err());
    }
}
