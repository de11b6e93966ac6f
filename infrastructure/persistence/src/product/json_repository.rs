use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Inventory;
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;
use crate::storage::staging_path;

/// Keeps the whole inventory in one pretty-printed JSON object keyed by product id.
pub struct JsonFileProductRepository {
    data_file: PathBuf,
}

impl JsonFileProductRepository {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }
}

#[async_trait]
impl ProductRepository for JsonFileProductRepository {
    async fn load(&self) -> Result<Inventory, RepositoryError> {
        let raw = match tokio::fs::read_to_string(&self.data_file).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Inventory::new()),
            Err(e) => {
                tracing::error!("Failed to read {}: {}", self.data_file.display(), e);
                return Err(RepositoryError::StorageUnavailable);
            }
        };

        let entities: BTreeMap<String, ProductEntity> =
            serde_json::from_str(&raw).map_err(|e| {
                tracing::error!("Failed to parse {}: {}", self.data_file.display(), e);
                RepositoryError::StorageUnavailable
            })?;

        entities
            .into_iter()
            .map(|(id, entity)| entity.into_domain().map(|product| (id, product)))
            .collect()
    }

    async fn save(&self, inventory: &Inventory) -> Result<(), RepositoryError> {
        let entities: BTreeMap<&str, ProductEntity> = inventory
            .iter()
            .map(|(id, product)| (id.as_str(), ProductEntity::from_domain(product)))
            .collect();

        let json = serde_json::to_string_pretty(&entities).map_err(|e| {
            tracing::error!("Failed to serialize inventory: {}", e);
            RepositoryError::StorageUnavailable
        })?;

        // Stage then rename so readers never see a half-written file.
        let staged = staging_path(&self.data_file);
        tokio::fs::write(&staged, json).await.map_err(|e| {
            tracing::error!("Failed to write {}: {}", staged.display(), e);
            RepositoryError::StorageUnavailable
        })?;
        tokio::fs::rename(&staged, &self.data_file)
            .await
            .map_err(|e| {
                tracing::error!("Failed to replace {}: {}", self.data_file.display(), e);
                RepositoryError::StorageUnavailable
            })?;

        Ok(())
    }
}
