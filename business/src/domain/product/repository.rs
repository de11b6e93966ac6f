use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Inventory;

/// Whole-inventory store. Every operation reads and writes the full mapping.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn load(&self) -> Result<Inventory, RepositoryError>;
    async fn save(&self, inventory: &Inventory) -> Result<(), RepositoryError>;
}
