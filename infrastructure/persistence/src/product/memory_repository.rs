use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Inventory;
use business::domain::product::repository::ProductRepository;

/// Process-local store. State is lost on shutdown.
#[derive(Default)]
pub struct InMemoryProductRepository {
    inventory: RwLock<Inventory>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn load(&self) -> Result<Inventory, RepositoryError> {
        Ok(self.inventory.read().await.clone())
    }

    async fn save(&self, inventory: &Inventory) -> Result<(), RepositoryError> {
        *self.inventory.write().await = inventory.clone();
        Ok(())
    }
}
