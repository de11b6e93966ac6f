use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Inventory;

#[async_trait]
pub trait ListAllProductsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Inventory, ProductError>;
}
