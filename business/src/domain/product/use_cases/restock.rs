use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

pub struct RestockProductParams {
    pub product_id: String,
}

#[async_trait]
pub trait RestockProductUseCase: Send + Sync {
    /// Returns the stock after the restock batch was added.
    async fn execute(&self, params: RestockProductParams) -> Result<u64, ProductError>;
}
