use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

pub struct PurchaseProductParams {
    pub product_id: String,
    pub quantity: i64,
}

#[async_trait]
pub trait PurchaseProductUseCase: Send + Sync {
    /// Returns the stock left after the purchase and any automatic restock.
    async fn execute(&self, params: PurchaseProductParams) -> Result<u64, ProductError>;
}
