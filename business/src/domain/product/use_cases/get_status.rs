use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::value_objects::{ProductPriority, StockStatus};

pub struct GetProductStatusParams {
    pub product_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductStatusReport {
    pub product_id: String,
    pub stock_quantity: u64,
    pub status: StockStatus,
    pub priority: ProductPriority,
}

#[async_trait]
pub trait GetProductStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetProductStatusParams,
    ) -> Result<ProductStatusReport, ProductError>;
}
