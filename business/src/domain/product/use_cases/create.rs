use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductPriority;

/// Quantities arrive signed so that negative input can be rejected explicitly.
pub struct CreateProductParams {
    pub product_id: String,
    pub name: String,
    pub stock_quantity: i64,
    pub min_threshold: i64,
    pub restock_quantity: i64,
    pub priority: ProductPriority,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
