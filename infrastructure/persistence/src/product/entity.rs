use serde::{Deserialize, Serialize};

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::value_objects::{ProductCategory, ProductPriority};

/// On-disk shape of one product record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductEntity {
    pub product_id: String,
    pub name: String,
    pub stock_quantity: u64,
    pub min_threshold: u64,
    pub restock_quantity: u64,
    pub priority: String,
    pub category: String,
}

impl ProductEntity {
    pub fn from_domain(product: &Product) -> Self {
        Self {
            product_id: product.product_id.clone(),
            name: product.name.clone(),
            stock_quantity: product.stock_quantity,
            min_threshold: product.min_threshold,
            restock_quantity: product.restock_quantity,
            priority: product.priority.to_string(),
            category: product.category.to_string(),
        }
    }

    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let priority = self.priority.parse::<ProductPriority>().map_err(|e| {
            tracing::error!("Corrupt record {}: {}", self.product_id, e);
            RepositoryError::StorageUnavailable
        })?;
        let category = self.category.parse::<ProductCategory>().map_err(|e| {
            tracing::error!("Corrupt record {}: {}", self.product_id, e);
            RepositoryError::StorageUnavailable
        })?;

        Ok(Product::from_repository(
            self.product_id,
            self.name,
            self.stock_quantity,
            self.min_threshold,
            self.restock_quantity,
            priority,
            category,
        ))
    }
}
