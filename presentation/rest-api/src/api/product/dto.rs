use std::collections::BTreeMap;

use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::product::model::{Inventory, Product};
use business::domain::product::use_cases::get_status::ProductStatusReport;
use business::domain::product::value_objects::{ProductCategory, ProductPriority, StockStatus};

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum ProductPriorityDto {
    #[oai(rename = "high")]
    High,
    #[oai(rename = "low")]
    Low,
}

impl From<ProductPriority> for ProductPriorityDto {
    fn from(priority: ProductPriority) -> Self {
        match priority {
            ProductPriority::High => ProductPriorityDto::High,
            ProductPriority::Low => ProductPriorityDto::Low,
        }
    }
}

impl From<ProductPriorityDto> for ProductPriority {
    fn from(dto: ProductPriorityDto) -> Self {
        match dto {
            ProductPriorityDto::High => ProductPriority::High,
            ProductPriorityDto::Low => ProductPriority::Low,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum ProductCategoryDto {
    #[oai(rename = "high_volume")]
    HighVolume,
    #[oai(rename = "low_volume")]
    LowVolume,
}

impl From<ProductCategory> for ProductCategoryDto {
    fn from(category: ProductCategory) -> Self {
        match category {
            ProductCategory::HighVolume => ProductCategoryDto::HighVolume,
            ProductCategory::LowVolume => ProductCategoryDto::LowVolume,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum StockStatusDto {
    #[oai(rename = "ok")]
    Ok,
    #[oai(rename = "below_threshold")]
    BelowThreshold,
    #[oai(rename = "out_of_stock")]
    OutOfStock,
}

impl From<StockStatus> for StockStatusDto {
    fn from(status: StockStatus) -> Self {
        match status {
            StockStatus::Ok => StockStatusDto::Ok,
            StockStatus::BelowThreshold => StockStatusDto::BelowThreshold,
            StockStatus::OutOfStock => StockStatusDto::OutOfStock,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Unique product identifier
    pub product_id: String,
    /// Product name
    pub name: String,
    /// Units currently on hand (must not be negative)
    pub stock_quantity: i64,
    /// Stock level below which the product counts as low (must not be negative)
    pub min_threshold: i64,
    /// Units added by one restock (must not be negative)
    pub restock_quantity: i64,
    /// "high" products restock automatically, "low" products manually
    pub priority: ProductPriorityDto,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub product_id: String,
    pub name: String,
    pub stock_quantity: u64,
    pub min_threshold: u64,
    pub restock_quantity: u64,
    pub priority: ProductPriorityDto,
    /// Fixed at creation from the restock quantity
    pub category: ProductCategoryDto,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            product_id: product.product_id,
            name: product.name,
            stock_quantity: product.stock_quantity,
            min_threshold: product.min_threshold,
            restock_quantity: product.restock_quantity,
            priority: product.priority.into(),
            category: product.category.into(),
        }
    }
}

/// Result of a successful creation.
#[derive(Debug, Clone, Object)]
pub struct ProductCreatedResponse {
    pub message: String,
    /// The product as stored, after creation policy was applied
    pub product: ProductResponse,
}

/// Every stored product keyed by its id.
pub type InventoryResponse = BTreeMap<String, ProductResponse>;

pub fn inventory_response(inventory: Inventory) -> InventoryResponse {
    inventory
        .into_iter()
        .map(|(id, product)| (id, product.into()))
        .collect()
}

#[derive(Debug, Clone, Object)]
pub struct ProductStatusResponse {
    pub product_id: String,
    pub stock_quantity: u64,
    /// High priority products always report "ok"
    pub status: StockStatusDto,
    pub priority: ProductPriorityDto,
}

impl From<ProductStatusReport> for ProductStatusResponse {
    fn from(report: ProductStatusReport) -> Self {
        Self {
            product_id: report.product_id,
            stock_quantity: report.stock_quantity,
            status: report.status.into(),
            priority: report.priority.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PurchaseRequest {
    /// Units to buy (must be positive)
    pub quantity: i64,
}

/// Stock level after a purchase or a manual restock.
#[derive(Debug, Clone, Object)]
pub struct StockUpdateResponse {
    pub message: String,
    pub updated_stock: u64,
}
