use std::collections::BTreeMap;

use super::errors::ProductError;
use super::restock_policy;
use super::value_objects::{ProductCategory, ProductPriority};

/// The whole persisted state: every product keyed by its id.
pub type Inventory = BTreeMap<String, Product>;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub product_id: String,
    pub name: String,
    pub stock_quantity: u64,
    pub min_threshold: u64,
    pub restock_quantity: u64,
    pub priority: ProductPriority,
    pub category: ProductCategory,
}

/// A product definition as submitted by a caller, before creation policy runs.
#[derive(Debug, Clone)]
pub struct NewProductProps {
    pub product_id: String,
    pub name: String,
    pub stock_quantity: u64,
    pub min_threshold: u64,
    pub restock_quantity: u64,
    pub priority: ProductPriority,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.product_id.trim().is_empty() {
            return Err(ProductError::IdEmpty);
        }

        Ok(restock_policy::normalize_on_create(props))
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        product_id: String,
        name: String,
        stock_quantity: u64,
        min_threshold: u64,
        restock_quantity: u64,
        priority: ProductPriority,
        category: ProductCategory,
    ) -> Self {
        Self {
            product_id,
            name,
            stock_quantity,
            min_threshold,
            restock_quantity,
            priority,
            category,
        }
    }

    /// Removes `quantity` units from stock.
    ///
    /// Leaves the product untouched when there is not enough stock.
    pub fn withdraw(&mut self, quantity: u64) -> Result<(), ProductError> {
        if quantity > self.stock_quantity {
            return Err(ProductError::InsufficientStock);
        }
        self.stock_quantity -= quantity;
        Ok(())
    }

    /// Adds one restock batch. Only low priority products accept manual restocks.
    pub fn restock_manually(&mut self) -> Result<(), ProductError> {
        if self.priority != ProductPriority::Low {
            return Err(ProductError::OnlyLowPriorityRestock);
        }
        self.stock_quantity = self.stock_quantity.saturating_add(self.restock_quantity);
        Ok(())
    }
}
