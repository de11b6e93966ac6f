use super::model::{NewProductProps, Product};
use super::value_objects::{ProductCategory, ProductPriority, StockStatus};

/// Lowest threshold a high priority product may carry.
pub const HIGH_PRIORITY_MIN_THRESHOLD: u64 = 10;

/// Restock batches strictly larger than this make a product high volume.
pub const HIGH_VOLUME_RESTOCK_LIMIT: u64 = 50;

/// Classifies a product by the size of its restock batch.
pub fn determine_category(restock_quantity: u64) -> ProductCategory {
    if restock_quantity > HIGH_VOLUME_RESTOCK_LIMIT {
        ProductCategory::HighVolume
    } else {
        ProductCategory::LowVolume
    }
}

/// Applies creation-time policy to a submitted product definition.
///
/// Business rules:
/// - High priority with a threshold under 10 -> threshold raised to 10
/// - Category is derived from the restock quantity and never recomputed later
pub fn normalize_on_create(props: NewProductProps) -> Product {
    let min_threshold = match props.priority {
        ProductPriority::High => props.min_threshold.max(HIGH_PRIORITY_MIN_THRESHOLD),
        ProductPriority::Low => props.min_threshold,
    };

    Product {
        category: determine_category(props.restock_quantity),
        product_id: props.product_id,
        name: props.name,
        stock_quantity: props.stock_quantity,
        min_threshold,
        restock_quantity: props.restock_quantity,
        priority: props.priority,
    }
}

/// Re-evaluates stock against the automatic restock policy.
///
/// A high priority product below its threshold receives exactly one restock
/// batch. The result may still sit below the threshold when the batch is
/// smaller than the deficit. Low priority products are returned untouched.
pub fn reconcile_stock(mut product: Product) -> Product {
    if product.priority == ProductPriority::High && product.stock_quantity < product.min_threshold
    {
        product.stock_quantity = product
            .stock_quantity
            .saturating_add(product.restock_quantity);
    }
    product
}

/// Derives the status label shown to clients.
///
/// Business rules:
/// - High priority -> always Ok, whatever the stock level
/// - No stock -> OutOfStock
/// - Stock under the threshold -> BelowThreshold
/// - Otherwise -> Ok
pub fn stock_status(product: &Product) -> StockStatus {
    if product.priority == ProductPriority::High {
        return StockStatus::Ok;
    }

    if product.stock_quantity == 0 {
        StockStatus::OutOfStock
    } else if product.stock_quantity < product.min_threshold {
        StockStatus::BelowThreshold
    } else {
        StockStatus::Ok
    }
}
