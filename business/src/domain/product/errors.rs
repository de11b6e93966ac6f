#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.id_empty")]
    IdEmpty,
    #[error("product.negative_quantity")]
    NegativeQuantity { field: &'static str },
    #[error("product.invalid_purchase_quantity")]
    InvalidPurchaseQuantity,
    #[error("product.already_exists")]
    AlreadyExists,
    #[error("product.not_found")]
    NotFound,
    #[error("product.insufficient_stock")]
    InsufficientStock,
    #[error("product.only_low_priority_restock")]
    OnlyLowPriorityRestock,
    #[error("repository.storage_unavailable")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
