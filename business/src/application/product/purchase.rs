use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::restock_policy::reconcile_stock;
use crate::domain::product::use_cases::purchase::{PurchaseProductParams, PurchaseProductUseCase};

pub struct PurchaseProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub write_lock: Arc<Mutex<()>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PurchaseProductUseCase for PurchaseProductUseCaseImpl {
    async fn execute(&self, params: PurchaseProductParams) -> Result<u64, ProductError> {
        let quantity = u64::try_from(params.quantity)
            .ok()
            .filter(|q| *q > 0)
            .ok_or(ProductError::InvalidPurchaseQuantity)?;

        let _guard = self.write_lock.lock().await;
        let mut inventory = self.repository.load().await?;

        let mut product = inventory
            .remove(&params.product_id)
            .ok_or(ProductError::NotFound)?;
        product.withdraw(quantity)?;

        let product = reconcile_stock(product);
        let updated_stock = product.stock_quantity;

        inventory.insert(params.product_id.clone(), product);
        self.repository.save(&inventory).await?;

        self.logger.info(&format!(
            "Purchased {} of product {}",
            quantity, params.product_id
        ));

        Ok(updated_stock)
    }
}
