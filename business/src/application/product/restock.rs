use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::restock::{RestockProductParams, RestockProductUseCase};

pub struct RestockProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub write_lock: Arc<Mutex<()>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RestockProductUseCase for RestockProductUseCaseImpl {
    async fn execute(&self, params: RestockProductParams) -> Result<u64, ProductError> {
        let _guard = self.write_lock.lock().await;
        let mut inventory = self.repository.load().await?;

        let product = inventory
            .get_mut(&params.product_id)
            .ok_or(ProductError::NotFound)?;

        if let Err(e) = product.restock_manually() {
            self.logger.warn(&format!(
                "Refused manual restock of {} product {}",
                product.priority, params.product_id
            ));
            return Err(e);
        }

        let restocked = product.restock_quantity;
        let updated_stock = product.stock_quantity;
        self.repository.save(&inventory).await?;

        self.logger.info(&format!(
            "Manually restocked {} of product {}",
            restocked, params.product_id
        ));
        Ok(updated_stock)
    }
}
