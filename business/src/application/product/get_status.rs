use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::restock_policy::{reconcile_stock, stock_status};
use crate::domain::product::use_cases::get_status::{
    GetProductStatusParams, GetProductStatusUseCase, ProductStatusReport,
};

pub struct GetProductStatusUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub write_lock: Arc<Mutex<()>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductStatusUseCase for GetProductStatusUseCaseImpl {
    async fn execute(
        &self,
        params: GetProductStatusParams,
    ) -> Result<ProductStatusReport, ProductError> {
        self.logger
            .debug(&format!("Checking status of product: {}", params.product_id));

        let _guard = self.write_lock.lock().await;
        let mut inventory = self.repository.load().await?;

        let stored = inventory
            .remove(&params.product_id)
            .ok_or(ProductError::NotFound)?;
        let product = reconcile_stock(stored);
        let status = stock_status(&product);

        let report = ProductStatusReport {
            product_id: params.product_id.clone(),
            stock_quantity: product.stock_quantity,
            status,
            priority: product.priority,
        };

        inventory.insert(params.product_id, product);
        self.repository.save(&inventory).await?;

        self.logger.info(&format!(
            "Checked status of product {} - Status: {}",
            report.product_id, report.status
        ));
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{Inventory, Product};
    use crate::domain::product::restock_policy::determine_category;
    use crate::domain::product::value_objects::{ProductPriority, StockStatus};
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn load(&self) -> Result<Inventory, RepositoryError>;
            async fn save(&self, inventory: &Inventory) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn inventory_with(
        stock_quantity: u64,
        min_threshold: u64,
        restock_quantity: u64,
        priority: ProductPriority,
    ) -> Inventory {
        let product = Product::from_repository(
            "P1".to_string(),
            "Widget".to_string(),
            stock_quantity,
            min_threshold,
            restock_quantity,
            priority,
            determine_category(restock_quantity),
        );
        Inventory::from([("P1".to_string(), product)])
    }

    fn use_case(mock_repo: MockProductRepo) -> GetProductStatusUseCaseImpl {
        GetProductStatusUseCaseImpl {
            repository: Arc::new(mock_repo),
            write_lock: Arc::new(Mutex::new(())),
            logger: mock_logger(),
        }
    }

    fn params() -> GetProductStatusParams {
        GetProductStatusParams {
            product_id: "P1".to_string(),
        }
    }

    #[tokio::test]
    async fn should_auto_restock_and_persist_high_priority_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_load()
            .returning(|| Ok(inventory_with(5, 10, 60, ProductPriority::High)));
        mock_repo
            .expect_save()
            .withf(|inventory| inventory["P1"].stock_quantity == 65)
            .times(1)
            .returning(|_| Ok(()));

        let report = use_case(mock_repo).execute(params()).await.unwrap();

        assert_eq!(report.stock_quantity, 65);
        assert_eq!(report.status, StockStatus::Ok);
        assert_eq!(report.priority, ProductPriority::High);
    }

    #[tokio::test]
    async fn should_report_ok_for_high_priority_still_below_threshold() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_load()
            .returning(|| Ok(inventory_with(0, 50, 5, ProductPriority::High)));
        mock_repo.expect_save().returning(|_| Ok(()));

        let report = use_case(mock_repo).execute(params()).await.unwrap();

        assert_eq!(report.stock_quantity, 5);
        assert_eq!(report.status, StockStatus::Ok);
    }

    #[tokio::test]
    async fn should_report_below_threshold_for_low_priority() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_load()
            .returning(|| Ok(inventory_with(1, 2, 30, ProductPriority::Low)));
        mock_repo
            .expect_save()
            .withf(|inventory| inventory["P1"].stock_quantity == 1)
            .returning(|_| Ok(()));

        let report = use_case(mock_repo).execute(params()).await.unwrap();

        assert_eq!(report.stock_quantity, 1);
        assert_eq!(report.status, StockStatus::BelowThreshold);
    }

    #[tokio::test]
    async fn should_report_out_of_stock_for_empty_low_priority() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_load()
            .returning(|| Ok(inventory_with(0, 2, 30, ProductPriority::Low)));
        mock_repo.expect_save().returning(|_| Ok(()));

        let report = use_case(mock_repo).execute(params()).await.unwrap();

        assert_eq!(report.status, StockStatus::OutOfStock);
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_is_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_load().returning(|| Ok(Inventory::new()));
        mock_repo.expect_save().never();

        let result = use_case(mock_repo).execute(params()).await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
