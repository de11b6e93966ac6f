use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Inventory;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::list_all::ListAllProductsUseCase;

pub struct ListAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListAllProductsUseCase for ListAllProductsUseCaseImpl {
    async fn execute(&self) -> Result<Inventory, ProductError> {
        self.logger.debug("Fetching all products");
        let inventory = self.repository.load().await?;
        self.logger.debug(&format!("Found {} products", inventory.len()));
        Ok(inventory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::Product;
    use crate::domain::product::value_objects::{ProductCategory, ProductPriority};
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

    #[tokio::test]
    async fn should_return_stored_mapping_without_reconciling() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_load().returning(|| {
            // High priority and below threshold: a status check would restock it.
            let product = Product::from_repository(
                "P1".to_string(),
                "Widget".to_string(),
                2,
                10,
                60,
                ProductPriority::High,
                ProductCategory::HighVolume,
            );
            Ok(Inventory::from([("P1".to_string(), product)]))
        });
        mock_repo.expect_save().never();

        let use_case = ListAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let inventory = use_case.execute().await.unwrap();

        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory["P1"].stock_quantity, 2);
    }

    #[tokio::test]
    async fn should_return_empty_mapping_when_nothing_stored() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_load().returning(|| Ok(Inventory::new()));

        let use_case = ListAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let inventory = use_case.execute().await.unwrap();

        assert!(inventory.is_empty());
    }
}
