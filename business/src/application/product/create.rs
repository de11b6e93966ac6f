use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub write_lock: Arc<Mutex<()>>,
    pub logger: Arc<dyn Logger>,
}

fn non_negative(value: i64, field: &'static str) -> Result<u64, ProductError> {
    u64::try_from(value).map_err(|_| ProductError::NegativeQuantity { field })
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.product_id));

        let product = Product::new(NewProductProps {
            stock_quantity: non_negative(params.stock_quantity, "stock_quantity")?,
            min_threshold: non_negative(params.min_threshold, "min_threshold")?,
            restock_quantity: non_negative(params.restock_quantity, "restock_quantity")?,
            product_id: params.product_id,
            name: params.name,
            priority: params.priority,
        })?;

        let _guard = self.write_lock.lock().await;
        let mut inventory = self.repository.load().await?;

        if inventory.contains_key(&product.product_id) {
            self.logger.warn(&format!(
                "Rejected duplicate product id: {}",
                product.product_id
            ));
            return Err(ProductError::AlreadyExists);
        }

        inventory.insert(product.product_id.clone(), product.clone());
        self.repository.save(&inventory).await?;

        self.logger
            .info(&format!("Added product {}", product.product_id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::Inventory;
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

    fn use_case(mock_repo: MockProductRepo) -> CreateProductUseCaseImpl {
        CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            write_lock: Arc::new(Mutex::new(())),
            logger: mock_logger(),
        }
    }

    fn high_priority_params() -> CreateProductParams {
        CreateProductParams {
            product_id: "P1".to_string(),
            name: "Test Widget".to_string(),
            stock_quantity: 5,
            min_threshold: 4,
            restock_quantity: 60,
            priority: ProductPriority::High,
        }
    }

    fn low_priority_params() -> CreateProductParams {
        CreateProductParams {
            product_id: "P2".to_string(),
            name: "Low Priority Widget".to_string(),
            stock_quantity: 3,
            min_threshold: 2,
            restock_quantity: 30,
            priority: ProductPriority::Low,
        }
    }

    #[tokio::test]
    async fn should_enforce_threshold_when_creating_high_priority_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_load().returning(|| Ok(Inventory::new()));
        mock_repo
            .expect_save()
            .withf(|inventory| {
                inventory
                    .get("P1")
                    .is_some_and(|p| p.min_threshold == 10 && p.stock_quantity == 5)
            })
            .times(1)
            .returning(|_| Ok(()));

        let result = use_case(mock_repo).execute(high_priority_params()).await;

        assert!(result.is_ok());
        let product = result.unwrap();
        assert_eq!(product.min_threshold, 10);
        assert_eq!(product.category, ProductCategory::HighVolume);
        assert_eq!(product.priority, ProductPriority::High);
    }

    #[tokio::test]
    async fn should_store_low_priority_product_unchanged() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_load().returning(|| Ok(Inventory::new()));
        mock_repo.expect_save().times(1).returning(|_| Ok(()));

        let product = use_case(mock_repo)
            .execute(low_priority_params())
            .await
            .unwrap();

        assert_eq!(product.min_threshold, 2);
        assert_eq!(product.stock_quantity, 3);
        assert_eq!(product.category, ProductCategory::LowVolume);
    }

    #[tokio::test]
    async fn should_reject_duplicate_product_id_without_saving() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_load().returning(|| {
            let existing = Product::new(NewProductProps {
                product_id: "P1".to_string(),
                name: "Existing".to_string(),
                stock_quantity: 1,
                min_threshold: 1,
                restock_quantity: 1,
                priority: ProductPriority::Low,
            })
            .unwrap();
            Ok(Inventory::from([("P1".to_string(), existing)]))
        });
        mock_repo.expect_save().never();

        let result = use_case(mock_repo).execute(high_priority_params()).await;

        assert!(matches!(result.unwrap_err(), ProductError::AlreadyExists));
    }

    #[tokio::test]
    async fn should_reject_negative_quantities_before_touching_storage() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_load().never();
        mock_repo.expect_save().never();

        let mut params = low_priority_params();
        params.restock_quantity = -1;

        let result = use_case(mock_repo).execute(params).await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::NegativeQuantity {
                field: "restock_quantity"
            }
        ));
    }

    #[tokio::test]
    async fn should_reject_blank_product_id() {
        let mock_repo = MockProductRepo::new();

        let mut params = low_priority_params();
        params.product_id = "".to_string();

        let result = use_case(mock_repo).execute(params).await;

        assert!(matches!(result.unwrap_err(), ProductError::IdEmpty));
    }

    #[tokio::test]
    async fn should_propagate_storage_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_load()
            .returning(|| Err(RepositoryError::StorageUnavailable));

        let result = use_case(mock_repo).execute(low_priority_params()).await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::StorageUnavailable)
        ));
    }
}
