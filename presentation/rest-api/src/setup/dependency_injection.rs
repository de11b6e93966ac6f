use std::sync::Arc;

use tokio::sync::Mutex;

use logger::TracingLogger;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::get_status::GetProductStatusUseCaseImpl;
use business::application::product::list_all::ListAllProductsUseCaseImpl;
use business::application::product::purchase::PurchaseProductUseCaseImpl;
use business::application::product::restock::RestockProductUseCaseImpl;
use business::domain::product::repository::ProductRepository;

use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
}

impl DependencyContainer {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        let logger = Arc::new(TracingLogger);
        // Serialises load -> mutate -> save across every mutating use case.
        let write_lock = Arc::new(Mutex::new(()));

        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: repository.clone(),
            write_lock: write_lock.clone(),
            logger: logger.clone(),
        });
        let get_status_use_case = Arc::new(GetProductStatusUseCaseImpl {
            repository: repository.clone(),
            write_lock: write_lock.clone(),
            logger: logger.clone(),
        });
        let list_all_use_case = Arc::new(ListAllProductsUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let purchase_use_case = Arc::new(PurchaseProductUseCaseImpl {
            repository: repository.clone(),
            write_lock: write_lock.clone(),
            logger: logger.clone(),
        });
        let restock_use_case = Arc::new(RestockProductUseCaseImpl {
            repository,
            write_lock,
            logger,
        });

        let product_api = ProductApi::new(
            create_use_case,
            get_status_use_case,
            list_all_use_case,
            purchase_use_case,
            restock_use_case,
        );

        Self {
            health_api: HealthApi::new(),
            product_api,
        }
    }
}
