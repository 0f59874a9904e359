use std::sync::Arc;

use business::application::shopping::service::ShoppingServiceImpl;
use business::domain::product::dao::ProductDao;
use logger::TracingLogger;

use crate::api::cart::routes::CartApi;
use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub cart_api: CartApi,
}

impl DependencyContainer {
    pub fn new(dao: Arc<dyn ProductDao>) -> Self {
        let logger = Arc::new(TracingLogger);

        let shopping_service = Arc::new(ShoppingServiceImpl { dao, logger });

        Self {
            health_api: HealthApi,
            product_api: ProductApi::new(shopping_service.clone()),
            cart_api: CartApi::new(shopping_service),
        }
    }
}
