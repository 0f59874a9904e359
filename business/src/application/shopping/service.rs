use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::dao::ProductDao;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shopping::cart::Cart;
use crate::domain::shopping::errors::BuyError;
use crate::domain::shopping::service::ShoppingService;

pub struct ShoppingServiceImpl {
    pub dao: Arc<dyn ProductDao>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ShoppingService for ShoppingServiceImpl {
    async fn get_all_products(&self) -> Result<Vec<Product>, ProductError> {
        self.logger.info("Fetching all products");
        let products = self.dao.get_all().await?;
        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }

    async fn get_product_by_name(&self, name: &str) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Fetching product by name: {}", name));

        let product = self.dao.get_by_name(name).await.map_err(|e| match e {
            RepositoryError::NotFound => ProductError::NotFound,
            other => ProductError::Repository(other),
        })?;

        Ok(product)
    }

    async fn buy(&self, cart: &Cart) -> Result<bool, BuyError> {
        if cart.is_empty() {
            self.logger.debug("Nothing to buy, cart is empty");
            return Ok(false);
        }

        self.logger
            .info(&format!("Buying cart with {} products", cart.len()));

        if let Some((product, requested)) = cart
            .products()
            .iter()
            .find(|(product, requested)| !product.covers(**requested))
        {
            self.logger.warn(&format!(
                "Rejected purchase of {} x {}: only {} in stock",
                requested, product.name, product.count
            ));
            return Err(BuyError::InsufficientStock {
                product: product.name.clone(),
                requested: *requested,
                available: product.count,
            });
        }

        self.logger.info("Cart bought");
        Ok(true)
    }
}
