use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

use super::cart::Cart;
use super::errors::BuyError;

#[async_trait]
pub trait ShoppingService: Send + Sync {
    async fn get_all_products(&self) -> Result<Vec<Product>, ProductError>;

    async fn get_product_by_name(&self, name: &str) -> Result<Product, ProductError>;

    /// Checks every cart entry against the product's available count.
    ///
    /// Returns `Ok(false)` for an empty cart and `Ok(true)` when all requested
    /// quantities are covered. A single uncovered entry fails the whole cart;
    /// stock is left untouched either way.
    async fn buy(&self, cart: &Cart) -> Result<bool, BuyError>;
}
