use poem_openapi::Object;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CartItemRequest {
    /// Catalog name of the product
    pub name: String,
    /// Units to buy (must be positive)
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct BuyCartRequest {
    /// Items to buy; repeated names are merged
    pub items: Vec<CartItemRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct BuyCartResponse {
    /// `false` when the cart was empty, `true` when every item is in stock
    pub purchased: bool,
}
