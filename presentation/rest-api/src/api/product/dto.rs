use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductResponse {
    /// Product name, unique within the catalog
    pub name: String,
    /// Units currently in stock
    pub count: u32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            count: product.count,
        }
    }
}
