use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::product::dao::ProductDao;
use business::domain::product::model::Product;

/// Catalog held in memory, in the order it was loaded.
#[derive(Debug, Default)]
pub struct InMemoryProductDao {
    products: Vec<Product>,
}

impl InMemoryProductDao {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl ProductDao for InMemoryProductDao {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.clone())
    }

    async fn get_by_name(&self, name: &str) -> Result<Product, RepositoryError> {
        self.products
            .iter()
            .find(|product| product.name == name)
            .cloned()
            .ok_or_else(RepositoryError::not_found)
    }
}
