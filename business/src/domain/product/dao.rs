use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;

/// Read-only access to the product catalog.
#[async_trait]
pub trait ProductDao: Send + Sync {
    /// Every known product, in catalog order.
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    /// Exact-match lookup. Unknown names yield [`RepositoryError::NotFound`].
    async fn get_by_name(&self, name: &str) -> Result<Product, RepositoryError>;
}
