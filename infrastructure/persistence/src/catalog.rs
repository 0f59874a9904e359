use std::collections::HashSet;
use std::fs;
use std::path::Path;

use business::domain::product::model::Product;
use thiserror::Error;

use crate::product::dao::InMemoryProductDao;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog.read_error")]
    Read(#[from] std::io::Error),
    #[error("catalog.parse_error")]
    Parse(#[from] serde_json::Error),
    #[error("catalog.duplicate_name")]
    DuplicateName(String),
}

/// Parses a JSON array of `{ "name": ..., "count": ... }` objects.
///
/// Names are lookup keys, so a catalog listing the same name twice is rejected.
pub fn parse_catalog(json: &str) -> Result<Vec<Product>, CatalogError> {
    let products: Vec<Product> = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    for product in &products {
        if !seen.insert(product.name.as_str()) {
            return Err(CatalogError::DuplicateName(product.name.clone()));
        }
    }

    Ok(products)
}

/// Reads the catalog file at `path` into an [`InMemoryProductDao`].
pub fn load_catalog(path: impl AsRef<Path>) -> Result<InMemoryProductDao, CatalogError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let products = parse_catalog(&contents)?;

    tracing::info!(
        path = %path.display(),
        products = products.len(),
        "Catalog loaded"
    );

    Ok(InMemoryProductDao::new(products))
}
