use std::env;
use std::path::PathBuf;

use persistence::catalog::load_catalog;
use persistence::product::dao::InMemoryProductDao;

/// Where the product catalog is read from at startup.
pub struct CatalogConfig {
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Environment variables:
    /// - CATALOG_PATH: JSON catalog file (optional; empty catalog when unset)
    pub fn from_env() -> Self {
        Self {
            path: env::var("CATALOG_PATH").ok().map(PathBuf::from),
        }
    }

    /// Builds the in-memory catalog.
    ///
    /// # Errors
    /// Returns error if the configured file cannot be read or parsed
    pub fn init_catalog(&self) -> anyhow::Result<InMemoryProductDao> {
        match &self.path {
            Some(path) => Ok(load_catalog(path)?),
            None => {
                tracing::warn!("CATALOG_PATH not set, starting with an empty catalog");
                Ok(InMemoryProductDao::default())
            }
        }
    }
}
