use std::sync::Arc;

use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

/// Loads `.env` and environment settings, builds the in-memory catalog, wires
/// the shopping service behind the HTTP routes and serves until shutdown.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenv().ok();

    let config = AppConfig::from_env();
    let dao = Arc::new(config.catalog.init_catalog()?);
    tracing::info!(products = dao.len(), "Catalog ready");

    let container = DependencyContainer::new(dao);
    Server::run(config, container).await
}
