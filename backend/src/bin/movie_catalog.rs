//! Movie Catalog demo
//!
//! Serves a pre-seeded, in-memory movie catalog. Nothing is persisted;
//! restarting the process restores the seed data.

use anyhow::Result;
use product_catalog_backend::{config, movies, telemetry};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    telemetry::init_tracing(&["movie_catalog", "product_catalog_backend"]);

    let config = config::AppConfig::load()?;
    let catalog = Arc::new(movies::MovieCatalog::seeded());
    let app = movies::create_router(catalog);

    let addr = config.movies.address();
    info!(address = %addr, version = env!("CARGO_PKG_VERSION"), "Movie catalog listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
