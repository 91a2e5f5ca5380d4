//! Product Catalog API
//!
//! Sellers register, log in for a bearer token and manage products.
//!
//! ## Architecture
//!
//! - Routes: HTTP request handling and routing
//! - Services: Business rules (validation, ownership, admin-only deletes)
//! - Repositories: Data access
//! - Database: SQLite with SQLx

use anyhow::Result;
use product_catalog_backend::{config, db, routes, state::AppState, telemetry};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    telemetry::init_tracing(&["product_catalog", "product_catalog_backend"]);

    let config = config::AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::AppConfig::is_production() { "production" } else { "development" },
        "Starting Product Catalog API"
    );

    if config::AppConfig::is_production() {
        let errors = config.production_errors();
        if !errors.is_empty() {
            for err in &errors {
                error!("Configuration error: {}", err);
            }
            anyhow::bail!("Invalid production configuration");
        }
    }

    info!("Connecting to database...");
    let db_pool = db::create_pool(&config.database.url, config.database.max_connections).await?;
    db::run_migrations(&db_pool).await?;

    let addr = config.server.address();
    let state = AppState::new(db_pool, config);
    let app = routes::create_router(state);

    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
