//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! The state is immutable after creation; every field is cheap to clone.

use crate::auth::TokenService;
use crate::config::AppConfig;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Shared application state
///
/// - `db`: SqlitePool is internally Arc'd, cloning is O(1)
/// - `config`: Wrapped in Arc, cloning is O(1)
/// - `jwt`: Pre-computed keys wrapped in Arc, cloning is O(1)
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Token service with cached keys
    pub jwt: TokenService,
}

impl AppState {
    /// Create a new application state
    ///
    /// Derives the JWT keys from the configured secret, so call it once at
    /// startup.
    pub fn new(db: SqlitePool, config: AppConfig) -> Self {
        let jwt = TokenService::new(&config.jwt.secret, config.jwt.access_token_expiry_secs);

        Self {
            db,
            config: Arc::new(config),
            jwt,
        }
    }

    /// Get a reference to the database pool
    #[inline]
    pub fn db(&self) -> &SqlitePool {
        &self.db
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the token service
    #[inline]
    pub fn jwt(&self) -> &TokenService {
        &self.jwt
    }
}
