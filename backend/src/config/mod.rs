//! Configuration management for the product catalog services
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: PC__)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub movies: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// JWT configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    /// Lifetime of every access token; applied uniformly at issue time
    pub access_token_expiry_secs: i64,
}

/// Authorization configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// The only account allowed to delete products
    pub admin_username: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_username: "admin".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8000,
            },
            movies: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8001,
            },
            database: DatabaseConfig {
                url: "sqlite://product.db?mode=rwc".to_string(),
                max_connections: 5,
            },
            jwt: JwtConfig {
                secret: "development-secret-change-in-production".to_string(),
                access_token_expiry_secs: 20 * 60, // 20 minutes
            },
            auth: AuthConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with PC__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            // e.g., PC__JWT__SECRET=... sets jwt.secret
            .add_source(config::Environment::with_prefix("PC").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }

    /// Problems that must block a production start-up
    pub fn production_errors(&self) -> Vec<&'static str> {
        let mut errors = Vec::new();
        if self.jwt.secret.contains("development") || self.jwt.secret.len() < 32 {
            errors.push("JWT secret must be at least 32 characters and not contain 'development'");
        }
        if self.jwt.access_token_expiry_secs <= 0 {
            errors.push("JWT access token expiry must be positive");
        }
        errors
    }
}
