//! Health check endpoints
//!
//! - /health - Basic health check
//! - /health/ready - Readiness probe (pings the SQLite pool)
//! - /health/live - Liveness probe

use crate::{db, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<HealthChecks>,
}

impl HealthResponse {
    fn new(status: &'static str) -> Self {
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks: None,
        }
    }
}

/// Individual health checks
#[derive(Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
}

/// Status of an individual check
#[derive(Serialize)]
pub struct CheckStatus {
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckStatus {
    fn from_result(result: anyhow::Result<()>) -> Self {
        match result {
            Ok(()) => Self {
                healthy: true,
                message: None,
            },
            Err(e) => Self {
                healthy: false,
                message: Some(e.to_string()),
            },
        }
    }
}

/// Basic health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::new("healthy"))
}

/// Readiness probe; 503 while the database is unreachable
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let database = CheckStatus::from_result(db::health_check(state.db()).await);
    let ready = database.healthy;

    let mut response = HealthResponse::new(if ready { "ready" } else { "not_ready" });
    response.checks = Some(HealthChecks { database });

    if ready {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Liveness probe
pub async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse::new("alive"))
}
