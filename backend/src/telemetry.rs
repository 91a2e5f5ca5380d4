//! Logging setup and shutdown signalling shared by both binaries

use crate::config::AppConfig;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging
///
/// `RUST_LOG` wins when set; otherwise `targets` log at info in production
/// and at debug in development.
pub fn init_tracing(targets: &[&str]) {
    let production = AppConfig::is_production();
    let level = if production { "info" } else { "debug" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let mut directives: Vec<String> = targets
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect();
        directives.push(format!("tower_http={level}"));
        directives.push("sqlx=warn".to_string());
        directives.join(",").into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if production {
        // JSON logging for log aggregation
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

/// Resolves on Ctrl+C or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
