//! Axum server setup
//!
//! Server skeleton with:
//! - One configured CORS origin, credentials allowed
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::state::AppState;

/// Default browser origin allowed to call the API
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8000)
    pub bind_addr: SocketAddr,

    /// The single origin permitted for cross-origin browser calls
    pub allowed_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid allowed origin '{0}'")]
    InvalidOrigin(String),
}

/// CORS for exactly one origin.
///
/// Only a request whose `Origin` matches gets the allow headers back.
/// Methods and headers are mirrored from the preflight request, which is
/// the credential-compatible form of "allow all". A wildcard origin cannot
/// be combined with credentials and is rejected.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, ServerError> {
    if origin.trim() == "*" {
        return Err(ServerError::InvalidOrigin(origin.to_owned()));
    }

    let origin_header =
        HeaderValue::from_str(origin).map_err(|_| ServerError::InvalidOrigin(origin.to_owned()))?;

    Ok(CorsLayer::new()
        .allow_origin([origin_header])
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

/// Build the application router with all routes and middleware.
pub fn build_router(state: AppState, config: &ServerConfig) -> Result<Router, ServerError> {
    let cors = cors_layer(&config.allowed_origin)?;

    Ok(routes::router()
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Run the HTTP server until a shutdown signal arrives.
///
/// # Example
///
/// ```ignore
/// let repo = company_server::db::connect(&database_url, 5).await?;
/// run_server(AppState::new(repo), ServerConfig::default()).await?;
/// ```
pub async fn run_server(state: AppState, config: ServerConfig) -> Result<(), ServerError> {
    let app = build_router(state, &config)?;
    tracing::info!(origin = %config.allowed_origin, "CORS origin configured");

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}
