//! # HTTP API
//!
//! axum router for the résumé gate.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/health` | liveness + whether the gate is configured |
//! | POST | `/api/resume/unlock` | check the password, issue the access cookie |
//! | GET | `/api/resume/download` | serve the protected PDF to cookie holders |
//!
//! Handlers are stateless. The only shared value is the immutable
//! [`GateConfig`] built at startup.

mod error;
mod handlers;
mod types;

pub use error::ApiError;
pub use handlers::{download_resume, health, unlock_resume};
pub use types::{ErrorResponse, HealthResponse, UnlockRequest, UnlockResponse};

use axum::Router;
use axum::routing::{get, post};
use folio_core::GateConfig;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Path of the unlock endpoint.
pub const UNLOCK_PATH: &str = "/api/resume/unlock";

/// Path of the download endpoint.
pub const DOWNLOAD_PATH: &str = "/api/resume/download";

// =============================================================================
// STATE
// =============================================================================

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<GateConfig>,
}

impl AppState {
    pub fn new(config: GateConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

// =============================================================================
// ROUTER
// =============================================================================

/// Build the router with `config` injected into every handler.
pub fn create_router(config: GateConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(UNLOCK_PATH, post(unlock_resume))
        .route(DOWNLOAD_PATH, get(download_resume))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(AppState::new(config))
}

/// Bind `addr` and serve until Ctrl-C or SIGTERM.
pub async fn serve(addr: SocketAddr, config: GateConfig) -> std::io::Result<()> {
    if !config.is_enabled() {
        tracing::warn!("RESUME_PASSWORD is not set; resume download is disabled");
    }

    let app = create_router(config);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "folio server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("folio server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
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
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
