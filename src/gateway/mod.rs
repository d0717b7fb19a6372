pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use anyhow::{Context, Result};
use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;
use tokio::net::TcpListener;

// OpenAPI / Swagger UI
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::GatewayConfig;
use state::AppState;

/// Build the HTTP router over shared state
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/health", get(handlers::health_check))
        .route(
            "/api/orders",
            get(handlers::list_orders).post(handlers::create_order),
        )
        .route("/api/orders/duplicate", get(handlers::check_duplicate))
        .route(
            "/api/orders/status/{transaction_id}",
            get(handlers::get_order_status),
        )
        .route("/api/orders/active/count", get(handlers::count_active_orders))
        .route("/api/orders/{id}/status", put(handlers::update_order_status))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Start the HTTP server and run until Ctrl-C
pub async fn run_server(config: &GatewayConfig, state: Arc<AppState>) -> Result<()> {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {} (port already in use?)", addr))?;

    tracing::info!("Gateway listening on http://{}", addr);
    tracing::info!("API Docs: http://{}/docs", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
