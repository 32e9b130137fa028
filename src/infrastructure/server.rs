// Server module - Provides the HTTP router and listener used by main.rs

use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::infrastructure::AppState;

/// Build the application router with request tracing
pub fn build_router(db: DatabaseConnection) -> Router {
    router_with_state(AppState::new(db))
}

/// Build the application router around an existing state
pub fn router_with_state(state: AppState) -> Router {
    api::router(state).layer(TraceLayer::new_for_http())
}

/// Bind `host:port` and serve until the process is stopped
pub async fn start_server(db: DatabaseConnection, host: &str, port: u16) -> Result<(), String> {
    let app = build_router(db);

    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .map_err(|e| format!("Failed to bind to {}:{}: {}", host, port, e))?;

    match listener.local_addr() {
        Ok(addr) => tracing::info!("Catalog server listening on http://{}", addr),
        Err(_) => tracing::info!("Catalog server listening on {}:{}", host, port),
    }

    axum::serve(listener, app)
        .await
        .map_err(|e| format!("HTTP server error: {}", e))
}
