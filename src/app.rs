use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use std::path::Path;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::shared::AppState;
use crate::websockets::websocket_handler;

/// Builds the HTTP router
///
/// When `public_dir` is set, unmatched paths fall through to static files.
pub fn build_router(app_state: AppState, public_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .route("/ws", get(websocket_handler));

    let router = match public_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// GET /health
async fn health(State(app_state): State<AppState>) -> Json<Value> {
    let connections = app_state.connection_manager.count_connections().await;
    Json(json!({ "status": "ok", "connections": connections }))
}
