use axum::{
    extract::{DefaultBodyLimit, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router<AppState> {
    let system_config = &state.config.system_config;
    let body_limit = DefaultBodyLimit::max(system_config.max_upload_bytes);

    Router::new()
        // Pages
        .route("/", get(handlers::home))
        .route("/form", get(handlers::form_page))
        .route("/result", post(handlers::result).layer(body_limit))
        .route("/feedback", post(handlers::feedback).layer(body_limit))

        // Health check
        .route("/api/health", get(health_check))

        // Uploaded documents
        .nest_service("/static/uploads", ServeDir::new(system_config.upload_path()))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "api_configured": state.orchestrator.has_backend()
    }))
}
