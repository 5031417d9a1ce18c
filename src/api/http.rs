//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use super::page::search_page;
use super::rest::{categories, search, table};
use super::state::AppState;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Browser page
        .route("/", get(search_page))
        // Health check
        .route("/health", get(health_check))
        // REST API endpoints
        .route("/api/search", get(search::search_rows))
        .route("/api/categories", get(categories::list_categories))
        .route("/api/table/stats", get(table::get_stats))
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
