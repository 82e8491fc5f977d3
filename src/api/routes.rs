//! API Routes
//!
//! Configures the Axum router with all catalog server endpoints.

use axum::{
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_item, get_item, get_stats, health_handler, list_items, route_not_found, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /items` - List items with search and pagination
/// - `GET /items/:id` - Retrieve a single item
/// - `POST /items` - Create an item
/// - `GET /stats` - Summary statistics over the collection
/// - `GET /health` - Health check endpoint
/// - anything else - 404 "Route Not Found"
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/:id", get(get_item))
        .route("/stats", get(get_stats))
        .route("/health", get(health_handler))
        .fallback(route_not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
