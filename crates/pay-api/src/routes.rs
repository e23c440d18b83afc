//! # Routes
//!
//! Axum router configuration for the checkout server.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Create the main application router
///
/// Routes:
/// - GET  /            - Checkout page
/// - POST /transaction - Create and capture an order
/// - GET  /health      - Health check
/// - everything else   - Static files from the client directory
pub fn create_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.client_dir);

    Router::new()
        .route("/", get(handlers::render_checkout))
        .route("/transaction", post(handlers::create_order))
        .route("/health", get(handlers::health))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
