//! API routes for records-server

pub mod employee;
pub mod health;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Base path of the employee resources
pub const BASE_PATH: &str = "/records";

/// Create the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest(BASE_PATH, employee::router())
        .route("/health", get(health::health_check))
        .layer(DefaultBodyLimit::max(1024 * 1024)) // 1MB
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
