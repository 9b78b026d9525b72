use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

/// JSON endpoints, nested under `/api` by the binary.
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/records", get(handlers::get_records))
        .route("/zones", get(handlers::get_zones))
        .route("/zones/{suffix}", get(handlers::get_zone))
        .with_state(state)
}

pub fn create_status_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::status_page))
        .with_state(state)
}
