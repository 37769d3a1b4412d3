use crate::cors::cors_layer;
use crate::middleware::request_id_middleware;
use axum::middleware;
use axum::routing::get;
use std::sync::Arc;

use super::handlers;
use super::AppState;

/// Create application router
pub fn create_router(state: Arc<AppState>, allowed_origins: &[String]) -> axum::Router {
    let cors = cors_layer(allowed_origins);

    axum::Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .layer(cors)
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
