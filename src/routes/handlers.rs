use crate::error::AppResult;
use axum::extract::State;
use axum::response::{IntoResponse, Json};
use std::sync::Arc;

use super::types::{HealthCheckResponse, MessageResponse};
use super::AppState;

/// Root greeting endpoint
pub async fn root() -> AppResult<impl IntoResponse> {
    Ok(Json(MessageResponse {
        message: "Welcome to Podacium API".to_string(),
    }))
}

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> AppResult<impl IntoResponse> {
    let response = HealthCheckResponse {
        status: "healthy".to_string(),
        uptime: state.started_at.elapsed().as_secs(),
        timestamp: chrono::Utc::now(),
    };

    Ok(Json(response))
}
