use serde::Serialize;

/// Root greeting response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    /// Seconds since the process started serving
    pub uptime: u64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
