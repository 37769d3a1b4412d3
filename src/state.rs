use std::time::Instant;

/// Application state shared across all HTTP handlers.
///
/// This struct is wrapped in `Arc` and shared across all request handlers
/// via Axum's State extraction. It is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// Instant the process finished startup, used for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
