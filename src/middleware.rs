use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Request ID wrapper for use in request extensions
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Request ID middleware - adds a unique ID to each request
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    // Reuse an existing request ID from the header, or generate a new one
    let request_id: String = req
        .headers()
        .get("x-request-id")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    req.extensions_mut().insert(RequestId(request_id.clone()));

    tracing::info!(
        request_id = %request_id,
        method = %req.method(),
        path = %req.uri().path(),
        "Incoming request"
    );

    let mut response = next.run(req).await;

    // Echo the request ID on the response
    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert("x-request-id", header_value);
    }

    response
}
