use http::{HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

/// Build the CORS layer from the configured origin allowlist.
///
/// Origins that fail header-value parsing are skipped with a warning. An
/// empty list leaves the policy matching no origin, so cross-origin requests
/// simply receive no CORS headers.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|s| s.parse::<HeaderValue>().ok())
        .collect();

    if origins.len() < allowed_origins.len() {
        tracing::warn!(
            "Ignoring {} malformed CORS origin(s)",
            allowed_origins.len() - origins.len()
        );
    }

    // Browsers treat `Access-Control-Allow-Headers: *` literally on
    // credentialed requests, so "any header" has to be expressed by mirroring
    // the preflight's requested headers instead.
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
