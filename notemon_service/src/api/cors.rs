use axum::http::{HeaderName, Method, header};
use tower_http::cors::{Any, CorsLayer};

/// The permissive CORS policy the original contract exposes: any origin, the
/// auth + client-info headers, and the methods the API serves.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
}
