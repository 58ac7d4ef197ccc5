use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

// the dashboard is served from its own origin and only ever reads
pub fn cors_layer() -> CorsLayer {
  CorsLayer::new()
    .allow_origin(Any)
    .allow_methods([Method::GET])
    .allow_headers(Any)
}
