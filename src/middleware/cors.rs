use tower_http::cors::{Any, CorsLayer};

/// The API serves a first-party SPA plus local tooling; origins are not
/// restricted.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(Any)
}
