//! Route definitions and router construction.
//!
//! This module defines the HTTP routes and creates the main router.

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Build the `/api` routes without the prefix (for nesting under /api).
///
/// The caller applies `.with_state()`.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(handlers::status::hello))
        // Catalog API
        .route("/profile", get(handlers::catalog::profile))
        .route("/services", get(handlers::catalog::services))
        // Inquiries API
        .route("/inquiries", post(handlers::inquiries::create))
}

/// Create the main Axum router with all routes.
///
/// CORS and request tracing wrap every route, including the root and
/// diagnostics endpoints.
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/", get(handlers::status::root))
        .route("/test", get(handlers::status::diagnostics))
        .nest("/api", api_routes())
        .with_state(state)
        .layer(build_cors_layer(cors_config))
        .layer(TraceLayer::new_for_http())
}
