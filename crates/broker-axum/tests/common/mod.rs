//! Shared helpers for broker-axum integration tests.

// Not every test binary uses every helper
#![allow(dead_code)]

pub mod stores;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use broker_axum::bootstrap::{AxumContext, CorsConfig};
use broker_axum::routes::create_router;
use broker_core::{BrokerCatalog, DatabaseEnv, StoreAvailability};

/// Both database settings present.
pub const FULL_ENV: DatabaseEnv = DatabaseEnv {
    url_set: true,
    name_set: true,
};

/// Router over the reference catalog and the given store.
pub fn app_with(store: StoreAvailability, env: DatabaseEnv) -> Router {
    let ctx = AxumContext::new(BrokerCatalog::reference(), store, env);
    create_router(ctx, &CorsConfig::AllowAll)
}

/// Router with no document store configured.
pub fn app_without_store() -> Router {
    app_with(StoreAvailability::Missing, DatabaseEnv::default())
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    post_raw(uri, body.to_string())
}

pub fn post_raw(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

/// Send one request and decode the JSON response body.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or_else(|e| {
            panic!(
                "Expected JSON body, got {:?}: {}",
                String::from_utf8_lossy(&body),
                e
            )
        })
    };
    (status, json)
}
