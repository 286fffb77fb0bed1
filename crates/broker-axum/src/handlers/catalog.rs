//! Catalog handlers - broker profile and services.

use axum::Json;
use axum::extract::State;
use broker_core::BrokerProfile;

use crate::dto::ServicesResponse;
use crate::state::AppState;

/// Get the broker profile.
pub async fn profile(State(state): State<AppState>) -> Json<BrokerProfile> {
    Json(state.catalog.profile().clone())
}

/// List services in their configured order.
pub async fn services(State(state): State<AppState>) -> Json<ServicesResponse> {
    Json(ServicesResponse {
        services: state.catalog.services().to_vec(),
    })
}
