//! Status handlers - liveness messages and deployment diagnostics.

use axum::Json;
use axum::extract::State;
use broker_core::{DiagnosticReport, diagnose};

use crate::dto::MessageResponse;
use crate::state::AppState;

pub const ROOT_MESSAGE: &str = "Maritime Broker API is running";
pub const HELLO_MESSAGE: &str = "Hello from the backend API!";

/// Root status message.
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new(ROOT_MESSAGE))
}

pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse::new(HELLO_MESSAGE))
}

/// Report backend and document store status.
///
/// Always answers 200: store failures are described in the body instead.
pub async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticReport> {
    Json(diagnose(&state.store, state.database_env).await)
}
