//! Inquiry handlers - accept and persist customer inquiries.

use axum::Json;
use axum::extract::State;
use broker_core::{INQUIRY_COLLECTION, StoreError};

use crate::dto::InquiryCreated;
use crate::error::HttpError;
use crate::extract::ValidatedInquiry;
use crate::state::AppState;

/// Store a validated inquiry.
///
/// Single attempt: any store failure is returned as a 500 with its message.
pub async fn create(
    State(state): State<AppState>,
    ValidatedInquiry(inquiry): ValidatedInquiry,
) -> Result<Json<InquiryCreated>, HttpError> {
    let store = state.store.connected().inspect_err(|e| {
        tracing::warn!("Inquiry rejected, no document store: {}", e);
    })?;

    let document =
        serde_json::to_value(&inquiry).map_err(|e| StoreError::Serialization(e.to_string()))?;

    let id = store
        .create_document(INQUIRY_COLLECTION, document)
        .await
        .inspect_err(|e| tracing::warn!("Failed to store inquiry: {}", e))?;

    tracing::info!(id = %id, "Inquiry stored");
    Ok(Json(InquiryCreated::stored(id)))
}
