//! Axum-specific error types and mappings.
//!
//! This module provides the error type for the Axum adapter and mappings
//! from core errors to HTTP status codes and response bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use broker_core::{StoreError, ValidationError};
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Body could not be read as JSON. Carries the extractor's own status
    /// (400 for bad syntax, 415 for a missing JSON content type).
    #[error("Request rejected ({status}): {message}")]
    Rejected { status: StatusCode, message: String },

    /// Well-formed JSON that fails inquiry validation.
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
    /// Stable error type discriminant for client-side handling
    #[serde(skip_serializing_if = "Option::is_none", rename = "type")]
    error_type: Option<&'static str>,
    /// Optional additional metadata for specific error types
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<serde_json::Value>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message, error_type, metadata) = match &self {
            Self::Rejected { status, message } => (*status, message.clone(), None, None),
            Self::Validation { field, reason } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("{field}: {reason}"),
                Some("VALIDATION_FAILED"),
                Some(serde_json::json!({ "field": field, "reason": reason })),
            ),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone(), None, None),
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
            error_type,
            metadata,
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<ValidationError> for HttpError {
    fn from(err: ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            reason: err.reason,
        }
    }
}

impl From<StoreError> for HttpError {
    fn from(err: StoreError) -> Self {
        // Every persistence failure is a server error carrying the cause text
        Self::Internal(err.to_string())
    }
}
