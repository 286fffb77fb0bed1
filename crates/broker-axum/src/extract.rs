//! Request extractors that validate input before handlers run.

use axum::Json;
use axum::extract::{FromRequest, Request};
use broker_core::{Inquiry, validate_inquiry};
use serde_json::Value;

use crate::error::HttpError;

/// A request body parsed as JSON and validated as an [`Inquiry`].
///
/// Bodies axum cannot read as JSON keep axum's status (400 for bad syntax,
/// 415 without a JSON content type). Schema violations are 422, so handlers
/// taking this extractor only ever see valid inquiries.
#[derive(Debug)]
pub struct ValidatedInquiry(pub Inquiry);

impl<S> FromRequest<S> for ValidatedInquiry
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(raw) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| HttpError::Rejected {
                status: rejection.status(),
                message: rejection.body_text(),
            })?;

        let inquiry = validate_inquiry(&raw)?;
        Ok(Self(inquiry))
    }
}
