//! Inquiry records and their validation rules.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Collection that inquiries are persisted under.
pub const INQUIRY_COLLECTION: &str = "inquiry";

const MAX_NAME_LEN: usize = 200;
const MAX_EMAIL_LEN: usize = 254;
const MAX_PHONE_LEN: usize = 50;
const MAX_COMPANY_LEN: usize = 200;
const MAX_SUBJECT_LEN: usize = 200;
const MAX_MESSAGE_LEN: usize = 5000;

/// A validated request-for-service submitted by a client.
///
/// Only `validate_inquiry` produces values of this type from untrusted input,
/// so every instance has trimmed, non-empty required fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}

/// Rejection of a single field in an inquiry payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Validate a raw JSON payload and build an [`Inquiry`] from it.
///
/// Fields are checked in declaration order and the first failure is
/// returned. Unknown fields are ignored. Blank optional fields are treated
/// as absent.
pub fn validate_inquiry(raw: &Value) -> Result<Inquiry, ValidationError> {
    let Some(fields) = raw.as_object() else {
        return Err(ValidationError::new("body", "expected a JSON object"));
    };

    let name = required_string(fields, "name", MAX_NAME_LEN)?;
    let email = required_string(fields, "email", MAX_EMAIL_LEN)?;
    if !is_plausible_email(&email) {
        return Err(ValidationError::new(
            "email",
            "value is not a valid email address",
        ));
    }
    let phone = optional_string(fields, "phone", MAX_PHONE_LEN)?;
    let company = optional_string(fields, "company", MAX_COMPANY_LEN)?;
    let subject = optional_string(fields, "subject", MAX_SUBJECT_LEN)?;
    let message = required_string(fields, "message", MAX_MESSAGE_LEN)?;

    Ok(Inquiry {
        name,
        email,
        phone,
        company,
        subject,
        message,
    })
}

fn required_string(
    fields: &Map<String, Value>,
    field: &str,
    max_len: usize,
) -> Result<String, ValidationError> {
    match optional_string(fields, field, max_len)? {
        Some(value) => Ok(value),
        None if fields.get(field).is_none_or(Value::is_null) => {
            Err(ValidationError::new(field, "field required"))
        }
        None => Err(ValidationError::new(field, "must not be empty")),
    }
}

fn optional_string(
    fields: &Map<String, Value>,
    field: &str,
    max_len: usize,
) -> Result<Option<String>, ValidationError> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else if trimmed.chars().count() > max_len {
                Err(ValidationError::new(
                    field,
                    format!("must be at most {max_len} characters"),
                ))
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
        Some(_) => Err(ValidationError::new(field, "expected a string")),
    }
}

/// Structural check only: one `@`, a local part, and a dotted domain.
fn is_plausible_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    !local.is_empty()
        && !email.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, rest)| !host.is_empty() && !rest.is_empty())
        && !domain.ends_with('.')
}
