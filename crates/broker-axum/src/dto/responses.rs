//! Response bodies for the broker endpoints.

use broker_core::Service;
use serde::{Deserialize, Serialize};

/// Plain status message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Service list wrapped in a named field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicesResponse {
    pub services: Vec<Service>,
}

/// Confirmation of a stored inquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryCreated {
    pub success: bool,
    /// Identifier assigned by the document store.
    pub id: String,
}

impl InquiryCreated {
    pub const fn stored(id: String) -> Self {
        Self { success: true, id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inquiry_created_shape() {
        let json = serde_json::to_value(InquiryCreated::stored("abc123".to_string())).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true, "id": "abc123" }));
    }

    #[test]
    fn test_services_wrapped_in_named_field() {
        let body = ServicesResponse {
            services: vec![Service::new("Chartering", "Dry bulk")],
        };

        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["services"][0]["title"], "Chartering");
        assert_eq!(json["services"][0]["details"], "Dry bulk");
    }
}
