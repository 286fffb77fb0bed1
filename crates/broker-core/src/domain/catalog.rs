//! Broker profile and service catalog.
//!
//! The catalog is built once at startup and shared read-only by every
//! request. Nothing in the API mutates it.

use serde::{Deserialize, Serialize};

/// Public profile of the brokerage.
///
/// `phone` and `location` serialize as `null` when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokerProfile {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
}

/// A single service line offered by the brokerage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub details: String,
}

impl Service {
    pub fn new(title: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            details: details.into(),
        }
    }
}

/// Static data served by the read-only endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokerCatalog {
    profile: BrokerProfile,
    services: Vec<Service>,
}

impl BrokerCatalog {
    /// Create a catalog from an explicit profile and ordered service list.
    pub const fn new(profile: BrokerProfile, services: Vec<Service>) -> Self {
        Self { profile, services }
    }

    /// The Oceanway Maritime Brokerage catalog shipped with the server.
    pub fn reference() -> Self {
        let profile = BrokerProfile {
            name: "Oceanway Maritime Brokerage".to_string(),
            tagline: "Chartering • S&P • Logistics • Consulting".to_string(),
            description: concat!(
                "We help cargo owners, ship owners and traders move goods across the globe. ",
                "From dry bulk and project cargo to tankers and offshore support, our team ",
                "provides reliable chartering, sale & purchase advisory, post-fixture support ",
                "and tailored consulting."
            )
            .to_string(),
            email: "contact@oceanway-broker.com".to_string(),
            phone: Some("+44 20 7123 4567".to_string()),
            location: Some("London • Dubai • Singapore".to_string()),
        };

        let services = vec![
            Service::new(
                "Chartering",
                "Dry bulk, tankers, container and project cargo across major global routes.",
            ),
            Service::new(
                "Sale & Purchase",
                "Advisory for vessel acquisitions, disposals and valuations.",
            ),
            Service::new(
                "Logistics",
                "End-to-end logistics planning, port agency coordination and post-fixture.",
            ),
            Service::new(
                "Consulting",
                "Market insights, freight tenders, risk management and strategy.",
            ),
        ];

        Self::new(profile, services)
    }

    pub const fn profile(&self) -> &BrokerProfile {
        &self.profile
    }

    /// Services in their configured order.
    pub fn services(&self) -> &[Service] {
        &self.services
    }
}

impl Default for BrokerCatalog {
    fn default() -> Self {
        Self::reference()
    }
}
