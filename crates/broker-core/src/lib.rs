#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use config::{DEFAULT_PORT, DatabaseEnv, StoreConfig, StorePlan};
pub use domain::{
    BrokerCatalog, BrokerProfile, INQUIRY_COLLECTION, Inquiry, Service, ValidationError,
    validate_inquiry,
};
pub use ports::{DocumentStore, StoreAvailability, StoreError, validate_collection_name};
pub use services::diagnostics::{DiagnosticReport, diagnose, truncate_chars};
