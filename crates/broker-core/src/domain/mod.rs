//! Domain types for the broker API.
//!
//! Pure data and validation rules. Nothing here performs I/O.

mod catalog;
mod inquiry;

pub use catalog::{BrokerCatalog, BrokerProfile, Service};
pub use inquiry::{INQUIRY_COLLECTION, Inquiry, ValidationError, validate_inquiry};
