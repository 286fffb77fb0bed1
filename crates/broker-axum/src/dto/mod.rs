//! Data Transfer Objects for the HTTP API.
//!
//! Response shapes that exist only at the HTTP boundary.

mod responses;

pub use responses::{InquiryCreated, MessageResponse, ServicesResponse};
