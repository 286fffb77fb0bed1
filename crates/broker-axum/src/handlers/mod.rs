//! HTTP request handlers for the Axum web server.
//!
//! Each submodule contains handlers for a specific API area.
//! Handlers are thin wrappers over the catalog, the diagnostics snapshot
//! and the document store.

pub mod catalog;
pub mod inquiries;
pub mod status;
